//! The tree operations selectors need, and their implementation for
//! `ordinal_dom::DomTree` (feature `dom`, on by default).

use ordinal_common::node::NodeId;
#[cfg(feature = "dom")]
use ordinal_dom::DomTree;

use crate::error::{Result, SelectorError};

/// Read-only view of an element tree.
///
/// Structural pseudo-classes need exactly three things from a tree: an
/// element's tag name, its element siblings, and its element children.
/// Implementations must return siblings and children in tree order, and
/// an element's siblings always include the element itself.
pub trait ElementTree {
    /// The element's tag (local) name, or `None` if `element` is not an element.
    fn tag_name(&self, element: NodeId) -> Option<&str>;

    /// All element children of `element`'s parent, in tree order, including
    /// `element`. An element without a parent is its own only sibling.
    fn element_siblings(&self, element: NodeId) -> Vec<NodeId>;

    /// The element children of `element`, in tree order.
    fn child_elements(&self, element: NodeId) -> Vec<NodeId>;

    /// [§ 14.4 Typed child-indexed pseudo-classes](https://www.w3.org/TR/selectors-4/#typed-child-index)
    ///
    /// The element siblings sharing `element`'s tag name (ASCII
    /// case-insensitive), in tree order, including `element`.
    fn siblings_of_type(&self, element: NodeId) -> Vec<NodeId> {
        let Some(tag) = self.tag_name(element) else {
            return Vec::new();
        };
        self.element_siblings(element)
            .into_iter()
            .filter(|&sibling| {
                self.tag_name(sibling)
                    .is_some_and(|t| t.eq_ignore_ascii_case(tag))
            })
            .collect()
    }
}

#[cfg(feature = "dom")]
impl ElementTree for DomTree {
    fn tag_name(&self, element: NodeId) -> Option<&str> {
        self.as_element(element).map(|e| e.tag_name.as_str())
    }

    fn element_siblings(&self, element: NodeId) -> Vec<NodeId> {
        match self.parent(element) {
            Some(parent) => self.element_children(parent).collect(),
            None => vec![element],
        }
    }

    fn child_elements(&self, element: NodeId) -> Vec<NodeId> {
        self.element_children(element).collect()
    }
}

/// The tag name of `element`, or an error if the handle is not an element.
pub(crate) fn require_element(tree: &dyn ElementTree, element: NodeId) -> Result<&str> {
    tree.tag_name(element).ok_or_else(|| {
        SelectorError::invalid_argument(format!("node {} is not an element", element.0))
    })
}

/// Position of `element` within `sequence`.
pub(crate) fn position_in(sequence: &[NodeId], element: NodeId) -> Result<usize> {
    sequence
        .iter()
        .position(|&candidate| candidate == element)
        .ok_or_else(|| {
            SelectorError::invalid_argument(format!(
                "node {} is missing from its own sibling list",
                element.0
            ))
        })
}
