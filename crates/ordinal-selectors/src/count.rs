//! Argument-less structural pseudo-classes decided by counting:
//! `:only-child`, `:only-of-type`, `:empty`.

use std::fmt;

use ordinal_common::node::NodeId;

use crate::element::{ElementTree, require_element};
use crate::error::{Result, SelectorError};
use crate::name::PseudoClassName;
use crate::selector::ElementMatcher;

/// Which count is taken and what it must equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountKind {
    /// [§ 14.3.3 :only-child](https://www.w3.org/TR/selectors-4/#the-only-child-pseudo)
    /// "The :only-child pseudo-class represents an element that has no siblings."
    OnlyChild,
    /// [§ 14.4.3 :only-of-type](https://www.w3.org/TR/selectors-4/#the-only-of-type-pseudo)
    /// "The :only-of-type pseudo-class represents an element that has no
    /// siblings with the same expanded element name."
    OnlyOfType,
    /// [§ 14.2 :empty](https://www.w3.org/TR/selectors-4/#the-empty-pseudo)
    ///
    /// Matches an element with no element children; text content does not
    /// count.
    Empty,
}

impl CountKind {
    /// The pseudo-class name for this kind.
    #[must_use]
    pub const fn name(self) -> PseudoClassName {
        match self {
            Self::OnlyChild => PseudoClassName::OnlyChild,
            Self::OnlyOfType => PseudoClassName::OnlyOfType,
            Self::Empty => PseudoClassName::Empty,
        }
    }
}

/// A counting pseudo-class. Holds nothing but its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountSelector {
    kind: CountKind,
}

impl CountSelector {
    /// Build a counting selector. `args` must be absent; even `()` is rejected.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::InternalConsistency`] if `name` is not
    ///   `only-child`, `only-of-type`, or `empty`.
    /// - [`SelectorError::InvalidUsage`] if any argument list was supplied,
    ///   including an empty one.
    pub fn new(name: &str, args: Option<&str>) -> Result<Self> {
        let kind = match name.parse::<PseudoClassName>() {
            Ok(PseudoClassName::OnlyChild) => CountKind::OnlyChild,
            Ok(PseudoClassName::OnlyOfType) => CountKind::OnlyOfType,
            Ok(PseudoClassName::Empty) => CountKind::Empty,
            _ => {
                return Err(SelectorError::InternalConsistency {
                    name: name.to_string(),
                });
            }
        };

        if args.is_some() {
            return Err(SelectorError::InvalidUsage {
                name: kind.name().as_str().to_string(),
            });
        }

        Ok(Self { kind })
    }

    /// Which count this selector takes.
    #[must_use]
    pub const fn kind(self) -> CountKind {
        self.kind
    }

    /// Whether `element` satisfies the count.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidArgument`] if `element` is not an
    /// element of `tree`.
    pub fn is_eligible(self, tree: &dyn ElementTree, element: NodeId) -> Result<bool> {
        let _ = require_element(tree, element)?;

        Ok(match self.kind {
            CountKind::OnlyChild => tree.element_siblings(element).len() == 1,
            CountKind::OnlyOfType => tree.siblings_of_type(element).len() == 1,
            CountKind::Empty => tree.child_elements(element).is_empty(),
        })
    }
}

impl ElementMatcher for CountSelector {
    fn is_eligible(&self, tree: &dyn ElementTree, element: NodeId) -> Result<bool> {
        Self::is_eligible(*self, tree, element)
    }
}

impl fmt::Display for CountSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.kind.name())
    }
}
