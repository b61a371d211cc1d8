//! Compiled pseudo-class selectors.

use std::fmt;

use ordinal_common::node::NodeId;

use crate::count::CountSelector;
use crate::element::ElementTree;
use crate::error::Result;
use crate::nth::NthSelector;

/// Anything that can decide whether an element matches.
///
/// Built-in selectors implement it, and it is what a
/// [`PseudoClassProvider`](crate::PseudoClassProvider) returns for the
/// pseudo-classes it adds. Implementations must be immutable after
/// construction so one instance can be shared across threads.
pub trait ElementMatcher: fmt::Debug + Send + Sync {
    /// Whether `element` in `tree` is matched.
    ///
    /// # Errors
    ///
    /// Implementations return [`SelectorError::InvalidArgument`](crate::SelectorError::InvalidArgument)
    /// when `element` is not an element of `tree`.
    fn is_eligible(&self, tree: &dyn ElementTree, element: NodeId) -> Result<bool>;
}

/// What a [`Selector`] evaluates with.
#[derive(Debug)]
pub enum SelectorKind {
    /// One of the eight positional pseudo-classes.
    Nth(NthSelector),
    /// `:only-child`, `:only-of-type`, or `:empty`.
    Count(CountSelector),
    /// Created by a registered provider.
    Provided(Box<dyn ElementMatcher>),
}

/// A pseudo-class expression compiled into a predicate.
///
/// Keeps the normalized name and the original text for diagnostics;
/// `Display` prints the original text.
#[derive(Debug)]
pub struct Selector {
    name: String,
    raw: String,
    kind: SelectorKind,
}

impl Selector {
    pub(crate) const fn new(name: String, raw: String, kind: SelectorKind) -> Self {
        Self { name, raw, kind }
    }

    /// The lowercase pseudo-class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The expression this selector was built from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// How this selector evaluates.
    #[must_use]
    pub const fn kind(&self) -> &SelectorKind {
        &self.kind
    }

    /// Whether `element` matches this pseudo-class.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidArgument`](crate::SelectorError::InvalidArgument)
    /// if `element` is not an element of `tree`, or whatever a provided
    /// matcher reports.
    pub fn is_eligible(&self, tree: &dyn ElementTree, element: NodeId) -> Result<bool> {
        match &self.kind {
            SelectorKind::Nth(nth) => nth.is_eligible(tree, element),
            SelectorKind::Count(count) => count.is_eligible(tree, element),
            SelectorKind::Provided(matcher) => matcher.is_eligible(tree, element),
        }
    }

    /// The candidates that match, in the order given.
    ///
    /// # Errors
    ///
    /// Stops at the first candidate whose evaluation fails and returns that
    /// error.
    pub fn filter<I>(&self, tree: &dyn ElementTree, candidates: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut matched = Vec::new();
        for candidate in candidates {
            if self.is_eligible(tree, candidate)? {
                matched.push(candidate);
            }
        }
        Ok(matched)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
