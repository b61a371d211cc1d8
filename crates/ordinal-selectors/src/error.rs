//! Errors raised while building or evaluating pseudo-class selectors.

use thiserror::Error;

/// Result alias used throughout the selector crate.
pub type Result<T, E = SelectorError> = std::result::Result<T, E>;

/// Everything that can go wrong when parsing, registering, or evaluating a
/// pseudo-class selector.
///
/// Every variant carries the offending text so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The expression or an `An+B` argument does not match its grammar, or
    /// arguments were supplied where the pseudo-class forbids them.
    #[error("invalid pseudo-class syntax '{input}': {reason}")]
    Format {
        /// The rejected text.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// No built-in handling and no registered provider for this name.
    #[error("unsupported pseudo-class ':{name}'")]
    Unsupported {
        /// The normalized pseudo-class name.
        name: String,
    },

    /// A provider is already registered under this name.
    #[error("a provider for pseudo-class ':{name}' is already registered")]
    Conflict {
        /// The normalized pseudo-class name.
        name: String,
    },

    /// A required input was missing (empty name, empty expression, or an
    /// element handle that does not refer to an element).
    #[error("invalid argument: {what}")]
    InvalidArgument {
        /// Description of the missing or invalid input.
        what: String,
    },

    /// Arguments were given to a pseudo-class that takes none
    /// (`:only-child`, `:only-of-type`, `:empty`).
    #[error("pseudo-class ':{name}' does not take arguments")]
    InvalidUsage {
        /// The normalized pseudo-class name.
        name: String,
    },

    /// A selector constructor received a name outside its closed set.
    /// Factory dispatch never does this.
    #[error("internal error: ':{name}' is not handled by this selector kind")]
    InternalConsistency {
        /// The name the constructor rejected.
        name: String,
    },
}

impl SelectorError {
    /// Creates a [`SelectorError::Format`] for `input`.
    #[must_use]
    pub fn format(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Format {
            input: input.into(),
            reason,
        }
    }

    /// Creates a [`SelectorError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(what: impl Into<String>) -> Self {
        Self::InvalidArgument { what: what.into() }
    }

    /// Whether this is a [`SelectorError::Format`].
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Whether this is a [`SelectorError::Conflict`].
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
