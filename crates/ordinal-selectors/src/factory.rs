//! Turns pseudo-class names and expressions into [`Selector`]s.

use crate::count::CountSelector;
use crate::error::{Result, SelectorError};
use crate::grammar::PseudoClassExpression;
use crate::name::PseudoClassName;
use crate::nth::NthSelector;
use crate::registry::ProviderRegistry;
use crate::selector::{Selector, SelectorKind};

/// Dispatches pseudo-class names to built-in selectors or to a provider
/// registry.
#[derive(Debug, Clone, Copy)]
pub struct SelectorFactory<'r> {
    registry: &'r ProviderRegistry,
}

impl SelectorFactory<'static> {
    /// A factory backed by the process-wide registry.
    #[must_use]
    pub fn global() -> Self {
        Self::new(ProviderRegistry::global())
    }
}

impl<'r> SelectorFactory<'r> {
    /// A factory backed by `registry`.
    #[must_use]
    pub const fn new(registry: &'r ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Parse `:name` or `:name(args)` and build its selector.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::Format`] if `expression` is not a
    /// pseudo-class expression, and otherwise as [`Self::create`].
    pub fn parse(&self, expression: &str) -> Result<Selector> {
        let parsed = PseudoClassExpression::parse(expression)?;
        self.create(&parsed.name, parsed.args.as_deref(), &parsed.raw)
    }

    /// Build the selector for `name` with optional `args`. `raw` is kept
    /// for diagnostics.
    ///
    /// Names are matched ASCII case-insensitively. The eight positional
    /// names build an [`NthSelector`], `only-child` / `only-of-type` /
    /// `empty` build a [`CountSelector`], and anything else is handed to the
    /// provider registered for it.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::InvalidArgument`] if `name` or `raw` is empty.
    /// - [`SelectorError::Format`] for missing, forbidden, or malformed
    ///   positional arguments.
    /// - [`SelectorError::InvalidUsage`] for arguments to a counting
    ///   pseudo-class.
    /// - [`SelectorError::Unsupported`] if no provider handles `name`.
    /// - Whatever the provider returns.
    pub fn create(&self, name: &str, args: Option<&str>, raw: &str) -> Result<Selector> {
        if name.is_empty() {
            return Err(SelectorError::invalid_argument("pseudo-class name is empty"));
        }
        if raw.is_empty() {
            return Err(SelectorError::invalid_argument(
                "pseudo-class expression is empty",
            ));
        }

        let name = name.to_ascii_lowercase();
        let kind = match name.parse::<PseudoClassName>() {
            Ok(builtin) if builtin.is_positional() => {
                SelectorKind::Nth(NthSelector::new(&name, args)?)
            }
            Ok(_) => SelectorKind::Count(CountSelector::new(&name, args)?),
            Err(_) => {
                let provider = self
                    .registry
                    .get(&name)
                    .ok_or_else(|| SelectorError::Unsupported { name: name.clone() })?;
                SelectorKind::Provided(provider.create_selector(&name, args)?)
            }
        };

        Ok(Selector::new(name, raw.to_string(), kind))
    }
}

/// Parse and build a selector using the process-wide provider registry.
///
/// # Errors
///
/// See [`SelectorFactory::parse`].
pub fn parse_pseudo_class(expression: &str) -> Result<Selector> {
    SelectorFactory::global().parse(expression)
}
