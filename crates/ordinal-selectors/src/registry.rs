//! Process-wide registry of pseudo-class providers.
//!
//! Names the factory does not know natively are looked up here. Each name
//! can be registered once; entries are never removed.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::error::{Result, SelectorError};
use crate::name::PseudoClassName;
use crate::selector::ElementMatcher;

/// Creates matchers for pseudo-classes the crate does not implement itself.
///
/// Any `Fn(&str, Option<&str>) -> Result<Box<dyn ElementMatcher>>` that is
/// `Send + Sync` is a provider.
///
/// Providers only ever see names the factory does not handle itself. The
/// eleven built-in names (`nth-child`, `first-of-type`, `empty`, ...) are
/// therefore reserved: registering a provider under one of them fails with
/// [`SelectorError::Conflict`], the same error as a duplicate registration,
/// since the built-in already occupies the name.
pub trait PseudoClassProvider: Send + Sync {
    /// Build a matcher for `:name` or `:name(args)`. `name` is lowercase.
    ///
    /// # Errors
    ///
    /// Providers report bad arguments with [`SelectorError::Format`] or
    /// [`SelectorError::InvalidUsage`].
    fn create_selector(&self, name: &str, args: Option<&str>) -> Result<Box<dyn ElementMatcher>>;
}

impl<F> PseudoClassProvider for F
where
    F: Fn(&str, Option<&str>) -> Result<Box<dyn ElementMatcher>> + Send + Sync,
{
    fn create_selector(&self, name: &str, args: Option<&str>) -> Result<Box<dyn ElementMatcher>> {
        self(name, args)
    }
}

static GLOBAL: Lazy<ProviderRegistry> = Lazy::new(ProviderRegistry::new);

/// Registry key for `name`: trimmed and ASCII-lowercased.
fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Name → provider map with register-once semantics.
///
/// Registration takes the write lock for the whole check-and-insert, so two
/// threads registering the same name cannot both succeed. Lookups take the
/// read lock.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<HashMap<String, Arc<dyn PseudoClassProvider>>>,
}

impl ProviderRegistry {
    /// An empty registry, independent of the global one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by
    /// [`SelectorFactory::global`](crate::SelectorFactory::global).
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Register `provider` for `name`. Names are trimmed and matched
    /// case-insensitively here and in every lookup.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::InvalidArgument`] if `name` is empty or blank.
    /// - [`SelectorError::Conflict`] if `name` already has a provider or is
    ///   one of the built-in pseudo-classes.
    pub fn register<P>(&self, name: &str, provider: P) -> Result<()>
    where
        P: PseudoClassProvider + 'static,
    {
        let name = normalize(name);
        if name.is_empty() {
            return Err(SelectorError::invalid_argument("provider name is empty"));
        }

        if name.parse::<PseudoClassName>().is_ok() {
            return Err(SelectorError::Conflict { name });
        }

        let mut providers = self
            .providers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match providers.entry(name) {
            Entry::Occupied(entry) => Err(SelectorError::Conflict {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                let _ = entry.insert(Arc::new(provider));
                Ok(())
            }
        }
    }

    /// The provider registered for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn PseudoClassProvider>> {
        self.providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&normalize(name))
            .cloned()
    }

    /// Whether `name` has a provider.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&normalize(name))
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Register `provider` for `name` in the process-wide registry.
///
/// # Errors
///
/// See [`ProviderRegistry::register`].
pub fn register_provider<P>(name: &str, provider: P) -> Result<()>
where
    P: PseudoClassProvider + 'static,
{
    ProviderRegistry::global().register(name, provider)
}
