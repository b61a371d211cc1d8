//! Structural pseudo-class parsing and matching for the Ordinal tools.
//!
//! # Scope
//!
//! This crate implements the tree-structural pseudo-classes of
//! [Selectors Level 4 § 14](https://www.w3.org/TR/selectors-4/#structural-pseudos):
//!
//! - **Positional**: `:nth-child(An+B)`, `:nth-last-child(An+B)`,
//!   `:nth-of-type(An+B)`, `:nth-last-of-type(An+B)`, `:first-child`,
//!   `:last-child`, `:first-of-type`, `:last-of-type`
//! - **Counting**: `:only-child`, `:only-of-type`, `:empty`
//! - **Extensible**: any other name can be served by a
//!   [`PseudoClassProvider`] registered once in a [`ProviderRegistry`]
//!
//! Trees are consumed through the [`ElementTree`] trait, addressed by
//! [`NodeId`] handles. The implementation for `ordinal_dom::DomTree` sits
//! behind the default `dom` feature; without it the crate has no tree
//! dependency at all.
//!
//! # Not Implemented
//!
//! - Combinators, attribute/class/id selectors, pseudo-elements
//! - Specificity and cascade
//! - Caching of matches across queries
//!
//! # Example
//!
//! ```
//! use ordinal_dom::{DomTree, NodeId};
//! use ordinal_selectors::parse_pseudo_class;
//!
//! let mut tree = DomTree::new();
//! let ul = tree.append_element(NodeId::ROOT, "ul");
//! let items: Vec<_> = (0..5).map(|_| tree.append_element(ul, "li")).collect();
//!
//! let odd = parse_pseudo_class(":nth-child(odd)").unwrap();
//! let matched = odd.filter(&tree, items.iter().copied()).unwrap();
//! assert_eq!(matched, vec![items[0], items[2], items[4]]);
//! ```

/// Element counts: `:only-child`, `:only-of-type`, `:empty`.
pub mod count;
/// The tree operations selectors consume.
pub mod element;
/// Selector errors.
pub mod error;
/// Name dispatch to built-in selectors and providers.
pub mod factory;
/// Pseudo-class expression and `An+B` grammars.
pub mod grammar;
/// Built-in pseudo-class names.
pub mod name;
/// `An+B` formulas and positional selectors.
pub mod nth;
/// Provider registry for additional pseudo-classes.
pub mod registry;
/// Compiled selectors.
pub mod selector;

// Re-exports for convenience
pub use count::{CountKind, CountSelector};
pub use element::ElementTree;
pub use error::{Result, SelectorError};
pub use factory::{SelectorFactory, parse_pseudo_class};
pub use grammar::PseudoClassExpression;
pub use name::PseudoClassName;
pub use nth::{NthFlags, NthFormula, NthSelector};
pub use ordinal_common::node::NodeId;
pub use registry::{ProviderRegistry, PseudoClassProvider, register_provider};
pub use selector::{ElementMatcher, Selector, SelectorKind};
