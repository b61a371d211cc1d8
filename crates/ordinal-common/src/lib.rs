//! Common utilities for the Ordinal selector tools.
//!
//! This crate provides shared infrastructure for the Ordinal crates:
//! - **Warning System** - colored, deduplicated terminal output for
//!   recoverable problems (skipped elements, normalized input)
//! - **Node handles** - the [`node::NodeId`] index shared by the element
//!   tree and the selector core, so neither depends on the other

pub mod node;
pub mod warning;
