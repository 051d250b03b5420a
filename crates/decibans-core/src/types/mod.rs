//! Shared type aliases.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet};
