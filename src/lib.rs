//! # ordered-collection
//!
//! An insertion-ordered key-value container with convenience operations
//! layered on top of the plain mapping contract.
//!
//! ## Overview
//!
//! [`Collection`](collection::Collection) keeps unique keys in insertion
//! order and adds:
//!
//! - **Sampler**: `random`, `sample`, `random_key` with an optional
//!   per-slot uniqueness guarantee
//! - **Filter/Transform**: `filter` (into several result shapes), `find`,
//!   `map`, `some`, `every`, `for_each`, `reduce`, `sweep`
//! - **Structural**: `equal` (strict or deep), `concat`, `clone`
//! - **Positional**: `first`, `first_key`, `last`, `last_key`, `at`
//! - **Partitioner**: `into_chunks`, `partition`
//!
//! ## Feature Flags
//!
//! - `collection`: The [`Collection`](collection::Collection) container (default)
//! - `serde`: `Serialize`/`Deserialize` for collections and option objects
//! - `arc`: Use `Arc` for shared capability handles, making collections `Send + Sync`
//! - `fxhash`: Index keys with `rustc_hash::FxBuildHasher`
//! - `ahash`: Index keys with `ahash::RandomState`
//! - `full`: Enable `collection` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use ordered_collection::prelude::*;
//!
//! let collection: Collection<i32, &str> = [(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
//!
//! assert_eq!(collection.first_key(), Some(&1));
//! assert_eq!(collection.last_n(2), vec![&"b", &"c"]);
//!
//! let picked = collection.random().unwrap();
//! assert!(["a", "b", "c"].contains(picked));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, its option objects and its error types.
///
/// # Usage
///
/// ```rust
/// use ordered_collection::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "collection")]
pub mod collection;
