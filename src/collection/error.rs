//! Error types for [`Collection`](super::Collection) operations.
//!
//! Only two operations can fail: sampling from an empty collection and
//! deep comparison without a registered deep-equality capability. Every
//! other operation is total and answers with an empty result instead.

use thiserror::Error;

/// Represents an attempt to draw from a collection that holds no entries.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::EmptyCollectionError;
///
/// let error = EmptyCollectionError { operation: "random" };
/// assert_eq!(format!("{error}"), "random: collection is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation}: collection is empty")]
pub struct EmptyCollectionError {
    /// The name of the operation that required at least one entry.
    pub operation: &'static str,
}

/// Represents a request for a capability that was never registered.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::MissingCapabilityError;
///
/// let error = MissingCapabilityError { capability: "deep equality" };
/// assert_eq!(
///     format!("{error}"),
///     "deep equality is not registered on this collection"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{capability} is not registered on this collection")]
pub struct MissingCapabilityError {
    /// The name of the missing capability.
    pub capability: &'static str,
}

/// Represents errors that can occur while operating on a collection.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::{CollectionError, EmptyCollectionError};
///
/// let error: CollectionError = EmptyCollectionError { operation: "random" }.into();
/// assert!(matches!(error, CollectionError::EmptyCollection(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The collection had no entries to draw from.
    #[error(transparent)]
    EmptyCollection(#[from] EmptyCollectionError),
    /// A capability needed by the operation was not registered.
    #[error(transparent)]
    MissingCapability(#[from] MissingCapabilityError),
}

/// Result alias for fallible collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
