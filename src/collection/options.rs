//! Option objects accepted by the collection operations.
//!
//! Every field is optional in the sense that [`Default`] yields the
//! documented behavior. With the `serde` feature enabled the option objects
//! can be read from configuration, e.g. `{"unique": true}` or
//! `{"return": "map"}`.

/// Options for [`Collection::sample`](super::Collection::sample).
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::RandomOptions;
///
/// assert!(!RandomOptions::default().unique);
/// assert!(RandomOptions::unique().unique);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RandomOptions {
    /// When `true`, no two picks come from the same slot.
    pub unique: bool,
}

impl RandomOptions {
    /// Options requesting slot-unique picks.
    #[must_use]
    pub const fn unique() -> Self {
        Self { unique: true }
    }
}

/// The container shape produced by [`Collection::filter`](super::Collection::filter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReturnShape {
    /// A `Vec` of `(key, value)` pairs.
    #[default]
    Array,
    /// A plain insertion-ordered map.
    Map,
    /// A new [`Collection`](super::Collection).
    Collection,
}

/// Options for [`Collection::filter`](super::Collection::filter).
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::{FilterOptions, ReturnShape};
///
/// assert_eq!(FilterOptions::default().return_shape, ReturnShape::Array);
/// assert_eq!(FilterOptions::returning(ReturnShape::Map).return_shape, ReturnShape::Map);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterOptions {
    /// The shape of the filtered result.
    #[cfg_attr(feature = "serde", serde(rename = "return"))]
    pub return_shape: ReturnShape,
}

impl FilterOptions {
    /// Options producing the given result shape.
    #[must_use]
    pub const fn returning(return_shape: ReturnShape) -> Self {
        Self { return_shape }
    }
}

/// Options for [`Collection::equal`](super::Collection::equal).
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::EqualOptions;
///
/// assert!(!EqualOptions::default().deep);
/// assert!(EqualOptions::deep().deep);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EqualOptions {
    /// Compare values with the registered deep-equality capability.
    pub deep: bool,
}

impl EqualOptions {
    /// Options requesting deep comparison.
    #[must_use]
    pub const fn deep() -> Self {
        Self { deep: true }
    }
}
