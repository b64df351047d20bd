//! Structural comparison and merging.
//!
//! Strict comparison uses `PartialEq` on the values. Deep comparison goes
//! through a [`DeepEqual`] capability registered on one of the two
//! collections; requesting it when neither has one fails with
//! [`MissingCapabilityError`].

use std::hash::Hash;

use super::{Collection, EqualOptions, MissingCapabilityError, ReferenceCounter, Result};

const DEEP_EQUALITY: &str = "deep equality";

/// Thread-safety required of registered capabilities.
///
/// With the `arc` feature this is `Send + Sync`, so collections holding a
/// capability stay `Send + Sync`. Without it every type qualifies, since
/// capabilities are held in an `Rc`.
#[cfg(feature = "arc")]
pub trait CapabilityBounds: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> CapabilityBounds for T {}

/// Thread-safety required of registered capabilities.
///
/// With the `arc` feature this is `Send + Sync`, so collections holding a
/// capability stay `Send + Sync`. Without it every type qualifies, since
/// capabilities are held in an `Rc`.
#[cfg(not(feature = "arc"))]
pub trait CapabilityBounds {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> CapabilityBounds for T {}

/// A structural equality function used by deep comparison.
///
/// Any `Fn(&V, &V) -> bool` closure that satisfies [`CapabilityBounds`]
/// implements this trait.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::{Collection, EqualOptions};
///
/// let left: Collection<i32, Vec<i32>> = [(1, vec![1, 2])].into();
/// let left = left.with_deep_equal(|a: &Vec<i32>, b: &Vec<i32>| a.len() == b.len());
/// let right: Collection<i32, Vec<i32>> = [(1, vec![3, 4])].into();
///
/// assert_eq!(left.equal(&right, EqualOptions::default()), Ok(false));
/// assert_eq!(left.equal(&right, EqualOptions::deep()), Ok(true));
/// ```
pub trait DeepEqual<V: ?Sized>: CapabilityBounds {
    /// Returns `true` if `left` and `right` are structurally equal.
    fn deep_equal(&self, left: &V, right: &V) -> bool;
}

impl<V: ?Sized, F> DeepEqual<V> for F
where
    F: Fn(&V, &V) -> bool + CapabilityBounds,
{
    #[inline]
    fn deep_equal(&self, left: &V, right: &V) -> bool {
        self(left, right)
    }
}

impl<K, V> Collection<K, V> {
    /// Registers `capability` for deep comparison and returns the collection.
    #[must_use]
    pub fn with_deep_equal<D>(mut self, capability: D) -> Self
    where
        D: DeepEqual<V> + 'static,
    {
        self.set_deep_equal(capability);
        self
    }

    /// Registers `capability` for deep comparison, replacing any previous one.
    pub fn set_deep_equal<D>(&mut self, capability: D)
    where
        D: DeepEqual<V> + 'static,
    {
        self.deep_equal = Some(ReferenceCounter::new(capability));
    }

    /// Unregisters the deep-equality capability.
    pub fn clear_deep_equal(&mut self) {
        self.deep_equal = None;
    }

    /// Returns `true` if a deep-equality capability is registered.
    pub const fn has_deep_equal(&self) -> bool {
        self.deep_equal.is_some()
    }
}

impl<K: Hash + Eq, V> Collection<K, V> {
    /// Compares two collections entry by entry.
    ///
    /// Sizes are compared first, then identity; otherwise every key of
    /// `self` must be present in `other` with an equal value. Iteration
    /// follows `self`'s order and stops at the first mismatch. Entry order
    /// is not part of equality.
    ///
    /// Comparing a collection with itself returns `true` without visiting
    /// any value.
    ///
    /// This entry point requires `V: PartialEq` even when `options.deep`
    /// is set. Value types without `PartialEq` are compared with
    /// [`equal_deep`](Self::equal_deep) directly.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingCapability`](super::CollectionError::MissingCapability)
    /// if `options.deep` is set and neither collection has a deep-equality
    /// capability registered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::{Collection, EqualOptions};
    ///
    /// let collection: Collection<i32, &str> = [(1, "a"), (2, "b")].into();
    /// assert_eq!(collection.equal(&collection.clone(), EqualOptions::default()), Ok(true));
    ///
    /// let shorter: Collection<i32, &str> = [(1, "a")].into();
    /// assert_eq!(collection.equal(&shorter, EqualOptions::default()), Ok(false));
    ///
    /// assert!(collection.equal(&shorter, EqualOptions::deep()).is_err());
    /// ```
    pub fn equal(&self, other: &Self, options: EqualOptions) -> Result<bool>
    where
        V: PartialEq,
    {
        if options.deep {
            self.equal_deep(other)
        } else {
            Ok(self.strict_equal(other))
        }
    }

    /// Compares two collections with the registered deep-equality
    /// capability, preferring the one on `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingCapability`](super::CollectionError::MissingCapability)
    /// if neither collection has a deep-equality capability registered.
    pub fn equal_deep(&self, other: &Self) -> Result<bool> {
        let Some(capability) = self.deep_equal.as_ref().or(other.deep_equal.as_ref()) else {
            tracing::debug!("deep comparison requested without a registered capability");
            return Err(MissingCapabilityError {
                capability: DEEP_EQUALITY,
            }
            .into());
        };
        Ok(self.compare_with(other, |left, right| capability.deep_equal(left, right)))
    }

    pub(crate) fn strict_equal(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        self.compare_with(other, |left, right| left == right)
    }

    fn compare_with<F>(&self, other: &Self, mut values_equal: F) -> bool
    where
        F: FnMut(&V, &V) -> bool,
    {
        if self.len() != other.len() {
            return false;
        }
        if std::ptr::eq(self, other) {
            return true;
        }
        self.iter().all(|(key, value)| {
            other
                .get(key)
                .is_some_and(|other_value| values_equal(value, other_value))
        })
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Collection<K, V> {
    /// Merges `collections` over a clone of `self`.
    ///
    /// Inputs are applied in order and later values win on key collisions;
    /// a colliding key keeps the position it had in the accumulator. `None`
    /// entries are skipped. Neither `self` nor the inputs are modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let base: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let overlay: Collection<&str, i32> = [("b", 20), ("c", 30)].into();
    ///
    /// let merged = base.concat([Some(&overlay), None]);
    /// let entries: Vec<(&str, i32)> = merged.into_iter().collect();
    /// assert_eq!(entries, vec![("a", 1), ("b", 20), ("c", 30)]);
    /// assert_eq!(base.get("b"), Some(&2));
    /// ```
    #[must_use]
    pub fn concat<'a, I>(&self, collections: I) -> Self
    where
        Self: 'a,
        I: IntoIterator,
        I::Item: Into<Option<&'a Self>>,
    {
        let mut merged = self.clone();
        for (position, candidate) in collections.into_iter().enumerate() {
            let Some(collection) = candidate.into() else {
                tracing::debug!(position, "skipping absent collection in concat");
                continue;
            };
            merged
                .entries
                .extend(collection.iter().map(|(key, value)| (key.clone(), value.clone())));
        }
        merged
    }
}
