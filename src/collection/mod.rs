//! Insertion-ordered key-value collection.
//!
//! This module provides [`Collection`], an ordered mapping from unique keys
//! to values that remembers insertion order and layers convenience
//! operations over the plain mapping contract:
//!
//! - **Sampler**: [`Collection::random`], [`Collection::sample`],
//!   [`Collection::random_key`]
//! - **Filter/Transform**: [`Collection::filter`], [`Collection::find`],
//!   [`Collection::map`], [`Collection::some`], [`Collection::every`],
//!   [`Collection::for_each`]
//! - **Structural**: [`Collection::equal`], [`Collection::concat`], `clone`
//! - **Positional**: [`Collection::first`], [`Collection::last`],
//!   [`Collection::first_key`], [`Collection::last_key`], [`Collection::at`]
//! - **Partitioner**: [`Collection::into_chunks`], [`Collection::partition`]
//!
//! # Storage
//!
//! Entries live in a privately owned [`IndexMap`]: a dense entry vector in
//! insertion order plus a hash index over the keys. Positional reads and
//! slot lookups used by the sampler are O(1); removal shifts later entries
//! down so that insertion order is never disturbed.
//!
//! # Copy Semantics
//!
//! Derived collections (`clone`, `filter` into a collection, `concat`,
//! `into_chunks`, `partition`) are independent containers holding clones
//! of the same keys and values. Store values behind `Rc`/`Arc` to share
//! them between collections rather than duplicate them.
//!
//! # Examples
//!
//! ```rust
//! use ordered_collection::collection::Collection;
//!
//! let mut collection = Collection::new();
//! collection.set("one", 1).set("two", 2).set("three", 3);
//!
//! assert_eq!(collection.len(), 3);
//! assert_eq!(collection.get("two"), Some(&2));
//!
//! // Re-inserting an existing key keeps its position
//! collection.set("one", 10);
//! let keys: Vec<&&str> = collection.keys().collect();
//! assert_eq!(keys, vec![&"one", &"two", &"three"]);
//!
//! // Removal preserves the order of the remaining entries
//! assert!(collection.delete("two"));
//! let values: Vec<&i32> = collection.values().collect();
//! assert_eq!(values, vec![&10, &3]);
//! ```

mod error;
mod options;
mod partition;
mod positional;
pub mod sampler;
mod structural;
mod transform;

pub use error::{CollectionError, EmptyCollectionError, MissingCapabilityError, Result};
pub use options::{EqualOptions, FilterOptions, RandomOptions, ReturnShape};
pub use partition::DEFAULT_CHUNK_SIZE;
pub use sampler::{Sample, SamplingStrategy};
pub use structural::{CapabilityBounds, DeepEqual};
pub use transform::Filtered;

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type for shared capability handles.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Hasher Selection
// =============================================================================

/// Hash builder used for the key index.
#[cfg(feature = "fxhash")]
pub type HashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used for the key index.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type HashBuilder = ahash::RandomState;

/// Hash builder used for the key index.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type HashBuilder = std::hash::RandomState;

/// Plain insertion-ordered map, as produced by [`ReturnShape::Map`] filtering.
pub type OrderedMap<K, V> = IndexMap<K, V, HashBuilder>;

/// Shared handle to a registered deep-equality capability.
pub(crate) type DeepEqualHandle<V> = ReferenceCounter<dyn DeepEqual<V>>;

// =============================================================================
// Collection Definition
// =============================================================================

/// An insertion-ordered mapping from unique keys to values.
///
/// # Type Parameters
///
/// * `K` - The key type. Lookups require `Hash + Eq`.
/// * `V` - The value type.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::Collection;
///
/// let collection: Collection<i32, &str> = [(1, "a"), (2, "b"), (3, "c")].into();
///
/// assert_eq!(collection.first(), Some(&"a"));
/// assert_eq!(collection.last_key(), Some(&3));
/// assert!(collection.some(|value, _, _| *value == "b"));
/// ```
#[derive(Clone)]
pub struct Collection<K, V> {
    entries: OrderedMap<K, V>,
    deep_equal: Option<DeepEqualHandle<V>>,
}

impl<K, V> Collection<K, V> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<String, i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty collection with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, HashBuilder::default()),
            deep_equal: None,
        }
    }

    /// Builds a collection over `entries` that inherits this collection's
    /// registered capabilities.
    pub(crate) fn derive_from(&self, entries: OrderedMap<K, V>) -> Self {
        Self {
            entries,
            deep_equal: self.deep_equal.clone(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in insertion order.
    #[inline]
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Returns a mutable iterator over the values in insertion order.
    #[inline]
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, K, V> {
        self.entries.values_mut()
    }

    /// Removes every entry. Registered capabilities are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Hash + Eq, V> Collection<K, V> {
    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// A key that is already present keeps its position; only its value is
    /// replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// assert_eq!(collection.insert("a", 1), None);
    /// assert_eq!(collection.insert("a", 2), Some(1));
    /// assert_eq!(collection.get("a"), Some(&2));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Inserts a key-value pair and returns the collection for chaining.
    #[inline]
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// Returns a reference to the value stored for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored for `key`.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Alias of [`Collection::contains_key`].
    #[inline]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.contains_key(key)
    }

    /// Removes `key`, returning its value. Later entries shift down, so the
    /// relative order of the remaining entries is unchanged.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.shift_remove(key)
    }

    /// Removes `key`, returning whether it was present.
    #[inline]
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for Collection<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for Collection<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for Collection<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V> IntoIterator for Collection<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Collection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Collection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equal(other)
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Collection<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Collection<String, i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Collection<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct CollectionVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<K, V> CollectionVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for CollectionVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    type Value = Collection<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut collection = Collection::with_capacity(capacity);
        while let Some((key, value)) = access.next_entry()? {
            collection.insert(key, value);
        }
        Ok(collection)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Collection<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(CollectionVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_reinsert_keeps_position() {
        let mut collection: Collection<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into();
        collection.insert("a", 10);

        let entries: Vec<(&&str, &i32)> = collection.iter().collect();
        assert_eq!(entries, vec![(&"a", &10), (&"b", &2), (&"c", &3)]);
    }

    #[rstest]
    fn test_remove_preserves_order() {
        let mut collection: Collection<i32, char> =
            [(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')].into();

        assert_eq!(collection.remove(&2), Some('b'));
        assert!(!collection.delete(&2));

        let keys: Vec<i32> = collection.keys().copied().collect();
        assert_eq!(keys, vec![1, 3, 4]);
    }

    #[rstest]
    fn test_string_keys_accept_str_lookup() {
        let mut collection = Collection::new();
        collection.set("hello".to_string(), 1);

        assert_eq!(collection.get("hello"), Some(&1));
        assert!(collection.has("hello"));
        assert!(!collection.has("world"));
    }

    #[rstest]
    fn test_clear_keeps_registered_capability() {
        let mut collection = Collection::<i32, i32>::new()
            .with_deep_equal(|left: &i32, right: &i32| left == right);
        collection.set(1, 1);
        collection.clear();

        assert!(collection.is_empty());
        assert!(collection.has_deep_equal());
    }

    #[rstest]
    fn test_debug_lists_entries_in_order() {
        let collection: Collection<i32, &str> = [(2, "b"), (1, "a")].into();
        assert_eq!(format!("{collection:?}"), r#"{2: "b", 1: "a"}"#);
    }
}
