//! Filtering, searching and transforming entries.
//!
//! Every predicate receives `(value, key, collection)` and is invoked in
//! insertion order. What the predicate returns depends on the call site:
//! `bool` for [`Collection::filter`], [`Collection::find`],
//! [`Collection::some`] and [`Collection::every`], an arbitrary `R` for
//! [`Collection::map`], `()` for [`Collection::for_each`].
//!
//! A panicking predicate unwinds through the operation untouched. The
//! `try_*` variants accept predicates returning `Result` and hand the first
//! `Err` back to the caller unchanged.
//!
//! Predicates must not mutate the collection they are iterating; the shared
//! borrow passed to them makes that a compile-time guarantee.

use std::hash::Hash;

use super::{Collection, FilterOptions, OrderedMap, ReturnShape};

/// The result of [`Collection::filter`], shaped by [`FilterOptions`].
#[derive(Debug, Clone)]
pub enum Filtered<K, V> {
    /// Matching `(key, value)` pairs in insertion order.
    Array(Vec<(K, V)>),
    /// Matching entries as a plain insertion-ordered map.
    Map(OrderedMap<K, V>),
    /// Matching entries as a new collection.
    Collection(Collection<K, V>),
}

impl<K, V> Filtered<K, V> {
    /// Returns the shape this result was built with.
    pub const fn shape(&self) -> ReturnShape {
        match self {
            Self::Array(_) => ReturnShape::Array,
            Self::Map(_) => ReturnShape::Map,
            Self::Collection(_) => ReturnShape::Collection,
        }
    }

    /// Returns the number of matching entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Array(pairs) => pairs.len(),
            Self::Map(map) => map.len(),
            Self::Collection(collection) => collection.len(),
        }
    }

    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens any shape into `(key, value)` pairs in insertion order.
    pub fn into_pairs(self) -> Vec<(K, V)> {
        match self {
            Self::Array(pairs) => pairs,
            Self::Map(map) => map.into_iter().collect(),
            Self::Collection(collection) => collection.into_iter().collect(),
        }
    }
}

impl<K, V> Collection<K, V> {
    /// Returns the entries for which `predicate` holds, in the shape chosen
    /// by `options`. The source collection is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::{Collection, FilterOptions, Filtered, ReturnShape};
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into();
    ///
    /// let pairs = collection.filter(|value, _, _| *value > 1, FilterOptions::default());
    /// assert_eq!(pairs.into_pairs(), vec![("b", 2), ("c", 3)]);
    ///
    /// let nested = collection.filter(
    ///     |_, key, _| *key != "b",
    ///     FilterOptions::returning(ReturnShape::Collection),
    /// );
    /// let Filtered::Collection(nested) = nested else { unreachable!() };
    /// assert_eq!(nested.last(), Some(&3));
    /// ```
    pub fn filter<P>(&self, mut predicate: P, options: FilterOptions) -> Filtered<K, V>
    where
        K: Hash + Eq + Clone,
        V: Clone,
        P: FnMut(&V, &K, &Self) -> bool,
    {
        let matching = self
            .iter()
            .filter(|&(key, value)| predicate(value, key, self))
            .map(|(key, value)| (key.clone(), value.clone()));

        match options.return_shape {
            ReturnShape::Array => Filtered::Array(matching.collect()),
            ReturnShape::Map => Filtered::Map(matching.collect()),
            ReturnShape::Collection => {
                let entries: OrderedMap<K, V> = matching.collect();
                Filtered::Collection(self.derive_from(entries))
            }
        }
    }

    /// Returns the first value for which `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, &str> = [(1, "apple"), (2, "banana")].into();
    /// assert_eq!(collection.find(|value, _, _| value.starts_with('b')), Some(&"banana"));
    /// assert_eq!(collection.find(|value, _, _| value.is_empty()), None);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<&V>
    where
        P: FnMut(&V, &K, &Self) -> bool,
    {
        self.iter()
            .find(|&(key, value)| predicate(value, key, self))
            .map(|(_, value)| value)
    }

    /// Returns the key of the first entry for which `predicate` holds.
    pub fn find_key<P>(&self, mut predicate: P) -> Option<&K>
    where
        P: FnMut(&V, &K, &Self) -> bool,
    {
        self.iter()
            .find(|&(key, value)| predicate(value, key, self))
            .map(|(key, _)| key)
    }

    /// Maps every entry through `function`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let labels = collection.map(|value, key, _| format!("{key}={value}"));
    /// assert_eq!(labels, vec!["a=1", "b=2"]);
    /// ```
    pub fn map<R, F>(&self, mut function: F) -> Vec<R>
    where
        F: FnMut(&V, &K, &Self) -> R,
    {
        self.iter()
            .map(|(key, value)| function(value, key, self))
            .collect()
    }

    /// Like [`Collection::map`], stopping at the first `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`, unchanged.
    pub fn try_map<R, E, F>(&self, mut function: F) -> Result<Vec<R>, E>
    where
        F: FnMut(&V, &K, &Self) -> Result<R, E>,
    {
        self.iter()
            .map(|(key, value)| function(value, key, self))
            .collect()
    }

    /// Returns `true` as soon as `predicate` holds for an entry.
    /// An empty collection yields `false`.
    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K, &Self) -> bool,
    {
        self.iter().any(|(key, value)| predicate(value, key, self))
    }

    /// Returns `false` as soon as `predicate` fails for an entry.
    /// An empty collection yields `true`.
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K, &Self) -> bool,
    {
        self.iter().all(|(key, value)| predicate(value, key, self))
    }

    /// Calls `function` for every entry in insertion order.
    pub fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (key, value) in self {
            function(value, key, self);
        }
    }

    /// Like [`Collection::for_each`], stopping at the first `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`, unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, i32> = [(1, 1), (2, -2), (3, 3)].into();
    /// let mut seen = Vec::new();
    /// let result = collection.try_for_each(|value, key, _| {
    ///     if *value < 0 {
    ///         return Err(format!("negative value at {key}"));
    ///     }
    ///     seen.push(*key);
    ///     Ok(())
    /// });
    ///
    /// assert_eq!(result, Err("negative value at 2".to_string()));
    /// assert_eq!(seen, vec![1]);
    /// ```
    pub fn try_for_each<E, F>(&self, mut function: F) -> Result<(), E>
    where
        F: FnMut(&V, &K, &Self) -> Result<(), E>,
    {
        self.iter()
            .try_for_each(|(key, value)| function(value, key, self))
    }

    /// Folds every entry into an accumulator, in insertion order.
    pub fn reduce<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, &V, &K, &Self) -> A,
    {
        self.iter().fold(initial, |accumulator, (key, value)| {
            function(accumulator, value, key, self)
        })
    }

    /// Removes every entry for which `predicate` holds, returning how many
    /// were removed. The remaining entries keep their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let mut collection: Collection<i32, i32> = (1..=5).map(|key| (key, key)).collect();
    /// assert_eq!(collection.sweep(|value, _| value % 2 == 0), 2);
    /// assert_eq!(collection.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    /// ```
    pub fn sweep<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&V, &K) -> bool,
    {
        let before = self.len();
        self.entries.retain(|key, value| !predicate(value, key));
        before - self.len()
    }
}
