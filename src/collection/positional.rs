//! Positional reads over insertion order.
//!
//! The single-element forms answer `None` on an empty collection; the
//! counted forms clamp to the collection size and always return entries in
//! insertion order, including the trailing `last_*` forms.

use super::Collection;

impl<K, V> Collection<K, V> {
    /// Returns the first value in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, char> = [(1, 'a'), (2, 'b')].into();
    /// assert_eq!(collection.first(), Some(&'a'));
    ///
    /// let empty: Collection<i32, char> = Collection::new();
    /// assert_eq!(empty.first(), None);
    /// ```
    #[inline]
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Returns up to `amount` leading values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, char> = [(1, 'a'), (2, 'b'), (3, 'c')].into();
    /// assert_eq!(collection.first_n(2), vec![&'a', &'b']);
    /// assert_eq!(collection.first_n(10).len(), 3);
    /// ```
    pub fn first_n(&self, amount: usize) -> Vec<&V> {
        self.values().take(amount).collect()
    }

    /// Returns the first key in insertion order.
    #[inline]
    pub fn first_key(&self) -> Option<&K> {
        self.entries.first().map(|(key, _)| key)
    }

    /// Returns up to `amount` leading keys.
    pub fn first_keys(&self, amount: usize) -> Vec<&K> {
        self.keys().take(amount).collect()
    }

    /// Returns the last value in insertion order.
    #[inline]
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, value)| value)
    }

    /// Returns up to `amount` trailing values, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, char> = [(1, 'a'), (2, 'b'), (3, 'c')].into();
    /// assert_eq!(collection.last_n(2), vec![&'b', &'c']);
    /// ```
    pub fn last_n(&self, amount: usize) -> Vec<&V> {
        self.values().skip(self.trailing_start(amount)).collect()
    }

    /// Returns the last key in insertion order.
    #[inline]
    pub fn last_key(&self) -> Option<&K> {
        self.entries.last().map(|(key, _)| key)
    }

    /// Returns up to `amount` trailing keys, in insertion order.
    pub fn last_keys(&self, amount: usize) -> Vec<&K> {
        self.keys().skip(self.trailing_start(amount)).collect()
    }

    /// Returns the value at `index`; negative indices count back from the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, char> = [(1, 'a'), (2, 'b'), (3, 'c')].into();
    /// assert_eq!(collection.at(1), Some(&'b'));
    /// assert_eq!(collection.at(-1), Some(&'c'));
    /// assert_eq!(collection.at(3), None);
    /// assert_eq!(collection.at(-4), None);
    /// ```
    pub fn at(&self, index: isize) -> Option<&V> {
        self.resolve_index(index)
            .and_then(|position| self.entries.get_index(position))
            .map(|(_, value)| value)
    }

    /// Returns the key at `index`; negative indices count back from the end.
    pub fn key_at(&self, index: isize) -> Option<&K> {
        self.resolve_index(index)
            .and_then(|position| self.entries.get_index(position))
            .map(|(key, _)| key)
    }

    fn trailing_start(&self, amount: usize) -> usize {
        self.len().saturating_sub(amount)
    }

    fn resolve_index(&self, index: isize) -> Option<usize> {
        if index >= 0 {
            Some(index.unsigned_abs())
        } else {
            self.len().checked_sub(index.unsigned_abs())
        }
    }
}
