//! Splitting a collection into several collections.

use std::hash::Hash;

use super::{Collection, OrderedMap};

/// Chunk size used when `into_chunks` is asked for chunks of zero entries.
pub const DEFAULT_CHUNK_SIZE: usize = 1;

impl<K: Hash + Eq, V> Collection<K, V> {
    /// Splits the entries, in insertion order, into consecutive collections
    /// of at most `size` entries each. Only the last chunk may be smaller.
    ///
    /// A `size` of zero falls back to [`DEFAULT_CHUNK_SIZE`]. Every chunk
    /// inherits the registered capabilities of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, i32> = (1..=7).map(|key| (key, key * 10)).collect();
    /// let chunks = collection.into_chunks(3);
    ///
    /// let sizes: Vec<usize> = chunks.iter().map(Collection::len).collect();
    /// assert_eq!(sizes, vec![3, 3, 1]);
    /// assert_eq!(chunks[1].first_key(), Some(&4));
    /// ```
    #[must_use]
    pub fn into_chunks(self, size: usize) -> Vec<Self> {
        let size = if size == 0 { DEFAULT_CHUNK_SIZE } else { size };
        tracing::trace!(entries = self.len(), chunk_size = size, "splitting into chunks");

        let Self {
            entries,
            deep_equal,
        } = self;
        let mut chunks = Vec::with_capacity(entries.len().div_ceil(size));
        let mut remaining = entries.into_iter().peekable();
        while remaining.peek().is_some() {
            let chunk: OrderedMap<K, V> = remaining.by_ref().take(size).collect();
            chunks.push(Self {
                entries: chunk,
                deep_equal: deep_equal.clone(),
            });
        }
        chunks
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Collection<K, V> {
    /// Splits the entries into those matching `predicate` and the rest.
    ///
    /// Both results preserve insertion order; `self` is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, i32> = (1..=6).map(|key| (key, key)).collect();
    /// let (even, odd) = collection.partition(|value, _, _| value % 2 == 0);
    ///
    /// assert_eq!(even.keys().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
    /// assert_eq!(odd.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    /// ```
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&V, &K, &Self) -> bool,
    {
        let mut matching = self.derive_from(OrderedMap::default());
        let mut rest = self.derive_from(OrderedMap::default());
        for (key, value) in self {
            let target = if predicate(value, key, self) {
                &mut matching
            } else {
                &mut rest
            };
            target.insert(key.clone(), value.clone());
        }
        (matching, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbered(count: i32) -> Collection<i32, String> {
        (1..=count).map(|key| (key, format!("v{key}"))).collect()
    }

    #[rstest]
    #[case(7, 3, vec![3, 3, 1])]
    #[case(6, 3, vec![3, 3])]
    #[case(2, 5, vec![2])]
    #[case(3, 0, vec![1, 1, 1])]
    #[case(0, 4, vec![])]
    fn test_chunk_sizes(#[case] count: i32, #[case] size: usize, #[case] expected: Vec<usize>) {
        let sizes: Vec<usize> = numbered(count)
            .into_chunks(size)
            .iter()
            .map(Collection::len)
            .collect();
        assert_eq!(sizes, expected);
    }

    #[rstest]
    fn test_chunks_preserve_relative_order() {
        let chunks = numbered(7).into_chunks(3);
        let flattened: Vec<i32> = chunks
            .iter()
            .flat_map(|chunk| chunk.keys().copied())
            .collect();
        assert_eq!(flattened, (1..=7).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_chunks_inherit_deep_equal() {
        let collection = numbered(4).with_deep_equal(|left: &String, right: &String| {
            left.eq_ignore_ascii_case(right)
        });
        assert!(
            collection
                .into_chunks(2)
                .iter()
                .all(Collection::has_deep_equal)
        );
    }

    #[rstest]
    fn test_partition_leaves_source_untouched() {
        let collection = numbered(5);
        let (low, high) = collection.partition(|_, key, _| *key <= 2);

        assert_eq!(low.len(), 2);
        assert_eq!(high.len(), 3);
        assert_eq!(collection.len(), 5);
    }
}
