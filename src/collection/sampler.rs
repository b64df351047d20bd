//! Random sampling over collection slots.
//!
//! A *slot* is the position of an entry in insertion order. The sampler
//! picks slots, then reads the values (or keys) stored there, so the
//! uniqueness guarantee of [`RandomOptions::unique`] is per slot: a
//! collection holding equal values under different keys can still yield
//! equal values.
//!
//! # Strategy Selection
//!
//! Two algorithms are available and chosen per call by
//! [`SamplingStrategy::select`]:
//!
//! | Strategy         | Time              | Space    | Used when                          |
//! |------------------|-------------------|----------|------------------------------------|
//! | `PartialShuffle` | O(size)           | O(size)  | `unique` and density > threshold   |
//! | `Rejection`      | O(amount) expected| O(amount)| otherwise                          |
//!
//! where `density = floor(amount * 100 / size)` and the threshold depends on
//! the collection size:
//!
//! | Size            | Threshold |
//! |-----------------|-----------|
//! | `<= 500`        | 80        |
//! | `501..=1000`    | 50        |
//! | `> 1000`        | 15        |
//!
//! Rejection sampling with `unique` degrades as `amount` approaches `size`
//! (most draws hit an already chosen slot), which is what the shuffle path
//! avoids.
//!
//! # Examples
//!
//! ```rust
//! use ordered_collection::collection::SamplingStrategy;
//!
//! assert_eq!(SamplingStrategy::select(100, 90, true), SamplingStrategy::PartialShuffle);
//! assert_eq!(SamplingStrategy::select(100, 90, false), SamplingStrategy::Rejection);
//! assert_eq!(SamplingStrategy::select(2000, 200, true), SamplingStrategy::Rejection);
//! assert_eq!(SamplingStrategy::select(2000, 400, true), SamplingStrategy::PartialShuffle);
//! ```

use rand::Rng;
use smallvec::SmallVec;
use std::collections::HashSet;

use super::{Collection, EmptyCollectionError, HashBuilder, RandomOptions, Result};

/// Number of slots kept inline before a slot buffer spills to the heap.
pub const INLINE_SLOTS: usize = 8;

/// Buffer of chosen slots, in selection order.
pub type Slots = SmallVec<[usize; INLINE_SLOTS]>;

// =============================================================================
// Strategy
// =============================================================================

/// The algorithm used to choose slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingStrategy {
    /// Fisher-Yates shuffle of every slot, keeping the first `amount`.
    PartialShuffle,
    /// Independent uniform draws, redrawn on repeats when `unique`.
    Rejection,
}

impl SamplingStrategy {
    /// Returns the density threshold for a collection of `size` entries.
    #[must_use]
    pub const fn threshold(size: usize) -> usize {
        if size <= 500 {
            80
        } else if size <= 1000 {
            50
        } else {
            15
        }
    }

    /// Returns `floor(amount * 100 / size)`, or 0 for an empty collection.
    #[must_use]
    pub const fn density(amount: usize, size: usize) -> usize {
        if size == 0 {
            0
        } else {
            amount.saturating_mul(100) / size
        }
    }

    /// Chooses the strategy for drawing `amount` slots out of `size`.
    ///
    /// `amount` is expected to be normalized already (see
    /// [`normalize_amount`]).
    #[must_use]
    pub const fn select(size: usize, amount: usize, unique: bool) -> Self {
        if unique && Self::density(amount, size) > Self::threshold(size) {
            Self::PartialShuffle
        } else {
            Self::Rejection
        }
    }
}

/// Normalizes a requested amount: absent or zero becomes 1, anything above
/// `size` is clamped to `size`.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::sampler::normalize_amount;
///
/// assert_eq!(normalize_amount(None, 10), 1);
/// assert_eq!(normalize_amount(Some(0), 10), 1);
/// assert_eq!(normalize_amount(Some(4), 10), 4);
/// assert_eq!(normalize_amount(Some(40), 10), 10);
/// ```
#[must_use]
pub fn normalize_amount(amount: Option<usize>, size: usize) -> usize {
    amount.unwrap_or(1).max(1).min(size)
}

// =============================================================================
// Slot Selection
// =============================================================================

/// Chooses slots out of `0..size`.
///
/// `amount` is normalized with [`normalize_amount`] first. With `unique`,
/// the returned slots are pairwise distinct. An empty result is returned
/// only when `size` is zero.
pub fn select_slots<R>(size: usize, amount: usize, unique: bool, rng: &mut R) -> Slots
where
    R: Rng + ?Sized,
{
    if size == 0 {
        return Slots::new();
    }
    let amount = normalize_amount(Some(amount), size);
    let strategy = SamplingStrategy::select(size, amount, unique);
    tracing::trace!(
        size,
        amount,
        unique,
        density = SamplingStrategy::density(amount, size),
        threshold = SamplingStrategy::threshold(size),
        ?strategy,
        "selecting slots"
    );

    match strategy {
        SamplingStrategy::PartialShuffle => shuffle_slots(size, amount, rng),
        SamplingStrategy::Rejection => draw_slots(size, amount, unique, rng),
    }
}

fn shuffle_slots<R>(size: usize, amount: usize, rng: &mut R) -> Slots
where
    R: Rng + ?Sized,
{
    let mut slots: Vec<usize> = (0..size).collect();
    for max in (1..size).rev() {
        let pick = rng.random_range(0..=max);
        slots.swap(pick, max);
    }
    slots.truncate(amount);
    Slots::from_vec(slots)
}

fn draw_slots<R>(size: usize, amount: usize, unique: bool, rng: &mut R) -> Slots
where
    R: Rng + ?Sized,
{
    let mut slots = Slots::with_capacity(amount);
    if !unique {
        slots.extend((0..amount).map(|_| rng.random_range(0..size)));
        return slots;
    }

    let mut chosen: HashSet<usize, HashBuilder> =
        HashSet::with_capacity_and_hasher(amount, HashBuilder::default());
    while slots.len() < amount {
        let slot = rng.random_range(0..size);
        if chosen.insert(slot) {
            slots.push(slot);
        }
    }
    slots
}

// =============================================================================
// Sample
// =============================================================================

/// The result of a sampling call: one pick, or several in selection order.
///
/// A call whose normalized amount is 1 always yields [`Sample::One`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample<T> {
    /// A single pick.
    One(T),
    /// Two or more picks, in selection order.
    Many(Vec<T>),
}

impl<T> Sample<T> {
    fn from_picks(mut picks: Vec<T>) -> Self {
        if picks.len() == 1 {
            if let Some(pick) = picks.pop() {
                return Self::One(pick);
            }
        }
        Self::Many(picks)
    }

    /// Returns the number of picks.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(picks) => picks.len(),
        }
    }

    /// Returns `true` if there are no picks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the picks as a `Vec`, whatever the shape.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(pick) => vec![pick],
            Self::Many(picks) => picks,
        }
    }
}

// =============================================================================
// Collection Front Ends
// =============================================================================

impl<K, V> Collection<K, V> {
    /// Returns one value chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`](super::CollectionError::EmptyCollection)
    /// if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::Collection;
    ///
    /// let collection: Collection<i32, &str> = [(1, "a"), (2, "b")].into();
    /// let value = collection.random().unwrap();
    /// assert!(*value == "a" || *value == "b");
    ///
    /// let empty: Collection<i32, &str> = Collection::new();
    /// assert!(empty.random().is_err());
    /// ```
    pub fn random(&self) -> Result<&V> {
        self.random_with_rng(&mut rand::rng())
    }

    /// Like [`Collection::random`], drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty.
    pub fn random_with_rng<R>(&self, rng: &mut R) -> Result<&V>
    where
        R: Rng + ?Sized,
    {
        let operation = "random";
        let (_, value) = self
            .pick_entries(operation, 1, RandomOptions::default(), rng)?
            .into_iter()
            .next()
            .ok_or(EmptyCollectionError { operation })?;
        Ok(value)
    }

    /// Returns `amount` values chosen at random, in selection order.
    ///
    /// `None` or `Some(0)` draws one value; amounts above the collection
    /// size are clamped. See the [module documentation](self) for how the
    /// drawing algorithm is chosen.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`](super::CollectionError::EmptyCollection)
    /// if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::{Collection, RandomOptions, Sample};
    ///
    /// let collection: Collection<i32, i32> = (0..10).map(|key| (key, key * 2)).collect();
    ///
    /// let picks = collection.sample(Some(4), RandomOptions::unique()).unwrap();
    /// assert_eq!(picks.len(), 4);
    ///
    /// let single = collection.sample(None, RandomOptions::default()).unwrap();
    /// assert!(matches!(single, Sample::One(_)));
    ///
    /// let everything = collection.sample(Some(100), RandomOptions::unique()).unwrap();
    /// let mut values: Vec<i32> = everything.into_vec().into_iter().copied().collect();
    /// values.sort_unstable();
    /// assert_eq!(values, (0..10).map(|key| key * 2).collect::<Vec<_>>());
    /// ```
    pub fn sample(&self, amount: Option<usize>, options: RandomOptions) -> Result<Sample<&V>> {
        self.sample_with_rng(amount, options, &mut rand::rng())
    }

    /// Like [`Collection::sample`], drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty.
    pub fn sample_with_rng<R>(
        &self,
        amount: Option<usize>,
        options: RandomOptions,
        rng: &mut R,
    ) -> Result<Sample<&V>>
    where
        R: Rng + ?Sized,
    {
        let entries = self.pick_entries("sample", amount.unwrap_or(1), options, rng)?;
        Ok(Sample::from_picks(
            entries.into_iter().map(|(_, value)| value).collect(),
        ))
    }

    /// Returns one key chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty.
    pub fn random_key(&self) -> Result<&K> {
        self.random_key_with_rng(&mut rand::rng())
    }

    /// Like [`Collection::random_key`], drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty.
    pub fn random_key_with_rng<R>(&self, rng: &mut R) -> Result<&K>
    where
        R: Rng + ?Sized,
    {
        let operation = "random_key";
        let (key, _) = self
            .pick_entries(operation, 1, RandomOptions::default(), rng)?
            .into_iter()
            .next()
            .ok_or(EmptyCollectionError { operation })?;
        Ok(key)
    }

    /// Returns `amount` keys chosen at random, with the same normalization
    /// and strategy selection as [`Collection::sample`].
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty.
    pub fn sample_keys(&self, amount: Option<usize>, options: RandomOptions) -> Result<Sample<&K>> {
        self.sample_keys_with_rng(amount, options, &mut rand::rng())
    }

    /// Like [`Collection::sample_keys`], drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty.
    pub fn sample_keys_with_rng<R>(
        &self,
        amount: Option<usize>,
        options: RandomOptions,
        rng: &mut R,
    ) -> Result<Sample<&K>>
    where
        R: Rng + ?Sized,
    {
        let entries = self.pick_entries("sample_keys", amount.unwrap_or(1), options, rng)?;
        Ok(Sample::from_picks(
            entries.into_iter().map(|(key, _)| key).collect(),
        ))
    }

    /// Draws slots and reads the entries stored there, in selection order.
    fn pick_entries<R>(
        &self,
        operation: &'static str,
        amount: usize,
        options: RandomOptions,
        rng: &mut R,
    ) -> Result<Vec<(&K, &V)>>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return Err(EmptyCollectionError { operation }.into());
        }
        Ok(select_slots(self.len(), amount, options.unique, rng)
            .iter()
            .filter_map(|&slot| self.entries.get_index(slot))
            .collect())
    }
}
