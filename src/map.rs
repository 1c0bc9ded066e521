//! Random-access map: hash map plus a rotation ring for O(1) random picks.
//!
//! Combines a key-value hash map with a [`RotationRing`] of keys so that
//! retrieving a pseudo-random element costs amortized O(1) instead of a
//! collection scan.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                     RandomAccessMap<K, V, R> Layout                  │
//! │                                                                      │
//! │   data: FxHashMap<K, V>             ring: RotationRing<K>            │
//! │        key → value                       retrieval order             │
//! │                                                                      │
//! │   ┌──────────┬─────────┐       front ─► [k2] [k1] [k4] [k3] ◄─ back  │
//! │   │  "k1"    │  v1     │                 ▲              │            │
//! │   │  "k2"    │  v2     │                 │   rotate     │            │
//! │   │  "k3"    │  v3     │                 └──────────────┘            │
//! │   │  "k4"    │  v4     │                                             │
//! │   └──────────┴─────────┘    (the ring may also hold stale keys       │
//! │                              whose entries were deleted)             │
//! └──────────────────────────────────────────────────────────────────────┘
//!
//! Put Flow (new key)
//! ──────────────────
//!
//!   put(key, value):
//!     1. Reject if key already present (values are never overwritten)
//!     2. Insert (key, value) into the map
//!     3. Draw from [0, draw_bound); place key at ring front when the draw
//!        exceeds front_threshold, else at the back
//!
//! Random Retrieval Flow
//! ─────────────────────
//!
//!   get_random():
//!     1. Pop the front ring key
//!     2. Live?  → push it to the back, return its value (rotated)
//!     3. Stale? → drop it for good, return the first live entry's value
//! ```
//!
//! ## Operations
//!
//! | Operation    | Time   | Notes                                        |
//! |--------------|--------|----------------------------------------------|
//! | `put`        | O(1)*  | *Amortized; one bounded draw per insert      |
//! | `get`        | O(1)   | No ring side effects                         |
//! | `delete`     | O(1)   | Map only; ring entry goes stale (lazy)       |
//! | `get_random` | O(1)*  | *Amortized; discards at most one stale entry |
//! | `len`        | O(1)   | Live entries only                            |
//! | `clear`      | O(n)   | Clears both structures                       |
//!
//! ## Algorithm Properties
//!
//! - **Lazy deletion**: `delete` never searches the ring. A deleted key's
//!   ring entry survives as a tombstone and is dropped the first time it
//!   reaches the front, so total stale work over the container's lifetime is
//!   bounded by the total number of deletes.
//! - **Rotation, not sampling**: `get_random` walks the ring front-to-back,
//!   recycling live keys. With no deletes, N calls visit every key exactly
//!   once; randomness comes from the front/back placement draw at insert.
//! - **Biased split**: the default placement sends new keys to the front
//!   with probability 0.4 and the back with 0.6, matching the historical
//!   `draw(10) > 5` behavior. See [`FrontBias`] to choose a different split.
//!
//! ## Example Usage
//!
//! ```
//! use rotamap::map::RandomAccessMap;
//! use rotamap::rng::XorShift64;
//!
//! let mut map = RandomAccessMap::new(10_000, XorShift64::new(42)).unwrap();
//! map.put("alpha", 1).unwrap();
//! map.put("beta", 2).unwrap();
//!
//! assert_eq!(map.get(&"alpha"), Ok(&1));
//!
//! let picked = *map.get_random().unwrap();
//! assert!(picked == 1 || picked == 2);
//!
//! assert!(map.delete(&"alpha"));
//! assert!(!map.delete(&"alpha"));
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe. `put`, `delete`, and `get_random` each touch both the
//! map and the ring, so callers sharing a `RandomAccessMap` across threads
//! must wrap the whole container in external mutual exclusion.
//!
//! ## Implementation Notes
//!
//! - `FxHashMap` keeps lookups cheap and, being unkeyed, makes the
//!   stale-fallback pick reproducible run-to-run.
//! - The random source is injected at construction ([`RandomSource`]); a
//!   deterministic source makes every sequence replayable under test.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::RotationRing;
use crate::error::MapError;
use crate::rng::RandomSource;

/// Smallest capacity hint accepted at construction.
pub const MIN_CAPACITY: usize = 10_000;

// ---------------------------------------------------------------------------
// FrontBias
// ---------------------------------------------------------------------------

/// Front/back placement split for newly inserted keys.
///
/// Each `put` draws from `[0, draw_bound)`; the key goes to the ring front
/// when the draw strictly exceeds `front_threshold`, to the back otherwise.
/// The default (`draw_bound` 10, `front_threshold` 5) preserves the
/// historical ~40/60 front/back split; construct an explicit bias for a
/// deliberate alternative, e.g. 50/50:
///
/// ```
/// use rotamap::map::FrontBias;
///
/// let even = FrontBias::new(2, 0).unwrap();
/// assert_eq!(even.front_probability(), 0.5);
///
/// assert_eq!(FrontBias::default().front_probability(), 0.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontBias {
    draw_bound: u64,
    front_threshold: u64,
}

impl FrontBias {
    /// Creates a placement split; fails unless `front_threshold < draw_bound`.
    ///
    /// A zero draw bound is rejected by the same check.
    pub fn new(draw_bound: u64, front_threshold: u64) -> Result<Self, MapError> {
        if front_threshold >= draw_bound {
            return Err(MapError::InvalidBias {
                draw_bound,
                front_threshold,
            });
        }
        Ok(Self {
            draw_bound,
            front_threshold,
        })
    }

    /// Upper bound (exclusive) of the per-insert draw.
    #[inline]
    pub fn draw_bound(&self) -> u64 {
        self.draw_bound
    }

    /// Draws strictly above this value place the key at the front.
    #[inline]
    pub fn front_threshold(&self) -> u64 {
        self.front_threshold
    }

    /// Probability that a new key lands at the front of the ring.
    pub fn front_probability(&self) -> f64 {
        (self.draw_bound - self.front_threshold - 1) as f64 / self.draw_bound as f64
    }
}

impl Default for FrontBias {
    /// The historical split: draws from `[0, 10)`, front when the draw
    /// exceeds 5, giving front probability 0.4.
    fn default() -> Self {
        Self {
            draw_bound: 10,
            front_threshold: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// RandomAccessMap
// ---------------------------------------------------------------------------

/// Key-value map with amortized O(1) pseudo-random element retrieval.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash` (the ring keeps its own copy
///   of each key)
/// - `V`: Value type
/// - `R`: Injected random source deciding front/back placement per insert
///
/// # Example
///
/// ```
/// use rotamap::map::RandomAccessMap;
/// use rotamap::rng::XorShift64;
///
/// let mut map = RandomAccessMap::new(10_000, XorShift64::new(7)).unwrap();
///
/// map.put(1u64, "one").unwrap();
/// assert!(map.contains(&1));
/// assert_eq!(map.len(), 1);
///
/// // Values are never overwritten in place.
/// assert!(map.put(1, "uno").is_err());
/// assert_eq!(map.get(&1), Ok(&"one"));
/// ```
pub struct RandomAccessMap<K, V, R>
where
    K: Clone + Eq + Hash,
{
    /// Live entries.
    data: FxHashMap<K, V>,
    /// Retrieval order; may hold stale keys awaiting lazy removal.
    ring: RotationRing<K>,
    /// Front/back placement split.
    bias: FrontBias,
    /// Injected draw source.
    random: R,
    /// Construction-time capacity hint.
    capacity: usize,
}

impl<K, V, R> RandomAccessMap<K, V, R>
where
    K: Clone + Eq + Hash,
    R: RandomSource,
{
    /// Creates a map with the default [`FrontBias`].
    ///
    /// `capacity` is a preallocation hint and must be at least
    /// [`MIN_CAPACITY`]; smaller values fail with
    /// [`MapError::CapacityTooSmall`] before any state is built.
    ///
    /// # Example
    ///
    /// ```
    /// use rotamap::map::RandomAccessMap;
    /// use rotamap::rng::XorShift64;
    ///
    /// let map = RandomAccessMap::<u64, &str, _>::new(10_000, XorShift64::new(1));
    /// assert!(map.is_ok());
    ///
    /// let too_small = RandomAccessMap::<u64, &str, _>::new(9_999, XorShift64::new(1));
    /// assert!(too_small.is_err());
    /// ```
    pub fn new(capacity: usize, random: R) -> Result<Self, MapError> {
        Self::with_bias(capacity, FrontBias::default(), random)
    }

    /// Creates a map with an explicit placement split.
    pub fn with_bias(capacity: usize, bias: FrontBias, random: R) -> Result<Self, MapError> {
        if capacity < MIN_CAPACITY {
            return Err(MapError::CapacityTooSmall {
                given: capacity,
                min: MIN_CAPACITY,
            });
        }
        Ok(Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            ring: RotationRing::with_capacity(capacity),
            bias,
            random,
            capacity,
        })
    }

    /// Stores a value under a new key.
    ///
    /// Fails with [`MapError::DuplicateKey`] if the key is already present;
    /// the existing value is untouched. Otherwise the entry is inserted and
    /// the key drawn into the ring at the front or back per the configured
    /// [`FrontBias`].
    ///
    /// # Example
    ///
    /// ```
    /// use rotamap::error::MapError;
    /// use rotamap::map::RandomAccessMap;
    /// use rotamap::rng::XorShift64;
    ///
    /// let mut map = RandomAccessMap::new(10_000, XorShift64::new(1)).unwrap();
    /// assert_eq!(map.put("key", 10), Ok(()));
    /// assert_eq!(map.put("key", 123), Err(MapError::DuplicateKey));
    /// assert_eq!(map.get(&"key"), Ok(&10));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Result<(), MapError> {
        if self.data.contains_key(&key) {
            return Err(MapError::DuplicateKey);
        }
        self.data.insert(key.clone(), value);
        if self.random.next_bounded(self.bias.draw_bound) > self.bias.front_threshold {
            self.ring.push_front(key);
        } else {
            self.ring.push_back(key);
        }
        Ok(())
    }

    /// Returns the value stored under `key`.
    ///
    /// Fails with [`MapError::KeyNotFound`] if absent. Never touches the
    /// ring, so lookups do not perturb retrieval order.
    #[inline]
    pub fn get(&self, key: &K) -> Result<&V, MapError> {
        self.data.get(key).ok_or(MapError::KeyNotFound)
    }

    /// Removes the entry under `key` from the map; returns `true` iff an
    /// entry was removed.
    ///
    /// The ring is deliberately left alone: the key's ring entry goes stale
    /// and is discarded the first time [`get_random`](Self::get_random)
    /// meets it, keeping delete O(1).
    #[inline]
    pub fn delete(&mut self, key: &K) -> bool {
        self.data.remove(key).is_some()
    }

    /// Returns a pseudo-randomly selected value.
    ///
    /// Pops the front ring key: a live key is recycled to the back and its
    /// value returned; a stale key is dropped permanently and the first live
    /// entry's value returned instead. At most one stale entry is discarded
    /// per call, which bounds lifetime stale work by the number of deletes.
    ///
    /// Fails with [`MapError::Empty`] when the map holds no entries.
    ///
    /// # Example
    ///
    /// ```
    /// use rotamap::map::RandomAccessMap;
    /// use rotamap::rng::XorShift64;
    ///
    /// let mut map = RandomAccessMap::new(10_000, XorShift64::new(3)).unwrap();
    /// assert!(map.get_random().is_err());
    ///
    /// map.put("solo", 42).unwrap();
    /// assert_eq!(map.get_random(), Ok(&42));
    /// assert_eq!(map.get_random(), Ok(&42));
    /// ```
    pub fn get_random(&mut self) -> Result<&V, MapError> {
        if self.data.is_empty() {
            return Err(MapError::Empty);
        }
        debug_assert!(!self.ring.is_empty(), "live keys must have ring entries");
        let front = match self.ring.pop_front() {
            Some(key) => key,
            None => return Err(MapError::Empty),
        };
        if self.data.contains_key(&front) {
            self.ring.push_back(front.clone());
            return self.data.get(&front).ok_or(MapError::Empty);
        }
        // Stale entry: dropped for good. Serve the first live entry; FxHashMap
        // iteration is unkeyed, so the pick is stable for a given history.
        self.data.values().next().ok_or(MapError::Empty)
    }

    /// Returns `true` if `key` has a live entry.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the construction-time capacity hint.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the configured placement split.
    #[inline]
    pub fn bias(&self) -> FrontBias {
        self.bias
    }

    /// Drops every entry and every ring key, live or stale.
    pub fn clear(&mut self) {
        self.data.clear();
        self.ring.clear();
    }

    /// Returns the ring length, stale entries included.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_ring_len(&self) -> usize {
        self.ring.len()
    }

    /// Validates internal invariants:
    ///
    /// - every live key appears at least once in the ring (a delete followed
    ///   by a re-put of the same key can leave two entries until the older
    ///   one cycles out of rotation)
    /// - the ring is never shorter than the live entry count
    ///
    /// Only available in debug/test builds.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut counts: FxHashMap<&K, usize> = FxHashMap::default();
        for key in self.ring.iter() {
            *counts.entry(key).or_insert(0) += 1;
        }
        for key in self.data.keys() {
            assert!(
                counts.get(key).copied().unwrap_or(0) >= 1,
                "live key must appear in the ring"
            );
        }
        assert!(
            self.ring.len() >= self.data.len(),
            "ring cannot be shorter than the live entry count"
        );
    }
}

impl<K, V, R> fmt::Debug for RandomAccessMap<K, V, R>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomAccessMap")
            .field("capacity", &self.capacity)
            .field("len", &self.data.len())
            .field("ring_len", &self.ring.len())
            .finish_non_exhaustive()
    }
}
