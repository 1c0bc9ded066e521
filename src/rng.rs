//! Injected randomness for front/back placement draws.
//!
//! The map never reaches for ambient entropy: the random source is a
//! constructor parameter, so a deterministic source makes every operation
//! sequence fully reproducible under test.
//!
//! ## Key Components
//!
//! - [`RandomSource`]: the single capability the map needs: a bounded draw.
//! - [`XorShift64`]: default generator; fast, allocation-free, and
//!   independent of system time (Miri-compatible).
//!
//! ## Example Usage
//!
//! ```
//! use rotamap::rng::{RandomSource, XorShift64};
//!
//! let mut rng = XorShift64::new(42);
//! let draw = rng.next_bounded(10);
//! assert!(draw < 10);
//!
//! // Same seed, same sequence.
//! let mut a = XorShift64::new(7);
//! let mut b = XorShift64::new(7);
//! assert_eq!(a.next_bounded(1000), b.next_bounded(1000));
//! ```

/// A source of bounded pseudo-random draws.
///
/// Implementations return a uniform-ish integer in `[0, bound)`. The map
/// draws sequentially from a single source; no thread safety is required.
pub trait RandomSource {
    /// Returns a draw in `[0, bound)`. `bound` must be nonzero.
    fn next_bounded(&mut self, bound: u64) -> u64;
}

/// A mutable borrow of a source is itself a source, so callers can lend a
/// generator they retain.
impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn next_bounded(&mut self, bound: u64) -> u64 {
        (**self).next_bounded(bound)
    }
}

/// XorShift64 pseudo-random generator.
///
/// Shift triple 13/7/17. Not cryptographic; good enough for placement draws
/// and cheap enough to sit on the put path.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator from a seed.
    ///
    /// XorShift fixes the all-zero state, so the seed is mixed with the
    /// golden-ratio increment and coerced away from zero.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(0x9e3779b97f4a7c15).max(1),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift64 {
    #[inline]
    fn next_bounded(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "draw bound must be nonzero");
        self.next_u64() % bound
    }
}
