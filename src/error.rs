//! Error types for the rotamap library.
//!
//! ## Key Components
//!
//! - [`MapError`]: Returned by fallible [`RandomAccessMap`] operations:
//!   construction with a bad capacity or bias, duplicate puts, lookups of
//!   absent keys, and random retrieval from an empty map.
//!
//! ## Example Usage
//!
//! ```
//! use rotamap::error::MapError;
//! use rotamap::map::RandomAccessMap;
//! use rotamap::rng::XorShift64;
//!
//! // Fallible constructor for user-configurable parameters
//! let map: Result<RandomAccessMap<String, i32, _>, MapError> =
//!     RandomAccessMap::new(10_000, XorShift64::new(1));
//! assert!(map.is_ok());
//!
//! // A capacity below the floor is caught without panicking
//! let bad = RandomAccessMap::<String, i32, _>::new(100, XorShift64::new(1));
//! assert_eq!(
//!     bad.unwrap_err(),
//!     MapError::CapacityTooSmall { given: 100, min: 10_000 },
//! );
//! ```
//!
//! [`RandomAccessMap`]: crate::map::RandomAccessMap

use std::fmt;

// ---------------------------------------------------------------------------
// MapError
// ---------------------------------------------------------------------------

/// Error returned by fallible [`RandomAccessMap`](crate::map::RandomAccessMap)
/// operations.
///
/// Every failure is immediate and synchronous; the map is left unchanged.
/// Deleting an absent key is an expected outcome, not an error, and is
/// reported through `delete`'s `bool` return instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Construction rejected: the capacity hint is below the supported floor.
    CapacityTooSmall {
        /// Capacity the caller asked for.
        given: usize,
        /// Smallest accepted capacity.
        min: usize,
    },

    /// Construction rejected: the front-placement threshold does not leave a
    /// valid draw range (`front_threshold` must be below `draw_bound`).
    InvalidBias {
        /// Upper bound (exclusive) of the per-insert draw.
        draw_bound: u64,
        /// Draws strictly above this value place the key at the front.
        front_threshold: u64,
    },

    /// Put rejected: the key is already present. Values are never overwritten
    /// in place.
    DuplicateKey,

    /// Get failed: no entry under the requested key.
    KeyNotFound,

    /// Random retrieval failed: the map holds no entries.
    Empty,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::CapacityTooSmall { given, min } => {
                write!(f, "use a start capacity of at least {min} (got {given})")
            },
            MapError::InvalidBias {
                draw_bound,
                front_threshold,
            } => {
                write!(
                    f,
                    "front threshold {front_threshold} must be below draw bound {draw_bound}"
                )
            },
            MapError::DuplicateKey => f.write_str("key already present in the map"),
            MapError::KeyNotFound => f.write_str("key not found in the map"),
            MapError::Empty => f.write_str("cannot pick a random element from an empty map"),
        }
    }
}

impl std::error::Error for MapError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_display_names_both_bounds() {
        let err = MapError::CapacityTooSmall {
            given: 100,
            min: 10_000,
        };
        assert_eq!(err.to_string(), "use a start capacity of at least 10000 (got 100)");
    }

    #[test]
    fn bias_display_names_both_parameters() {
        let err = MapError::InvalidBias {
            draw_bound: 10,
            front_threshold: 12,
        };
        assert_eq!(
            err.to_string(),
            "front threshold 12 must be below draw bound 10"
        );
    }

    #[test]
    fn operation_errors_have_stable_messages() {
        assert_eq!(MapError::DuplicateKey.to_string(), "key already present in the map");
        assert_eq!(MapError::KeyNotFound.to_string(), "key not found in the map");
        assert_eq!(
            MapError::Empty.to_string(),
            "cannot pick a random element from an empty map"
        );
    }

    #[test]
    fn debug_includes_variant_name() {
        let dbg = format!("{:?}", MapError::KeyNotFound);
        assert!(dbg.contains("KeyNotFound"));
    }

    #[test]
    fn clone_and_eq() {
        let a = MapError::CapacityTooSmall {
            given: 1,
            min: 10_000,
        };
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, MapError::DuplicateKey);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<MapError>();
    }
}
