pub use crate::ds::RotationRing;
pub use crate::error::MapError;
pub use crate::map::{FrontBias, MIN_CAPACITY, RandomAccessMap};
pub use crate::rng::{RandomSource, XorShift64};
