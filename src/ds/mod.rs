pub mod rotation_ring;

pub use rotation_ring::RotationRing;
