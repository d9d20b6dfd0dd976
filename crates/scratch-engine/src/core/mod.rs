pub mod reveal;
pub mod rng;
pub mod surface;
