pub mod geodesy;
pub mod projection;

pub use geodesy::{Geodesy, PlanarOffset};
pub use projection::{Projector, hour_to_degrees};
