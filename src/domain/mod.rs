pub mod pixel;
pub mod survey;

pub use pixel::PixelPoint;
pub use survey::{Coordinate, Ring};
