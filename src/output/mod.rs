pub mod header;
pub mod image;
pub mod pack;

pub use header::FirmwareHeader;
pub use image::write_png;
pub use pack::{PackedBitmap, trim_rows};
