use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::pack::PackedBitmap;
use crate::error::MapError;

/// Write the packed bitmap as a 1-bit grayscale PNG
///
/// Packed rows already match the PNG scanline layout for bit depth 1, so
/// the bytes are written as-is. A zero-height bitmap cannot be encoded and
/// is rejected with [`MapError::EmptyMap`].
pub fn write_png(path: &Path, bitmap: &PackedBitmap) -> Result<()> {
    if bitmap.height() == 0 || bitmap.width() == 0 {
        return Err(MapError::EmptyMap.into());
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create image file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, bitmap.width(), bitmap.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::One);

    let mut writer = encoder
        .write_header()
        .context("Failed to write PNG header")?;
    writer
        .write_image_data(bitmap.data())
        .context("Failed to write PNG image data")?;
    writer.finish().context("Failed to finish PNG file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PixelPoint;
    use crate::raster::{Canvas, Ink};
    use tempfile::tempdir;

    #[test]
    fn test_write_png_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.png");

        let mut canvas = Canvas::new(12, 5);
        canvas.put(PixelPoint::new(0, 1), Ink::Set);
        canvas.put(PixelPoint::new(11, 3), Ink::Set);
        let bitmap = PackedBitmap::from_canvas(&canvas);

        write_png(&path, &bitmap).unwrap();

        let mut decoder = png::Decoder::new(File::open(&path).unwrap());
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!(info.width, 12);
        assert_eq!(info.height, 3);
        assert_eq!(info.bit_depth, png::BitDepth::One);
        assert_eq!(info.color_type, png::ColorType::Grayscale);
        assert_eq!(&buf[..info.buffer_size()], bitmap.data());
    }

    #[test]
    fn test_empty_bitmap_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let bitmap = PackedBitmap::from_canvas(&Canvas::new(8, 8));

        let err = write_png(&path, &bitmap).unwrap_err();
        assert_eq!(err.downcast_ref::<MapError>(), Some(&MapError::EmptyMap));
        assert!(!path.exists());
    }
}
