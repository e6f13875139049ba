use crate::raster::Canvas;

/// Rows to keep after trimming: everything from the first to the last
/// non-empty row
///
/// Returns `(leading_rows_removed, rows_kept)`. A canvas with nothing drawn
/// trims to zero rows, all of them counted as leading.
pub fn trim_rows(canvas: &Canvas) -> (u32, u32) {
    let mut first = None;
    let mut last = None;
    for y in 0..canvas.height() {
        if !canvas.is_row_empty(y) {
            first.get_or_insert(y);
            last = Some(y);
        }
    }
    match (first, last) {
        (Some(first), Some(last)) => (first, last - first + 1),
        _ => (canvas.height(), 0),
    }
}

/// 1-bit-per-pixel rows, most significant bit first, 1 = lit
///
/// Same layout as a 1-bit grayscale PNG scanline and as the byte arrays
/// the display driver reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    trimmed_top: u32,
    data: Vec<u8>,
}

impl PackedBitmap {
    /// Trim empty rows off `canvas` and pack what is left
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let (trimmed_top, height) = trim_rows(canvas);
        let width = canvas.width();
        let bytes_per_row = bytes_per_row(width);

        let mut data = vec![0u8; bytes_per_row * height as usize];
        for row in 0..height {
            let pixels = canvas.row(trimmed_top + row);
            let out = &mut data[row as usize * bytes_per_row..][..bytes_per_row];
            for (x, _) in pixels.iter().enumerate().filter(|&(_, &lit)| lit) {
                out[x / 8] |= 0x80 >> (x % 8);
            }
        }

        Self {
            width,
            height,
            trimmed_top,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of empty rows removed above the first drawn row
    pub fn trimmed_top(&self) -> u32 {
        self.trimmed_top
    }

    pub fn bytes_per_row(&self) -> usize {
        bytes_per_row(self.width)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() panics on 0, and a zero-width bitmap has no bytes anyway
        self.data.chunks(self.bytes_per_row().max(1))
    }

    /// Read back one pixel of the trimmed image
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.bytes_per_row() + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }
}

fn bytes_per_row(width: u32) -> usize {
    width.div_ceil(8) as usize
}
