use crate::domain::PixelPoint;

/// What a draw does to the pixels it touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Light the pixel (white on the display)
    Set,
    /// Erase the pixel back to background
    Clear,
}

impl Ink {
    fn value(self) -> bool {
        matches!(self, Ink::Set)
    }
}

/// Fixed-size 1-bit grid, row-major, all pixels clear at start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel value, `false` outside the canvas
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.pixels[i])
    }

    /// Paint one pixel; points outside the canvas are dropped
    pub fn put(&mut self, point: PixelPoint, ink: Ink) {
        if let Some(i) = self.index(point.x, point.y) {
            self.pixels[i] = ink.value();
        }
    }

    pub fn put_all(&mut self, points: impl IntoIterator<Item = PixelPoint>, ink: Ink) {
        for point in points {
            self.put(point, ink);
        }
    }

    pub fn row(&self, y: u32) -> &[bool] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn is_row_empty(&self, y: u32) -> bool {
        !self.row(y).iter().any(|&p| p)
    }

    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_clear() {
        let canvas = Canvas::new(16, 4);
        assert_eq!(canvas.count_set(), 0);
        assert!((0..4).all(|y| canvas.is_row_empty(y)));
    }

    #[test]
    fn test_put_and_clear() {
        let mut canvas = Canvas::new(8, 8);
        canvas.put(PixelPoint::new(3, 5), Ink::Set);
        assert!(canvas.get(3, 5));
        assert!(!canvas.is_row_empty(5));

        canvas.put(PixelPoint::new(3, 5), Ink::Clear);
        assert!(!canvas.get(3, 5));
        assert!(canvas.is_row_empty(5));
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = Canvas::new(8, 8);
        canvas.put_all(
            [
                PixelPoint::new(-1, 0),
                PixelPoint::new(0, -1),
                PixelPoint::new(8, 0),
                PixelPoint::new(0, 8),
            ],
            Ink::Set,
        );
        assert_eq!(canvas.count_set(), 0);
        assert!(!canvas.get(-1, 0));
        assert!(!canvas.get(100, 100));
    }

    #[test]
    fn test_row_slice() {
        let mut canvas = Canvas::new(4, 2);
        canvas.put(PixelPoint::new(1, 1), Ink::Set);
        assert_eq!(canvas.row(1), &[false, true, false, false]);
        assert_eq!(canvas.row(0), &[false; 4]);
    }
}
