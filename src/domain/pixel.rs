/// Integer position on the canvas, y grows downward
///
/// Never range-checked: points may fall outside the canvas and are
/// clipped when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<PixelPoint> for geo::Coord<i32> {
    fn from(p: PixelPoint) -> Self {
        geo::coord! { x: p.x, y: p.y }
    }
}

impl From<geo::Coord<i32>> for PixelPoint {
    fn from(c: geo::Coord<i32>) -> Self {
        Self { x: c.x, y: c.y }
    }
}
