use crate::domain::PixelPoint;

/// Bresenham line from `from` to `to`, both endpoints included
pub fn line_points(from: PixelPoint, to: PixelPoint) -> Vec<PixelPoint> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let (mut x, mut y) = (from.x, from.y);
    let mut err = dx + dy;

    loop {
        points.push(PixelPoint::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> PixelPoint {
        PixelPoint::new(x, y)
    }

    #[test]
    fn test_single_point() {
        assert_eq!(line_points(p(3, 3), p(3, 3)), vec![p(3, 3)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(line_points(p(0, 0), p(3, 0)), vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
        assert_eq!(line_points(p(0, 2), p(0, 0)), vec![p(0, 2), p(0, 1), p(0, 0)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(line_points(p(0, 0), p(-3, 3)), vec![p(0, 0), p(-1, 1), p(-2, 2), p(-3, 3)]);
    }

    #[test]
    fn test_shallow_line_is_connected() {
        let points = line_points(p(64, 100), p(2, 80));
        assert_eq!(points.first(), Some(&p(64, 100)));
        assert_eq!(points.last(), Some(&p(2, 80)));
        // One pixel per column on a shallow line
        assert_eq!(points.len(), 63);
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }
}
