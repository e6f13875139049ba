//! Midpoint circle rasterization
//!
//! Produces clean single-pixel outlines at small radii, with optional
//! clipping to an angular sweep for drawing arcs.

use std::collections::BTreeSet;

use crate::domain::PixelPoint;

/// Whether `point` lies in the sweep from `start` to `end` (degrees)
///
/// The angle is measured around `center` with y pointing down, and the
/// sweep runs in the direction of increasing angle, wrapping through 360°.
/// Equal `start` and `end` mean a full turn.
pub fn in_sweep(center: PixelPoint, start: f64, end: f64, point: PixelPoint) -> bool {
    if start == end {
        return true;
    }
    let dx = (point.x - center.x) as f64;
    let dy = (point.y - center.y) as f64;
    let angle = dy.atan2(dx).to_degrees();
    (angle - start).rem_euclid(360.0) <= (end - start).rem_euclid(360.0)
}

/// Outline of a full circle
pub fn circle_points(center: PixelPoint, radius: i32) -> BTreeSet<PixelPoint> {
    arc_points(center, radius, 0.0, 0.0)
}

/// Outline of a circle restricted to the sweep from `start` to `end`
pub fn arc_points(center: PixelPoint, radius: i32, start: f64, end: f64) -> BTreeSet<PixelPoint> {
    let mut points = BTreeSet::new();
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - x;

    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-x, y),
            (-y, x),
            (-x, -y),
            (-y, -x),
            (x, -y),
            (y, -x),
        ] {
            let p = PixelPoint::new(center.x + dx, center.y + dy);
            if in_sweep(center, start, end, p) {
                points.insert(p);
            }
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x + 1);
        }
    }

    points
}

/// Whether the offset `(dx, dy)` falls inside a disc of `radius`
///
/// Uses `dx² + dy² <= r² + r` so the disc reaches as far as the midpoint
/// outline of the same radius. Evaluated in i64.
pub fn in_disc(dx: i32, dy: i32, radius: i32) -> bool {
    let (dx, dy, r) = (dx as i64, dy as i64, radius as i64);
    dx * dx + dy * dy <= r * r + r
}

/// Every pixel of a filled disc
pub fn disc_points(center: PixelPoint, radius: i32) -> Vec<PixelPoint> {
    let mut points = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if in_disc(dx, dy, radius) {
                points.push(PixelPoint::new(center.x + dx, center.y + dy));
            }
        }
    }
    points
}
