use crate::config::MapConfig;
use crate::domain::PixelPoint;

/// Convert a clock hour to a bearing in degrees
///
/// 3 o'clock is 0° and angles grow clockwise on screen (y points down),
/// so 6 o'clock is 90° and 12 o'clock is -90°.
pub fn hour_to_degrees(hour: f64) -> f64 {
    (hour - 3.0) / 12.0 * 360.0
}

/// Polar projection from (bearing, feet) around the origin to canvas pixels
///
/// The scale is fixed at construction: the outermost ring's diameter spans
/// the map width.
#[derive(Debug, Clone)]
pub struct Projector {
    center: PixelPoint,
    feet_per_pixel: f64,
}

impl Projector {
    /// Create a projector for a `map_width` x `canvas_height` map
    ///
    /// # Arguments
    /// * `outer_radius` - radius in feet that maps to half the map width
    pub fn new(map_width: u32, canvas_height: u32, outer_radius: f64) -> Self {
        Self {
            center: PixelPoint::new((map_width / 2) as i32, (canvas_height / 2) as i32),
            feet_per_pixel: 2.0 * outer_radius / map_width as f64,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(
            config.map_width,
            config.canvas_height,
            config.outermost_ring().radius,
        )
    }

    pub fn feet_per_pixel(&self) -> f64 {
        self.feet_per_pixel
    }

    /// Pixel position of the origin
    pub fn center(&self) -> PixelPoint {
        self.center
    }

    /// Convert a distance in feet to a whole number of pixels
    pub fn to_pixels(&self, feet: f64) -> i32 {
        (feet / self.feet_per_pixel).round_ties_even() as i32
    }

    /// Project a point given by bearing (degrees) and distance (feet)
    ///
    /// The distance is rounded to pixels first and each axis is rounded on
    /// its own, so nearby bearings are not guaranteed to be collinear.
    pub fn polar(&self, bearing: f64, feet: f64) -> PixelPoint {
        let d = self.to_pixels(feet) as f64;
        // Reduce first so a full turn lands on the same sin/cos, even at .5 ties
        let a = bearing.rem_euclid(360.0).to_radians();
        PixelPoint::new(
            (d * a.cos()).round_ties_even() as i32 + self.center.x,
            (d * a.sin()).round_ties_even() as i32 + self.center.y,
        )
    }

    /// Same as [`Projector::polar`] with the bearing given as a clock hour
    pub fn clock(&self, hour: f64, feet: f64) -> PixelPoint {
        self.polar(hour_to_degrees(hour), feet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> Projector {
        Projector::new(129, 200, 5680.0)
    }

    #[test]
    fn test_feet_per_pixel() {
        let proj = projector();
        assert!((proj.feet_per_pixel() - 2.0 * 5680.0 / 129.0).abs() < 1e-12);
        assert!((proj.feet_per_pixel() - 88.06).abs() < 0.01);
        assert_eq!(proj.to_pixels(proj.feet_per_pixel()), 1);
    }

    #[test]
    fn test_to_pixels() {
        let proj = projector();
        assert_eq!(proj.to_pixels(0.0), 0);
        assert_eq!(proj.to_pixels(2500.0), 28);
        assert_eq!(proj.to_pixels(783.0), 9);
        assert_eq!(proj.to_pixels(5680.0), 64);
    }

    #[test]
    fn test_center() {
        assert_eq!(projector().center(), PixelPoint::new(64, 100));
    }

    #[test]
    fn test_hour_to_degrees() {
        assert_eq!(hour_to_degrees(3.0), 0.0);
        assert_eq!(hour_to_degrees(6.0), 90.0);
        assert_eq!(hour_to_degrees(12.0), 270.0);
        assert_eq!(hour_to_degrees(0.0), -90.0);
        assert_eq!(hour_to_degrees(2.0), -30.0);
        assert_eq!(hour_to_degrees(10.0), 210.0);
    }

    #[test]
    fn test_polar_axes() {
        let proj = projector();
        let c = proj.center();
        assert_eq!(proj.polar(0.0, 2500.0), PixelPoint::new(c.x + 28, c.y));
        assert_eq!(proj.polar(90.0, 2500.0), PixelPoint::new(c.x, c.y + 28));
        assert_eq!(proj.polar(180.0, 2500.0), PixelPoint::new(c.x - 28, c.y));
        assert_eq!(proj.clock(12.0, 2500.0), PixelPoint::new(c.x, c.y - 28));
    }

    #[test]
    fn test_full_turn_is_identity() {
        let proj = projector();
        for bearing in [-90.0, -30.0, 0.0, 17.0, 45.0, 97.5, 135.0, 210.0, 333.0] {
            for feet in [783.0, 2500.0, 3026.0, 5680.0, 8155.0] {
                assert_eq!(
                    proj.polar(bearing, feet),
                    proj.polar(bearing + 360.0, feet),
                    "bearing {} at {} ft",
                    bearing,
                    feet
                );
            }
        }
    }

    #[test]
    fn test_origin_distance() {
        let proj = projector();
        assert_eq!(proj.polar(123.0, 0.0), proj.center());
    }

    #[test]
    fn test_negative_bearing_at_half_pixel_tie() {
        // 783 ft is 9 px, and 9 * sin(-30°) sits exactly on -4.5
        let proj = projector();
        assert_eq!(proj.polar(-30.0, 783.0), proj.polar(330.0, 783.0));
        assert_eq!(proj.polar(-30.0, 783.0), proj.polar(690.0, 783.0));
    }
}
