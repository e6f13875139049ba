use crate::domain::Coordinate;

/// Planar distance and direction between two GPS positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarOffset {
    /// Distance in the units of the earth radius
    pub distance: f64,
    /// Angle in radians between the offset and due east, counter-clockwise
    pub bearing: f64,
}

/// Equirectangular approximation with a locally calibrated earth radius
///
/// Over a few miles this agrees with haversine to well under a millimeter,
/// which is why it is only meant for a single small site. No range checks:
/// nonsensical input gives nonsensical output.
#[derive(Debug, Clone, Copy)]
pub struct Geodesy {
    earth_radius: f64,
}

impl Geodesy {
    pub fn new(earth_radius: f64) -> Self {
        Self { earth_radius }
    }

    pub fn offset(&self, from: Coordinate, to: Coordinate) -> PlanarOffset {
        let lat1 = from.lat.to_radians();
        let lat2 = to.lat.to_radians();
        let delta_lon = (to.lon - from.lon).to_radians();

        let x = delta_lon * ((lat1 + lat2) / 2.0).cos();
        let y = lat2 - lat1;

        PlanarOffset {
            distance: x.hypot(y) * self.earth_radius,
            bearing: y.atan2(x),
        }
    }

    pub fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        self.offset(from, to).distance
    }

    pub fn bearing(&self, from: Coordinate, to: Coordinate) -> f64 {
        self.offset(from, to).bearing
    }

    /// Mean distance from `origin` to each of `points`
    pub fn average_distance(&self, origin: Coordinate, points: &[Coordinate]) -> Option<f64> {
        if points.is_empty() {
            return None;
        }
        let total: f64 = points.iter().map(|&p| self.distance(origin, p)).sum();
        Some(total / points.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::survey;
    use geo::{Distance, Haversine};

    fn geodesy() -> Geodesy {
        Geodesy::new(survey::EARTH_RADIUS_FT)
    }

    #[test]
    fn test_same_point_is_zero() {
        let g = geodesy();
        for &p in survey::FENCE_POSTS.iter().chain([survey::MAN].iter()) {
            assert_eq!(g.distance(p, p), 0.0);
        }
    }

    #[test]
    fn test_symmetric_distance() {
        let g = geodesy();
        let a = survey::MAN;
        let b = survey::FENCE_POSTS[0];
        assert!((g.distance(a, b) - g.distance(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_cardinal_bearings() {
        let g = geodesy();
        let o = Coordinate::new(40.0, -119.0);
        let east = g.bearing(o, Coordinate::new(40.0, -118.99));
        let north = g.bearing(o, Coordinate::new(40.01, -119.0));
        assert!(east.abs() < 1e-9);
        assert!((north - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_top_fence_post() {
        let offset = geodesy().offset(survey::MAN, survey::FENCE_POSTS[survey::TOP_FENCE_POST]);
        assert!((offset.distance - 8040.09).abs() < 0.01);
        assert!((offset.bearing - 0.7893299142641715).abs() < 1e-12);
    }

    #[test]
    fn test_average_fence_distance_matches_constant() {
        let avg = geodesy()
            .average_distance(survey::MAN, &survey::FENCE_POSTS)
            .unwrap();
        assert_eq!(avg.round(), survey::FENCE_DISTANCE);
        assert_eq!(geodesy().average_distance(survey::MAN, &[]), None);
    }

    #[test]
    fn test_agrees_with_haversine() {
        // Compare angular distances so the two earth radii cancel out
        const HAVERSINE_RADIUS_M: f64 = 6_371_008.8;
        let g = Geodesy::new(HAVERSINE_RADIUS_M);

        for &post in &survey::FENCE_POSTS {
            let ours = g.distance(survey::MAN, post);
            let from: geo::Point<f64> = survey::MAN.into();
            let to: geo::Point<f64> = post.into();
            let reference = Haversine::distance(from, to);
            assert!(
                (ours - reference).abs() < 0.01,
                "equirectangular {} vs haversine {}",
                ours,
                reference
            );
        }
    }
}
