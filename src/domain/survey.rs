use serde::Deserialize;
use std::fmt;

/// A GPS position in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in millionths of a degree, truncated toward zero
    pub fn lat_micro(&self) -> i64 {
        (self.lat * 1e6) as i64
    }

    /// Longitude in millionths of a degree, truncated toward zero
    pub fn lon_micro(&self) -> i64 {
        (self.lon * 1e6) as i64
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.lon, c.lat)
    }
}

/// A circular road around the origin
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ring {
    pub name: String,
    /// Distance from the origin to the center of the road, in feet
    pub radius: f64,
}

impl Ring {
    pub fn new(name: impl Into<String>, radius: f64) -> Self {
        Self {
            name: name.into(),
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_degrees_truncate() {
        let man = Coordinate::new(40.78598, -119.20584);
        assert_eq!(man.lat_micro(), 40785980);
        assert_eq!(man.lon_micro(), -119205840);
    }

    #[test]
    fn test_into_geo_point_swaps_axes() {
        let p: geo::Point<f64> = Coordinate::new(1.5, -2.5).into();
        assert_eq!(p.x(), -2.5);
        assert_eq!(p.y(), 1.5);
    }
}
