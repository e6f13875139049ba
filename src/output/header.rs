use std::fmt;

use super::pack::PackedBitmap;
use crate::config::MapConfig;
use crate::domain::{Coordinate, PixelPoint};
use crate::geometry::{Geodesy, Projector};

/// Constants and byte array pasted into the receiver firmware
///
/// The `Display` output is a C snippet; the macro names are what the
/// firmware expects.
#[derive(Debug, Clone)]
pub struct FirmwareHeader<'a> {
    /// Bearing in radians from the origin to the reference fence post
    pub reference_bearing: f64,
    pub feet_per_pixel: f64,
    /// Origin in trimmed-bitmap pixels
    pub origin_px: PixelPoint,
    pub origin: Coordinate,
    pub array_name: &'a str,
    pub title: &'a str,
    pub bitmap: &'a PackedBitmap,
}

impl<'a> FirmwareHeader<'a> {
    pub fn new(
        config: &'a MapConfig,
        projector: &Projector,
        geodesy: &Geodesy,
        bitmap: &'a PackedBitmap,
    ) -> Self {
        let center = projector.center();
        Self {
            reference_bearing: geodesy.bearing(config.origin, config.reference_post()),
            feet_per_pixel: projector.feet_per_pixel(),
            origin_px: PixelPoint::new(center.x, center.y - bitmap.trimmed_top() as i32),
            origin: config.origin,
            array_name: &config.output.array_name,
            title: &config.output.title,
            bitmap,
        }
    }
}

impl fmt::Display for FirmwareHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#define MAP_ANGLE      (HALF_PI - {})", self.reference_bearing)?;
        writeln!(f, "#define FEET_PER_PIXEL {}", self.feet_per_pixel)?;
        writeln!(
            f,
            "#define MAN_X          {}  // Coordinates of the Man in the map, in pixels",
            self.origin_px.x
        )?;
        writeln!(f, "#define MAN_Y          {}", self.origin_px.y)?;
        writeln!(
            f,
            "#define MAN_LAT        {}  // Man coordinates in millionth of degrees",
            self.origin.lat_micro()
        )?;
        writeln!(
            f,
            "#define MAN_LON      {}  // {} degrees",
            self.origin.lon_micro(),
            self.origin.lon
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "// {}, {}x{}px",
            self.title,
            self.bitmap.width(),
            self.bitmap.height()
        )?;
        writeln!(f, "const unsigned char {}[] PROGMEM = {{", self.array_name)?;

        let rows: Vec<String> = self
            .bitmap
            .rows()
            .map(|row| {
                row.iter()
                    .map(|b| format!("0x{:02x}", b))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect();
        if !rows.is_empty() {
            writeln!(f, "    {}", rows.join(",\n    "))?;
        }
        write!(f, "}};")
    }
}
