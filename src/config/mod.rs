use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{Coordinate, Ring};
use crate::error::MapError;
use crate::geometry::Projector;

/// Survey constants for Black Rock City, 2019.
///
/// Road radii are measured from the Man to the center of each road.
/// The outer road is quoted as 11,370' in diameter, which would put L at
/// 5,685'; 5,680' is kept to match the published per-road table.
pub mod survey {
    use crate::domain::Coordinate;

    pub const MAN: Coordinate = Coordinate::new(40.78598, -119.20584);

    /// Fence posts, clockwise from the bottom left
    pub const FENCE_POSTS: [Coordinate; 5] = [
        Coordinate::new(40.78236, -119.23530),
        Coordinate::new(40.80570, -119.21965),
        Coordinate::new(40.80163, -119.18533), // directly above the Man
        Coordinate::new(40.77568, -119.17971),
        Coordinate::new(40.76373, -119.21050),
    ];

    /// Index in `FENCE_POSTS` of the post the map rotation is taken from
    pub const TOP_FENCE_POST: usize = 2;

    /// Rounded average distance from the Man to each fence post, in feet
    pub const FENCE_DISTANCE: f64 = 8155.0;

    /// Earth radius at the Man's latitude and 3,904' elevation, in feet
    pub const EARTH_RADIUS_FT: f64 = 6369056.0 * 3.2808;

    pub const ROADS: [(&str, f64); 13] = [
        ("Esplanade", 2500.0),
        ("A", 2940.0),
        ("B", 3230.0),
        ("C", 3520.0),
        ("D", 3810.0),
        ("E", 4100.0),
        ("F", 4340.0),
        ("G", 4580.0),
        ("H", 4820.0),
        ("I", 5060.0),
        ("J", 5300.0),
        ("K", 5490.0),
        ("L", 5680.0),
    ];

    pub const CENTER_CAMP_DISTANCE: f64 = 3026.0;
    /// Radius to the center of Rod's Road
    pub const CENTER_CAMP_RADIUS: f64 = 783.0;
}

fn default_image_path() -> PathBuf {
    PathBuf::from("map.png")
}
fn default_array_name() -> String {
    "bm_map".to_string()
}
fn default_title() -> String {
    "Burning Man map".to_string()
}

/// Where the bitmap goes and how the emitted header names it
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_image_path")]
    pub image_path: PathBuf,
    #[serde(default = "default_array_name")]
    pub array_name: String,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_path: default_image_path(),
            array_name: default_array_name(),
            title: default_title(),
        }
    }
}

/// The round plaza drawn over the rings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlazaConfig {
    /// Clock position seen from the origin
    pub hour: f64,
    /// Distance from the origin in feet
    pub distance: f64,
    /// Radius in feet
    pub radius: f64,
}

impl Default for PlazaConfig {
    fn default() -> Self {
        Self {
            hour: 6.0,
            distance: survey::CENTER_CAMP_DISTANCE,
            radius: survey::CENTER_CAMP_RADIUS,
        }
    }
}

/// Angular extent and spacing of the drawn features
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rings are drawn as arcs from this clock hour...
    pub arc_start_hour: f64,
    /// ...to this one, sweeping through 6 o'clock
    pub arc_end_hour: f64,
    /// Draw one ring out of every `ring_step`
    pub ring_step: usize,
    pub radial_start_hour: f64,
    pub radial_end_hour: f64,
    pub radial_step_hours: f64,
    /// Clock position of the temple on the innermost ring
    pub temple_hour: f64,
    /// Radius in pixels of the man and temple markers
    pub landmark_radius: i32,
    /// Pixel spacing of the cardinal tick dots
    pub tick_spacing: i32,
    /// Ticks stop this many pixels short of the innermost ring
    pub tick_margin: i32,
    pub fence_sides: usize,
    /// Bearing of the first fence vertex, in degrees
    pub fence_rotation: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            arc_start_hour: 2.0,
            arc_end_hour: 10.0,
            ring_step: 2,
            radial_start_hour: 2.0,
            radial_end_hour: 10.0,
            radial_step_hours: 0.5,
            temple_hour: 12.0,
            landmark_radius: 1,
            tick_spacing: 4,
            tick_margin: 2,
            fence_sides: 5,
            fence_rotation: -18.0,
        }
    }
}

/// Everything a run needs, built once and passed by reference
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub origin: Coordinate,
    pub fence_posts: Vec<Coordinate>,
    /// Index into `fence_posts` of the post used for the rotation constant
    pub reference_post: usize,
    /// Fence radius in feet
    pub fence_distance: f64,
    pub earth_radius_ft: f64,
    /// Width the scale is computed from; odd so the origin sits on a pixel
    pub map_width: u32,
    pub canvas_height: u32,
    /// Innermost first, strictly increasing radius
    pub rings: Vec<Ring>,
    pub plaza: PlazaConfig,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            origin: survey::MAN,
            fence_posts: survey::FENCE_POSTS.to_vec(),
            reference_post: survey::TOP_FENCE_POST,
            fence_distance: survey::FENCE_DISTANCE,
            earth_radius_ft: survey::EARTH_RADIUS_FT,
            map_width: 129,
            canvas_height: 200,
            rings: survey::ROADS
                .iter()
                .map(|&(name, radius)| Ring::new(name, radius))
                .collect(),
            plaza: PlazaConfig::default(),
            layout: LayoutConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl MapConfig {
    /// Load from an explicit file, or search the usual places and fall back
    /// to the built-in survey. The result is validated either way.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {:?}", path);
                }
                Self::from_file(path)?
            }
            None => Self::search().unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// First parseable file wins: the working directory (`polarmap.toml`,
    /// then the hidden `.polarmap.toml`), then the user config directory.
    fn search() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    pub fn validate(&self) -> Result<(), MapError> {
        let invalid = |msg: String| -> Result<(), MapError> { Err(MapError::InvalidConfig(msg)) };

        if self.map_width < 2 {
            return invalid(format!("map_width must be at least 2, got {}", self.map_width));
        }
        if self.canvas_height == 0 {
            return invalid("canvas_height must be positive".to_string());
        }
        if self.rings.is_empty() {
            return invalid("at least one ring is required".to_string());
        }
        if self.rings[0].radius <= 0.0 {
            return invalid(format!("ring {} has a non-positive radius", self.rings[0].name));
        }
        if let Some(pair) = self.rings.windows(2).find(|w| w[1].radius <= w[0].radius) {
            return invalid(format!(
                "ring radii must increase outward: {} ({}) is not beyond {} ({})",
                pair[1].name, pair[1].radius, pair[0].name, pair[0].radius
            ));
        }
        if self.reference_post >= self.fence_posts.len() {
            return invalid(format!(
                "reference_post {} is out of range for {} fence posts",
                self.reference_post,
                self.fence_posts.len()
            ));
        }
        if self.layout.fence_sides < 3 {
            return invalid(format!(
                "fence needs at least 3 sides, got {}",
                self.layout.fence_sides
            ));
        }
        if self.layout.ring_step == 0 {
            return invalid("ring_step must be positive".to_string());
        }
        if self.layout.radial_step_hours <= 0.0 {
            return invalid("radial_step_hours must be positive".to_string());
        }
        if self.layout.tick_spacing <= 0 {
            return invalid("tick_spacing must be positive".to_string());
        }

        // Discs are filled pixel by pixel, so cap them at the canvas diagonal
        let diagonal = (self.canvas_width() as f64).hypot(self.canvas_height as f64);
        if self.plaza.radius.is_nan() || self.plaza.radius < 0.0 {
            return invalid(format!(
                "plaza radius must be non-negative, got {}",
                self.plaza.radius
            ));
        }
        let feet_per_pixel = Projector::from_config(self).feet_per_pixel();
        let plaza_px = (self.plaza.radius / feet_per_pixel).round_ties_even();
        if plaza_px > diagonal {
            return invalid(format!(
                "plaza radius {} ft ({} px) exceeds the canvas diagonal ({:.0} px)",
                self.plaza.radius, plaza_px, diagonal
            ));
        }
        let landmark = self.layout.landmark_radius;
        if landmark < 0 || landmark as f64 > diagonal {
            return invalid(format!(
                "landmark_radius must be between 0 and {:.0} px, got {}",
                diagonal, landmark
            ));
        }
        Ok(())
    }

    /// Pixel width of the drawn canvas: one less than the scale width so
    /// rows pack into whole bytes while the origin stays centered.
    pub fn canvas_width(&self) -> u32 {
        self.map_width - 1
    }

    pub fn innermost_ring(&self) -> &Ring {
        &self.rings[0]
    }

    pub fn outermost_ring(&self) -> &Ring {
        &self.rings[self.rings.len() - 1]
    }

    pub fn reference_post(&self) -> Coordinate {
        self.fence_posts[self.reference_post]
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polarmap.toml"));
    paths.push(PathBuf::from(".polarmap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polarmap").join("config.toml"));
        paths.push(config_dir.join("polarmap.toml"));
    }

    paths
}
