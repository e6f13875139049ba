use geo::{Coord, LineString};

use crate::config::MapConfig;
use crate::geometry::Projector;
use crate::raster::DrawCommand;

/// Closed perimeter polygon through evenly spaced bearings
pub fn fence_outline(config: &MapConfig, projector: &Projector) -> LineString<i32> {
    let sides = config.layout.fence_sides;
    let step = 360.0 / sides as f64;

    let vertices: Vec<Coord<i32>> = (0..sides)
        .map(|i| {
            let bearing = i as f64 * step + config.layout.fence_rotation;
            projector.polar(bearing, config.fence_distance).into()
        })
        .collect();

    let mut outline = LineString::new(vertices);
    outline.close();
    outline
}

/// One line per fence side
pub fn fence_sides(config: &MapConfig, projector: &Projector) -> Vec<DrawCommand> {
    fence_outline(config, projector)
        .lines()
        .map(|side| DrawCommand::line("fence", side.start.into(), side.end.into()))
        .collect()
}
