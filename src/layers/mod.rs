pub mod fence;
pub mod landmarks;
pub mod rings;

pub use fence::{fence_outline, fence_sides};
pub use landmarks::{cardinal_ticks, markers, plaza};
pub use rings::{radial_spokes, ring_arcs};

use crate::config::MapConfig;
use crate::geometry::Projector;
use crate::raster::{Canvas, DrawCommand};

/// Build the full scene as an ordered list of draw commands
///
/// Order is part of the contract: ring arcs, radial spokes, the plaza
/// (erase then outline), the man and temple markers, cardinal ticks, and
/// finally the fence. Each command overwrites what is under it.
pub fn compose_scene(config: &MapConfig, projector: &Projector) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    commands.extend(ring_arcs(config, projector));
    commands.extend(radial_spokes(config, projector));
    commands.extend(plaza(config, projector));
    commands.extend(markers(config, projector));
    commands.push(cardinal_ticks(config, projector));
    commands.extend(fence_sides(config, projector));
    commands
}

/// Draw the scene onto a fresh canvas sized for `config`
pub fn render(config: &MapConfig, projector: &Projector) -> Canvas {
    let mut canvas = Canvas::new(config.canvas_width(), config.canvas_height);
    canvas.apply(&compose_scene(config, projector));
    canvas
}
