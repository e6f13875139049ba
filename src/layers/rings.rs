use crate::config::MapConfig;
use crate::geometry::{Projector, hour_to_degrees};
use crate::raster::{DrawCommand, arc_points};

/// Arcs for every `ring_step`-th ring, innermost first
pub fn ring_arcs(config: &MapConfig, projector: &Projector) -> Vec<DrawCommand> {
    let start = hour_to_degrees(config.layout.arc_start_hour);
    let end = hour_to_degrees(config.layout.arc_end_hour);

    config
        .rings
        .iter()
        .step_by(config.layout.ring_step)
        .map(|ring| {
            let radius = projector.to_pixels(ring.radius);
            DrawCommand::points("ring", arc_points(projector.center(), radius, start, end))
        })
        .collect()
}

/// Clock hours of the radial streets, both ends included
///
/// A range that ends before it starts has no spokes.
pub fn radial_hours(config: &MapConfig) -> Vec<f64> {
    let layout = &config.layout;
    if layout.radial_end_hour < layout.radial_start_hour {
        return Vec::new();
    }
    let steps = ((layout.radial_end_hour - layout.radial_start_hour) / layout.radial_step_hours)
        .round() as usize;
    (0..=steps)
        .map(|i| layout.radial_start_hour + i as f64 * layout.radial_step_hours)
        .collect()
}

/// Straight spokes from the innermost to the outermost ring
pub fn radial_spokes(config: &MapConfig, projector: &Projector) -> Vec<DrawCommand> {
    let inner = config.innermost_ring().radius;
    let outer = config.outermost_ring().radius;

    radial_hours(config)
        .into_iter()
        .map(|hour| {
            DrawCommand::line(
                "radial",
                projector.clock(hour, inner),
                projector.clock(hour, outer),
            )
        })
        .collect()
}
