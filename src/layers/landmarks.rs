use crate::config::MapConfig;
use crate::domain::PixelPoint;
use crate::geometry::Projector;
use crate::raster::{DrawCommand, Ink, circle_points};

/// The plaza: a cleared disc so nothing shows through, then its outline
pub fn plaza(config: &MapConfig, projector: &Projector) -> Vec<DrawCommand> {
    let center = projector.clock(config.plaza.hour, config.plaza.distance);
    let radius = projector.to_pixels(config.plaza.radius);

    vec![
        DrawCommand::disc("plaza background", center, radius, Ink::Clear),
        DrawCommand::points("plaza", circle_points(center, radius)),
    ]
}

/// Small circles marking the origin and the temple
pub fn markers(config: &MapConfig, projector: &Projector) -> Vec<DrawCommand> {
    let radius = config.layout.landmark_radius;
    let temple = projector.clock(config.layout.temple_hour, config.innermost_ring().radius);

    vec![
        DrawCommand::points("man", circle_points(projector.center(), radius)),
        DrawCommand::points("temple", circle_points(temple, radius)),
    ]
}

/// Dotted streets from the origin toward 12, 3, 6 and 9 o'clock
///
/// Dots stop `tick_margin` pixels short of the innermost ring.
pub fn cardinal_ticks(config: &MapConfig, projector: &Projector) -> DrawCommand {
    let c = projector.center();
    let reach = projector.to_pixels(config.innermost_ring().radius) - config.layout.tick_margin;
    let spacing = config.layout.tick_spacing as usize;

    let dots = (0..reach).step_by(spacing).flat_map(|i| {
        [
            PixelPoint::new(c.x + i, c.y),
            PixelPoint::new(c.x - i, c.y),
            PixelPoint::new(c.x, c.y + i),
            PixelPoint::new(c.x, c.y - i),
        ]
    });

    DrawCommand::points("ticks", dots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Shape;

    fn setup() -> (MapConfig, Projector) {
        let config = MapConfig::default();
        let projector = Projector::from_config(&config);
        (config, projector)
    }

    #[test]
    fn test_plaza_clears_before_outline() {
        let (config, projector) = setup();
        let commands = plaza(&config, &projector);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].ink, Ink::Clear);
        assert_eq!(commands[1].ink, Ink::Set);

        // 3026 ft straight down is 34 px, radius 783 ft is 9 px
        let c = projector.center();
        assert_eq!(
            commands[0].shape,
            Shape::Disc {
                center: PixelPoint::new(c.x, c.y + 34),
                radius: 9
            }
        );
    }

    #[test]
    fn test_markers() {
        let (config, projector) = setup();
        let c = projector.center();
        let commands = markers(&config, &projector);

        let Shape::Points(man) = &commands[0].shape else {
            panic!("man should be a point set");
        };
        assert_eq!(man.len(), 4);
        assert!(man.contains(&PixelPoint::new(c.x + 1, c.y)));

        let Shape::Points(temple) = &commands[1].shape else {
            panic!("temple should be a point set");
        };
        assert!(temple.contains(&PixelPoint::new(c.x, c.y - 28 - 1)));
    }

    #[test]
    fn test_cardinal_ticks() {
        let (config, projector) = setup();
        let c = projector.center();
        let Shape::Points(dots) = cardinal_ticks(&config, &projector).shape else {
            panic!("ticks should be a point set");
        };
        // Offsets 0, 4, ..., 24 (the Esplanade is 28 px out), four per offset
        assert_eq!(dots.len(), 7 * 4);
        assert!(dots.contains(&PixelPoint::new(c.x + 24, c.y)));
        assert!(dots.contains(&PixelPoint::new(c.x, c.y - 24)));
        assert!(!dots.contains(&PixelPoint::new(c.x + 28, c.y)));
    }
}
