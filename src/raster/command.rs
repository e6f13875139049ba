use super::canvas::{Canvas, Ink};
use super::circle::disc_points;
use super::line::line_points;
use crate::domain::PixelPoint;

/// Geometry of a single draw
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Arbitrary pixels, e.g. a circle outline or a row of dots
    Points(Vec<PixelPoint>),
    /// One-pixel-wide straight line, endpoints included
    Line(PixelPoint, PixelPoint),
    /// Filled disc of the given pixel radius
    Disc { center: PixelPoint, radius: i32 },
}

/// One step of the scene
///
/// Commands are applied in list order and each one overwrites the pixels it
/// touches, so a later `Clear` erases what came before it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub label: &'static str,
    pub shape: Shape,
    pub ink: Ink,
}

impl DrawCommand {
    pub fn points(label: &'static str, points: impl IntoIterator<Item = PixelPoint>) -> Self {
        Self {
            label,
            shape: Shape::Points(points.into_iter().collect()),
            ink: Ink::Set,
        }
    }

    pub fn line(label: &'static str, from: PixelPoint, to: PixelPoint) -> Self {
        Self {
            label,
            shape: Shape::Line(from, to),
            ink: Ink::Set,
        }
    }

    pub fn disc(label: &'static str, center: PixelPoint, radius: i32, ink: Ink) -> Self {
        Self {
            label,
            shape: Shape::Disc { center, radius },
            ink,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        match &self.shape {
            Shape::Points(points) => canvas.put_all(points.iter().copied(), self.ink),
            Shape::Line(from, to) => canvas.put_all(line_points(*from, *to), self.ink),
            Shape::Disc { center, radius } => {
                canvas.put_all(disc_points(*center, *radius), self.ink)
            }
        }
    }
}

impl Canvas {
    /// Apply `commands` in order
    pub fn apply(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            command.draw(self);
        }
    }
}
