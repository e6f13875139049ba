pub mod canvas;
pub mod circle;
pub mod command;
pub mod line;

pub use canvas::{Canvas, Ink};
pub use circle::{arc_points, circle_points, disc_points, in_disc, in_sweep};
pub use command::{DrawCommand, Shape};
pub use line::line_points;
