//! Chart rendering onto an abstract [`DrawSurface`] and pointer hit-testing
//! against the geometry of the last draw.

pub mod hit;
pub mod line;
pub mod palette;
pub mod pie;
pub mod surface;

pub use hit::{line_tooltip, pie_tooltip, Tooltip};
pub use line::{draw_line_chart, ChartPoint};
pub use palette::Palette;
pub use pie::{draw_pie_chart, PieGeometry};
pub use surface::{DrawList, DrawSurface, FontWeight, Primitive, Rgb};
