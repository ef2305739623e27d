mod color;
mod edges;
mod enums;

pub use color::{Color, Rgb, StateColors};
pub use edges::Edges;
pub use enums::{Alignment, Constraint, Visual};
