mod flow;
mod pool;
mod rect;

pub use flow::{FlowLayout, Line};
pub use pool::BoundsPool;
pub use rect::{Rect, Size};
