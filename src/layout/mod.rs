//! Layout module: geometry primitives for hit-testing and drawing.

mod rect;

pub use rect::{Rect, Rectangle};
