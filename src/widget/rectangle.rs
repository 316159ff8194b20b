//! Passive rectangle leaf.

use crate::color::Color;
use crate::layout::{Rect, Rectangle};
use crate::render::RenderBackend;

/// A rectangle that draws itself and ignores input.
#[derive(Debug, Clone, Default)]
pub struct RectangleWindow {
    /// Geometry and colors.
    pub rectangle: Rectangle,
}

impl RectangleWindow {
    /// Create a rectangle with the given bounds.
    pub const fn new(rect: Rect) -> Self {
        Self {
            rectangle: Rectangle::new(rect),
        }
    }

    /// Set the fill color.
    #[must_use]
    pub const fn with_fill(mut self, color: Color) -> Self {
        self.rectangle.fill = color;
        self
    }

    pub(crate) fn draw(&self, backend: &mut dyn RenderBackend) {
        draw_rectangle(&self.rectangle, backend);
    }
}

/// Issue the one `draw_rect` call every rect-based leaf draws with.
pub(crate) fn draw_rectangle(r: &Rectangle, backend: &mut dyn RenderBackend) {
    backend.draw_rect(
        r.rect.x,
        r.rect.y,
        r.rect.width,
        r.rect.height,
        r.fill,
        r.outline,
        r.thickness,
    );
}
