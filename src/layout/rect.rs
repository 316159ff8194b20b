//! Rect: the geometry primitive used for hit-testing and drawing.

use crate::color::Color;

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Right edge.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Bottom edge.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Both far edges are inclusive, so a zero-sized rect still contains its
    /// own origin.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// Rectangle state shared by every rect-based widget.
///
/// `thickness` is the outline width. When positive it also grows the hit-test
/// bounds by that amount on every side, which makes thin widgets easier to
/// grab. Zero or negative thickness means "no outline".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// Position and size.
    pub rect: Rect,
    /// Outline thickness.
    pub thickness: f32,
    /// Current fill color.
    pub fill: Color,
    /// Outline color.
    pub outline: Color,
}

impl Rectangle {
    /// Create a rectangle with no outline and transparent colors.
    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            thickness: 0.0,
            fill: Color::TRANSPARENT,
            outline: Color::TRANSPARENT,
        }
    }

    /// Move the top-left corner.
    pub const fn set_position(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Resize.
    pub const fn set_size(&mut self, width: u32, height: u32) {
        self.rect.width = width;
        self.rect.height = height;
    }

    /// Set outline thickness.
    pub const fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
    }

    /// Set the fill color.
    pub const fn set_background_color(&mut self, color: Color) {
        self.fill = color;
    }

    /// Set the outline color.
    pub const fn set_outline_color(&mut self, color: Color) {
        self.outline = color;
    }

    /// Width.
    pub const fn width(&self) -> u32 {
        self.rect.width
    }

    /// Height.
    pub const fn height(&self) -> u32 {
        self.rect.height
    }

    /// Hit-test against the thickness-expanded bounds.
    #[allow(clippy::cast_precision_loss)]
    pub fn is_inside_rect(&self, x: i32, y: i32) -> bool {
        if self.thickness <= 0.0 {
            return self.rect.contains(x, y);
        }

        let t = self.thickness;
        let (px, py) = (x as f32, y as f32);
        px >= self.rect.x as f32 - t
            && py >= self.rect.y as f32 - t
            && px <= self.rect.right() as f32 + t
            && py <= self.rect.bottom() as f32 + t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_inclusive_edges() {
        let r = Rect::new(10, 20, 5, 5);
        assert!(r.contains(10, 20));
        assert!(r.contains(15, 25));
        assert!(!r.contains(9, 20));
        assert!(!r.contains(16, 20));
        assert!(!r.contains(10, 26));
    }

    #[test]
    fn test_thickness_expands_hit_region() {
        let mut r = Rectangle::new(Rect::new(10, 10, 10, 10));
        assert!(!r.is_inside_rect(8, 8));

        r.set_thickness(2.0);
        assert!(r.is_inside_rect(8, 8));
        assert!(r.is_inside_rect(22, 22));
        assert!(!r.is_inside_rect(23, 15));
    }

    #[test]
    fn test_negative_thickness_is_plain_bounds() {
        let mut r = Rectangle::new(Rect::new(0, 0, 4, 4));
        r.set_thickness(-1.0);
        assert!(r.is_inside_rect(4, 4));
        assert!(!r.is_inside_rect(5, 4));
        assert!(!r.is_inside_rect(-1, 0));
    }

    #[test]
    fn test_rectangle_setters() {
        let mut r = Rectangle::default();
        r.set_position(3, 4);
        r.set_size(7, 8);
        assert_eq!(r.rect, Rect::new(3, 4, 7, 8));
        assert_eq!((r.width(), r.height()), (7, 8));
    }
}
