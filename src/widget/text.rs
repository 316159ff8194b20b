//! Text viewport: shows a window onto a larger text, shifted by scroll
//! position reports.

use super::Widget;
use crate::color::Color;
use crate::event::{Axis, Event, ScrollEvent, ScrollPosition};
use crate::layout::{Rect, Rectangle};
use crate::render::RenderBackend;
use crate::window::{WindowId, WindowTree};

/// Scrollable text leaf.
///
/// The viewport offset is where the window's top-left corner sits in the
/// text. A position report on an axis sets that axis' offset to
/// `position * span`, so the span is the largest offset a report can
/// produce (content size minus viewport size, for a full scroll).
#[derive(Debug, Clone, Default)]
pub struct TextWindow {
    /// Geometry and colors.
    pub rectangle: Rectangle,
    text: String,
    view_x: i32,
    view_y: i32,
    span_x: i32,
    span_y: i32,
}

impl TextWindow {
    /// An empty viewport with the given bounds.
    pub const fn new(rect: Rect) -> Self {
        Self {
            rectangle: Rectangle::new(rect),
            text: String::new(),
            view_x: 0,
            view_y: 0,
            span_x: 0,
            span_y: 0,
        }
    }

    /// Replace the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Jump to an offset directly.
    pub const fn set_viewport_position(&mut self, x: i32, y: i32) {
        self.view_x = x;
        self.view_y = y;
    }

    /// Current offset into the text.
    pub const fn viewport_position(&self) -> (i32, i32) {
        (self.view_x, self.view_y)
    }

    /// Offsets reached at a report position of 1.0.
    pub const fn set_viewport_span(&mut self, x: i32, y: i32) {
        self.span_x = x;
        self.span_y = y;
    }

    /// Offsets reached at a report position of 1.0.
    pub const fn viewport_span(&self) -> (i32, i32) {
        (self.span_x, self.span_y)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn scroll_to(&mut self, report: ScrollPosition) {
        match report.axis {
            Axis::Horizontal => self.view_x = (report.position * self.span_x as f32) as i32,
            Axis::Vertical => self.view_y = (report.position * self.span_y as f32) as i32,
        }
    }

    /// Background and text go through an off-screen surface of the
    /// window's size so the text is clipped to it; the outline is drawn on
    /// top afterwards.
    pub(crate) fn draw(&self, backend: &mut dyn RenderBackend) {
        let r = &self.rectangle;
        let (width, height) = (r.width(), r.height());

        backend.init_off_screen(width, height);
        backend.draw_rect(0, 0, width, height, r.fill, Color::TRANSPARENT, 0.0);
        backend.draw_text(
            self.view_x.saturating_neg(),
            self.view_y.saturating_neg(),
            &self.text,
        );
        backend.flush_off_screen(r.rect.x, r.rect.y);
        backend.draw_rect(
            r.rect.x,
            r.rect.y,
            width,
            height,
            Color::TRANSPARENT,
            r.outline,
            r.thickness,
        );
    }
}

pub(crate) fn handle_event(tree: &mut WindowTree, id: WindowId, ev: &Event) {
    let Event::Scroll(ScrollEvent::Position(report)) = ev else {
        return;
    };
    if let Some(Widget::Text(text)) = tree.widget_mut(id) {
        text.scroll_to(*report);
        tracing::trace!(?id, view = ?text.viewport_position(), "viewport moved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ScrollStep;
    use crate::render::{Canvas, DrawCommand, Recorder};

    fn report(axis: Axis, position: f32) -> Event {
        Event::Scroll(ScrollEvent::Position(ScrollPosition { axis, position }))
    }

    #[test]
    fn test_reports_scale_by_span() {
        let mut tree = WindowTree::new();
        let mut text = TextWindow::new(Rect::new(0, 0, 10, 5));
        text.set_viewport_span(40, 20);
        let id = tree.insert(text);

        tree.process_event(id, &report(Axis::Horizontal, 0.5));
        tree.process_event(id, &report(Axis::Vertical, 0.25));
        let view = tree.widget(id).and_then(Widget::as_text).unwrap();
        assert_eq!(view.viewport_position(), (20, 5));

        tree.process_event(id, &report(Axis::Vertical, 1.0));
        let view = tree.widget(id).and_then(Widget::as_text).unwrap();
        assert_eq!(view.viewport_position(), (20, 20));
    }

    #[test]
    fn test_steps_and_mouse_are_ignored() {
        let mut tree = WindowTree::new();
        let mut text = TextWindow::new(Rect::new(0, 0, 10, 5));
        text.set_viewport_position(3, 4);
        let id = tree.insert(text);

        tree.process_event(id, &Event::step(ScrollStep::Down));
        tree.handle_event(id, &Event::press(1, 1));
        let view = tree.widget(id).and_then(Widget::as_text).unwrap();
        assert_eq!(view.viewport_position(), (3, 4));
    }

    #[test]
    fn test_draw_sequence() {
        let mut text = TextWindow::new(Rect::new(4, 6, 10, 3));
        text.set_text("abc");
        text.set_viewport_position(1, 2);
        text.rectangle.set_outline_color(Color::WHITE);
        text.rectangle.set_thickness(1.0);

        let mut recorder = Recorder::new();
        text.draw(&mut recorder);
        let cmds = recorder.take();

        assert_eq!(
            cmds[0],
            DrawCommand::InitOffScreen {
                width: 10,
                height: 3
            }
        );
        assert!(matches!(cmds[1], DrawCommand::Rect { x: 0, y: 0, .. }));
        assert_eq!(
            cmds[2],
            DrawCommand::Text {
                x: -1,
                y: -2,
                text: "abc".to_string()
            }
        );
        assert_eq!(cmds[3], DrawCommand::FlushOffScreen { x: 4, y: 6 });
        assert!(matches!(
            cmds[4],
            DrawCommand::Rect {
                x: 4,
                y: 6,
                outline: Color::WHITE,
                ..
            }
        ));
    }

    #[test]
    fn test_canvas_shows_scrolled_window() {
        let mut text = TextWindow::new(Rect::new(1, 0, 4, 2));
        text.set_text("hello\nworld");
        text.set_viewport_position(1, 0);

        let mut canvas = Canvas::new(6, 2);
        text.draw(&mut canvas);
        assert_eq!(canvas.row_text(0), " ello ");
        assert_eq!(canvas.row_text(1), " orld ");
    }
}
