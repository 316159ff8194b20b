//! Slider: a draggable, step-adjustable button confined to one axis.
//!
//! Dragging is relative: on press the slider records where the pointer
//! grabbed it, and every later move offsets the slider by the pointer's
//! delta from that point. After any adjustment the position along the
//! active axis is clamped to `[pivot, pivot + limit]`.

use super::button::{ButtonSignals, RectangleButton};
use super::Widget;
use crate::event::{Axis, Event, ScrollEvent, ScrollStep};
use crate::layout::Rect;
use crate::render::RenderBackend;
use crate::window::{WindowId, WindowTree};

/// A button that slides along one axis.
#[derive(Debug, Clone)]
pub struct Slider {
    button: RectangleButton,
    axis: Axis,
    pivot: i32,
    limit: i32,
    line_step: i32,
    stroke_start: i32,
    movement_start: i32,
}

impl Slider {
    /// Create a slider at the origin with no travel.
    pub const fn new(axis: Axis, line_step: i32) -> Self {
        Self {
            button: RectangleButton::new(Rect::ZERO),
            axis,
            pivot: 0,
            limit: 0,
            line_step,
            stroke_start: 0,
            movement_start: 0,
        }
    }

    /// Active axis.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Fixed origin of travel along the active axis.
    pub const fn pivot(&self) -> i32 {
        self.pivot
    }

    /// Maximum travel from the pivot.
    pub const fn limit(&self) -> i32 {
        self.limit
    }

    /// Geometry, colors and interaction state.
    pub const fn button(&self) -> &RectangleButton {
        &self.button
    }

    /// Mutable access for colors and thickness. Prefer
    /// [`set_position`](Self::set_position) for moving the slider.
    pub fn button_mut(&mut self) -> &mut RectangleButton {
        &mut self.button
    }

    /// Move the slider and pin the pivot to the new position.
    pub const fn set_position(&mut self, x: i32, y: i32) {
        self.button.rectangle.set_position(x, y);
        self.pivot = self.axis.along(x, y);
    }

    /// Resize the slider's footprint.
    pub const fn set_size(&mut self, width: u32, height: u32) {
        self.button.rectangle.set_size(width, height);
    }

    /// Set the maximum travel. Negative limits are treated as zero.
    pub fn set_limit(&mut self, limit: i32) {
        self.limit = limit.max(0);
        self.clamp();
    }

    /// Position along the active axis.
    pub const fn position_along_axis(&self) -> i32 {
        let rect = self.button.rectangle.rect;
        self.axis.along(rect.x, rect.y)
    }

    /// Footprint along the active axis.
    pub fn size_along_axis(&self) -> i32 {
        let rect = self.button.rectangle.rect;
        let size = match self.axis {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        };
        i32::try_from(size).unwrap_or(i32::MAX)
    }

    /// Hit-test.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        self.button.is_inside(x, y)
    }

    /// Fraction of travel covered: 0.0 at the pivot, 1.0 at
    /// `pivot + limit`, and 0.0 when there is no travel.
    #[allow(clippy::cast_precision_loss)]
    pub fn normalized_position(&self) -> f32 {
        if self.limit <= 0 {
            return 0.0;
        }
        (self.position_along_axis() - self.pivot) as f32 / self.limit as f32
    }

    /// Apply one event. Returns `false` for events a slider never reacts
    /// to (position reports), so no notification follows them.
    pub(crate) fn apply(&mut self, ev: &Event) -> bool {
        match ev {
            Event::MousePress(_) | Event::MouseRelease(_) | Event::MouseMove(_) => {
                self.drag(ev);
            }
            Event::Scroll(ScrollEvent::Step(step)) => {
                let delta = match step {
                    ScrollStep::Up => -self.line_step,
                    ScrollStep::Down => self.line_step,
                    ScrollStep::PageUp => -self.size_along_axis(),
                    ScrollStep::PageDown => self.size_along_axis(),
                };
                self.set_position_along_axis(self.position_along_axis().saturating_add(delta));
            }
            Event::Scroll(ScrollEvent::SliderMoved) => {}
            Event::Scroll(ScrollEvent::Position(_)) => return false,
        }

        self.clamp();
        self.button.refresh_fill();
        true
    }

    fn drag(&mut self, ev: &Event) {
        let Some(mouse) = ev.mouse() else {
            return;
        };
        let signals = self.button.update(ev);
        let coord = self.axis.along(mouse.x, mouse.y);

        if signals.contains(ButtonSignals::PRESS) {
            self.stroke_start = coord;
            self.movement_start = self.position_along_axis();
        }
        if signals.contains(ButtonSignals::MOVE) && self.button.state().is_pressed() {
            let target = self
                .movement_start
                .saturating_add(coord.saturating_sub(self.stroke_start));
            self.set_position_along_axis(target);
        }
    }

    const fn set_position_along_axis(&mut self, value: i32) {
        match self.axis {
            Axis::Horizontal => self.button.rectangle.rect.x = value,
            Axis::Vertical => self.button.rectangle.rect.y = value,
        }
    }

    fn clamp(&mut self) {
        let max = self.pivot.saturating_add(self.limit);
        let clamped = self.position_along_axis().max(self.pivot).min(max);
        self.set_position_along_axis(clamped);
    }

    pub(crate) fn draw(&self, backend: &mut dyn RenderBackend) {
        self.button.draw(backend);
    }
}

/// Apply the event, then tell the parent scrollbar the slider changed.
pub(crate) fn handle_event(tree: &mut WindowTree, id: WindowId, ev: &Event) {
    let Some(node) = tree.node_mut(id) else {
        return;
    };
    let parent = node.parent;
    let Widget::Slider(slider) = &mut node.widget else {
        return;
    };
    if !slider.apply(ev) {
        return;
    }

    let Some(parent) = parent else {
        tracing::trace!(?id, "detached slider, nothing to notify");
        return;
    };
    match tree.widget(parent) {
        Some(Widget::Scrollbar(_)) => {}
        other => {
            let found = other.map_or("unknown window", Widget::name);
            tracing::warn!(?id, ?parent, found, "slider parent is not a scrollbar");
            return;
        }
    }
    tree.handle_event(parent, &Event::Scroll(ScrollEvent::SliderMoved));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn slider(axis: Axis) -> Slider {
        let mut s = Slider::new(axis, 10);
        s.set_position(25, 40);
        s.set_size(20, 25);
        s.set_limit(80);
        s
    }

    #[test]
    fn test_set_position_pins_pivot() {
        let h = slider(Axis::Horizontal);
        assert_eq!(h.pivot(), 25);
        let v = slider(Axis::Vertical);
        assert_eq!(v.pivot(), 40);
    }

    #[test]
    fn test_drag_is_relative_to_grab_point() {
        let mut s = slider(Axis::Horizontal);
        s.apply(&Event::press(35, 45));
        s.apply(&Event::motion(65, 45));
        assert_eq!(s.position_along_axis(), 55);
        // Cross-axis movement is ignored.
        s.apply(&Event::motion(65, 400));
        assert_eq!(s.position_along_axis(), 55);
    }

    #[test]
    fn test_move_without_press_does_not_drag() {
        let mut s = slider(Axis::Horizontal);
        s.apply(&Event::motion(90, 45));
        assert_eq!(s.position_along_axis(), 25);
    }

    #[test]
    fn test_drag_is_clamped_both_ways() {
        let mut s = slider(Axis::Vertical);
        s.apply(&Event::press(30, 45));
        s.apply(&Event::motion(30, 10_000));
        assert_eq!(s.position_along_axis(), 120);
        s.apply(&Event::motion(30, -10_000));
        assert_eq!(s.position_along_axis(), 40);
    }

    #[test]
    fn test_steps_and_pages() {
        let mut s = slider(Axis::Horizontal);
        s.apply(&Event::step(ScrollStep::Down));
        assert_eq!(s.position_along_axis(), 35);
        s.apply(&Event::step(ScrollStep::PageDown));
        assert_eq!(s.position_along_axis(), 55);
        s.apply(&Event::step(ScrollStep::PageUp));
        s.apply(&Event::step(ScrollStep::Up));
        assert_eq!(s.position_along_axis(), 25);
    }

    #[test]
    fn test_steps_never_leave_range() {
        let mut s = slider(Axis::Vertical);
        for _ in 0..50 {
            s.apply(&Event::step(ScrollStep::PageDown));
            let p = s.position_along_axis();
            assert!((40..=120).contains(&p), "{p}");
        }
        assert_eq!(s.position_along_axis(), 120);
        for _ in 0..50 {
            s.apply(&Event::step(ScrollStep::Up));
        }
        assert_eq!(s.position_along_axis(), 40);
    }

    #[test]
    fn test_normalized_position() {
        let mut s = slider(Axis::Horizontal);
        assert!(s.normalized_position().abs() < f32::EPSILON);
        s.apply(&Event::press(26, 41));
        s.apply(&Event::motion(66, 41));
        assert!((s.normalized_position() - 0.5).abs() < f32::EPSILON);
        s.apply(&Event::motion(106, 41));
        assert!((s.normalized_position() - 1.0).abs() < f32::EPSILON);

        let mut fixed = Slider::new(Axis::Horizontal, 10);
        fixed.set_limit(-5);
        assert_eq!(fixed.limit(), 0);
        assert!(fixed.normalized_position().abs() < f32::EPSILON);
    }

    #[test]
    fn test_position_report_is_ignored() {
        let mut s = slider(Axis::Horizontal);
        let report = Event::Scroll(ScrollEvent::Position(crate::event::ScrollPosition {
            axis: Axis::Horizontal,
            position: 1.0,
        }));
        assert!(!s.apply(&report));
        assert_eq!(s.position_along_axis(), 25);
    }

    #[test]
    fn test_fill_priority_after_event() {
        let mut s = slider(Axis::Horizontal);
        s.button_mut().set_background_color(Color::BLACK);
        s.button_mut().set_hover_color(Color::rgb(1, 1, 1));
        s.button_mut().set_press_color(Color::WHITE);
        s.apply(&Event::press(30, 45));
        assert_eq!(s.button().rectangle.fill, Color::WHITE);
        s.apply(&Event::step(ScrollStep::Down));
        assert_eq!(s.button().rectangle.fill, Color::WHITE);
        s.apply(&Event::release(500, 500));
        assert_eq!(s.button().rectangle.fill, Color::rgb(1, 1, 1));
        s.apply(&Event::motion(500, 500));
        assert_eq!(s.button().rectangle.fill, Color::BLACK);
    }

    #[test]
    fn test_orphan_slider_is_safe() {
        let mut tree = WindowTree::new();
        let id = tree.insert(slider(Axis::Horizontal));
        tree.process_event(id, &Event::step(ScrollStep::Down));
        let s = tree.widget(id).and_then(Widget::as_slider).unwrap();
        assert_eq!(s.position_along_axis(), 35);
    }

    #[test]
    fn test_slider_under_plain_container_does_not_notify() {
        let mut tree = WindowTree::new();
        let root = tree.insert(Widget::Container);
        let id = tree.insert(slider(Axis::Horizontal));
        tree.attach_child(root, id).unwrap();
        tree.subscribe(root, crate::EventMask::SCROLL);
        tree.process_event(root, &Event::step(ScrollStep::Down));
        let s = tree.widget(id).and_then(Widget::as_slider).unwrap();
        assert_eq!(s.position_along_axis(), 35);
    }
}
