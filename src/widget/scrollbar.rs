//! Scrollbar composite: two step buttons, a track and a slider.
//!
//! The scrollbar is a container whose four parts are ordinary tree nodes
//! (track first, then the up and down buttons, then the slider). Parts
//! talk to it through events only:
//!
//! - a step button click sends `Step(Up | Down)` into the scrollbar through
//!   `process_event`, which reaches the slider;
//! - a release on the track, beside the slider, sends `Step(PageUp |
//!   PageDown)` the same way;
//! - the slider tells the scrollbar it moved with `SliderMoved`, and the
//!   scrollbar relays the slider's normalized position to its own parent.
//!
//! Layout along the axis, starting at the scrollbar position:
//!
//! ```text
//! [up: e] [track: length, slider travels inside] [down: e]
//! ```

use super::button::{ButtonSignals, RectangleButton};
use super::rectangle::draw_rectangle;
use super::slider::Slider;
use super::Widget;
use crate::color::Color;
use crate::error::{Result, TreeError};
use crate::event::{Axis, Event, ScrollEvent, ScrollPosition, ScrollStep};
use crate::layout::{Rect, Rectangle};
use crate::render::RenderBackend;
use crate::window::{WindowId, WindowTree};

/// Handles to the parts of a scrollbar plus its geometry.
///
/// Created with [`WindowTree::insert_scrollbar`]; reconfigured through the
/// `WindowTree` methods in this module so the parts stay consistent.
#[derive(Debug, Clone, Copy)]
pub struct Scrollbar {
    axis: Axis,
    length: u32,
    element_size: u32,
    x: i32,
    y: i32,
    up: WindowId,
    down: WindowId,
    slider: WindowId,
    background: WindowId,
}

impl Scrollbar {
    /// Orientation.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Track length along the axis.
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Step button size, and thickness across the axis.
    pub const fn element_size(&self) -> u32 {
        self.element_size
    }

    /// Top-left corner.
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// The line-up button.
    pub const fn up_button(&self) -> WindowId {
        self.up
    }

    /// The line-down button.
    pub const fn down_button(&self) -> WindowId {
        self.down
    }

    /// The slider.
    pub const fn slider(&self) -> WindowId {
        self.slider
    }

    /// The track.
    pub const fn background(&self) -> WindowId {
        self.background
    }

    /// Width and height of something `along` long on this axis and one
    /// element thick across it.
    const fn footprint(&self, along: u32) -> (u32, u32) {
        match self.axis {
            Axis::Horizontal => (along, self.element_size),
            Axis::Vertical => (self.element_size, along),
        }
    }

    /// Point `offset` units along the axis from the scrollbar origin.
    const fn offset(&self, offset: i32) -> (i32, i32) {
        match self.axis {
            Axis::Horizontal => (self.x.saturating_add(offset), self.y),
            Axis::Vertical => (self.x, self.y.saturating_add(offset)),
        }
    }
}

/// Step button at either end of a scrollbar.
#[derive(Debug, Clone)]
pub struct ScrollbarButton {
    /// Geometry, colors and interaction state.
    pub button: RectangleButton,
    step: ScrollStep,
}

impl ScrollbarButton {
    /// A button that issues `step` when clicked.
    pub const fn new(step: ScrollStep) -> Self {
        Self {
            button: RectangleButton::new(Rect::ZERO),
            step,
        }
    }

    /// Step issued on click.
    pub const fn step(&self) -> ScrollStep {
        self.step
    }

    /// Hit-test.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        self.button.is_inside(x, y)
    }

    pub(crate) fn draw(&self, backend: &mut dyn RenderBackend) {
        self.button.draw(backend);
    }
}

/// Track region of a scrollbar. Releases on it page the slider.
#[derive(Debug, Clone)]
pub struct ScrollbarBackground {
    /// Geometry and colors.
    pub rectangle: Rectangle,
    axis: Axis,
}

impl ScrollbarBackground {
    /// An empty track for the given axis.
    pub const fn new(axis: Axis) -> Self {
        Self {
            rectangle: Rectangle::new(Rect::ZERO),
            axis,
        }
    }

    pub(crate) fn draw(&self, backend: &mut dyn RenderBackend) {
        draw_rectangle(&self.rectangle, backend);
    }
}

/// Clamp a `u32` extent into coordinate space.
fn coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Outline width of every scrollbar part: no hit-test expansion.
const PART_THICKNESS: f32 = -1.0;

impl WindowTree {
    /// Build a scrollbar of the given track length, detached, at the
    /// origin.
    ///
    /// The slider starts one element long (or the whole track, if shorter).
    pub fn insert_scrollbar(&mut self, length: u32, axis: Axis) -> WindowId {
        let cfg = self.config().scrollbar;

        let background = self.insert(ScrollbarBackground::new(axis));
        let up = self.insert(ScrollbarButton::new(ScrollStep::Up));
        let down = self.insert(ScrollbarButton::new(ScrollStep::Down));
        let slider = self.insert(Slider::new(axis, cfg.line_step));

        let bar = Scrollbar {
            axis,
            length,
            element_size: cfg.element_size,
            x: 0,
            y: 0,
            up,
            down,
            slider,
            background,
        };
        let id = self.insert(bar);
        for part in [background, up, down, slider] {
            self.link_child(id, part);
            if let Some(rectangle) = self.part_rectangle_mut(part) {
                rectangle.set_thickness(PART_THICKNESS);
            }
        }

        for button in [up, down] {
            if let Some(rectangle) = self.part_rectangle_mut(button) {
                rectangle.set_size(cfg.element_size, cfg.element_size);
            }
        }
        let (tw, th) = bar.footprint(length);
        if let Some(rectangle) = self.part_rectangle_mut(background) {
            rectangle.set_size(tw, th);
        }

        self.layout_scrollbar(&bar);
        self.apply_slider_size(&bar, cfg.element_size);
        tracing::debug!(?id, ?axis, length, "scrollbar created");
        id
    }

    /// Move the scrollbar and lay its parts out from `(x, y)`.
    ///
    /// The slider returns to the start of the track and the reset position
    /// is relayed to the parent, so content scrolls back with it.
    pub fn set_scrollbar_position(&mut self, id: WindowId, x: i32, y: i32) -> Result<()> {
        let bar = {
            let bar = self.scrollbar_mut(id)?;
            bar.x = x;
            bar.y = y;
            *bar
        };
        self.layout_scrollbar(&bar);
        self.handle_event(id, &Event::Scroll(ScrollEvent::SliderMoved));
        Ok(())
    }

    /// Resize the track and lay the parts out again.
    ///
    /// The slider keeps its size (clamped to the new track), so its travel
    /// is always `length - size`. Like a move, this resets the slider and
    /// relays the new position.
    pub fn set_scrollbar_length(&mut self, id: WindowId, length: u32) -> Result<()> {
        let bar = {
            let bar = self.scrollbar_mut(id)?;
            bar.length = length;
            *bar
        };
        let (w, h) = bar.footprint(length);
        if let Some(rectangle) = self.part_rectangle_mut(bar.background) {
            rectangle.set_size(w, h);
        }
        self.layout_scrollbar(&bar);

        let size = self
            .widget(bar.slider)
            .and_then(Widget::as_slider)
            .map_or(0, |s| u32::try_from(s.size_along_axis()).unwrap_or(0));
        self.apply_slider_size(&bar, size);
        self.handle_event(id, &Event::Scroll(ScrollEvent::SliderMoved));
        Ok(())
    }

    /// Set the slider's size along the axis and its travel to what remains
    /// of the track. Sizes beyond the track are clamped to it.
    pub fn set_slider_size(&mut self, id: WindowId, size: u32) -> Result<()> {
        let bar = self.scrollbar(id)?;
        self.apply_slider_size(&bar, size);
        Ok(())
    }

    /// Resting fill of every part.
    pub fn set_scrollbar_background_color(&mut self, id: WindowId, color: Color) -> Result<()> {
        let bar = self.scrollbar(id)?;
        self.color_buttons(&bar, Some(color), None, None);
        if let Some(Widget::ScrollbarBackground(track)) = self.widget_mut(bar.background) {
            track.rectangle.set_background_color(color);
        }
        Ok(())
    }

    /// Outline color of every part.
    pub fn set_scrollbar_outline_color(&mut self, id: WindowId, color: Color) -> Result<()> {
        let bar = self.scrollbar(id)?;
        for part in [bar.up, bar.down, bar.slider, bar.background] {
            if let Some(rectangle) = self.part_rectangle_mut(part) {
                rectangle.set_outline_color(color);
            }
        }
        Ok(())
    }

    /// Hover fill of the buttons and slider. The track has none.
    pub fn set_scrollbar_hover_color(&mut self, id: WindowId, color: Color) -> Result<()> {
        let bar = self.scrollbar(id)?;
        self.color_buttons(&bar, None, Some(color), None);
        Ok(())
    }

    /// Press fill of the buttons and slider. The track has none.
    pub fn set_scrollbar_press_color(&mut self, id: WindowId, color: Color) -> Result<()> {
        let bar = self.scrollbar(id)?;
        self.color_buttons(&bar, None, None, Some(color));
        Ok(())
    }

    /// Whether `(x, y)` hits the scrollbar's slider.
    pub fn is_inside_slider(&self, id: WindowId, x: i32, y: i32) -> Result<bool> {
        let bar = self.scrollbar(id)?;
        Ok(self
            .widget(bar.slider)
            .and_then(Widget::as_slider)
            .is_some_and(|s| s.is_inside(x, y)))
    }

    /// The slider's coordinate along the scrollbar's axis.
    pub fn slider_position_along_axis(&self, id: WindowId) -> Result<i32> {
        let bar = self.scrollbar(id)?;
        Ok(self
            .widget(bar.slider)
            .and_then(Widget::as_slider)
            .map_or(0, Slider::position_along_axis))
    }

    /// Length of the track as laid out.
    pub fn track_length(&self, id: WindowId) -> Result<u32> {
        let bar = self.scrollbar(id)?;
        Ok(match self.widget(bar.background) {
            Some(Widget::ScrollbarBackground(track)) => match bar.axis {
                Axis::Horizontal => track.rectangle.width(),
                Axis::Vertical => track.rectangle.height(),
            },
            _ => 0,
        })
    }

    /// The normalized position the scrollbar would report now.
    pub fn scroll_position(&self, id: WindowId) -> Result<f32> {
        let bar = self.scrollbar(id)?;
        Ok(self
            .widget(bar.slider)
            .and_then(Widget::as_slider)
            .map_or(0.0, Slider::normalized_position))
    }

    fn scrollbar(&self, id: WindowId) -> Result<Scrollbar> {
        match self.widget(id) {
            Some(Widget::Scrollbar(bar)) => Ok(*bar),
            Some(other) => Err(TreeError::WrongKind {
                id,
                expected: "scrollbar",
                found: other.name(),
            }),
            None => Err(TreeError::UnknownWindow(id)),
        }
    }

    fn scrollbar_mut(&mut self, id: WindowId) -> Result<&mut Scrollbar> {
        match self.widget_mut(id) {
            Some(Widget::Scrollbar(bar)) => Ok(bar),
            Some(other) => Err(TreeError::WrongKind {
                id,
                expected: "scrollbar",
                found: other.name(),
            }),
            None => Err(TreeError::UnknownWindow(id)),
        }
    }

    fn part_rectangle_mut(&mut self, part: WindowId) -> Option<&mut Rectangle> {
        match self.widget_mut(part)? {
            Widget::ScrollbarButton(b) => Some(&mut b.button.rectangle),
            Widget::Slider(s) => Some(&mut s.button_mut().rectangle),
            Widget::ScrollbarBackground(b) => Some(&mut b.rectangle),
            _ => None,
        }
    }

    fn layout_scrollbar(&mut self, bar: &Scrollbar) {
        let e = coord(bar.element_size);
        let track_start = bar.offset(e);
        let down = bar.offset(e.saturating_add(coord(bar.length)));

        if let Some(rectangle) = self.part_rectangle_mut(bar.up) {
            rectangle.set_position(bar.x, bar.y);
        }
        if let Some(rectangle) = self.part_rectangle_mut(bar.background) {
            rectangle.set_position(track_start.0, track_start.1);
        }
        if let Some(rectangle) = self.part_rectangle_mut(bar.down) {
            rectangle.set_position(down.0, down.1);
        }
        if let Some(slider) = self.widget_mut(bar.slider).and_then(Widget::as_slider_mut) {
            slider.set_position(track_start.0, track_start.1);
        }
    }

    fn apply_slider_size(&mut self, bar: &Scrollbar, size: u32) {
        let size = size.min(bar.length);
        let (w, h) = bar.footprint(size);
        let limit = coord(bar.length - size);
        if let Some(slider) = self.widget_mut(bar.slider).and_then(Widget::as_slider_mut) {
            slider.set_size(w, h);
            slider.set_limit(limit);
        }
        tracing::trace!(slider = ?bar.slider, size, limit, "slider resized");
    }

    fn color_buttons(
        &mut self,
        bar: &Scrollbar,
        default: Option<Color>,
        hover: Option<Color>,
        press: Option<Color>,
    ) {
        for part in [bar.up, bar.down, bar.slider] {
            let button = match self.widget_mut(part) {
                Some(Widget::ScrollbarButton(b)) => &mut b.button,
                Some(Widget::Slider(s)) => s.button_mut(),
                _ => continue,
            };
            if let Some(c) = default {
                button.set_background_color(c);
            }
            if let Some(c) = hover {
                button.set_hover_color(c);
            }
            if let Some(c) = press {
                button.set_press_color(c);
            }
        }
    }
}

/// Relay the slider's position to the parent after the slider moved.
///
/// Steps and position reports passing through are left alone: the slider
/// already reacted to steps, and relaying reports again would loop.
pub(crate) fn handle_event(tree: &mut WindowTree, id: WindowId, ev: &Event) {
    if !matches!(ev, Event::Scroll(ScrollEvent::SliderMoved)) {
        return;
    }
    let Some(node) = tree.node(id) else {
        return;
    };
    let Widget::Scrollbar(bar) = node.widget() else {
        return;
    };
    let (axis, slider) = (bar.axis, bar.slider);
    let Some(parent) = node.parent() else {
        tracing::trace!(?id, "detached scrollbar, position not relayed");
        return;
    };

    let position = tree
        .widget(slider)
        .and_then(Widget::as_slider)
        .map_or(0.0, Slider::normalized_position);
    tracing::debug!(?id, ?axis, position, "scroll position relayed");
    tree.process_event(
        parent,
        &Event::Scroll(ScrollEvent::Position(ScrollPosition { axis, position })),
    );
}

/// On click, send the button's step into the parent scrollbar.
pub(crate) fn handle_button_event(tree: &mut WindowTree, id: WindowId, ev: &Event) {
    let Some(node) = tree.node_mut(id) else {
        return;
    };
    let parent = node.parent;
    let Widget::ScrollbarButton(button) = &mut node.widget else {
        return;
    };
    let signals = button.button.update(ev);
    if !signals.contains(ButtonSignals::CLICK) {
        return;
    }
    let step = button.step;

    let Some(parent) = parent else {
        tracing::trace!(?id, "detached scrollbar button clicked");
        return;
    };
    tracing::debug!(?id, ?step, "line step");
    tree.process_event(parent, &Event::step(step));
}

/// On a release inside the track but beside the slider, page toward the
/// release point.
pub(crate) fn handle_background_event(tree: &mut WindowTree, id: WindowId, ev: &Event) {
    let Event::MouseRelease(mouse) = ev else {
        return;
    };
    let Some(node) = tree.node(id) else {
        return;
    };
    let Widget::ScrollbarBackground(track) = node.widget() else {
        return;
    };
    if !track.rectangle.is_inside_rect(mouse.x, mouse.y) {
        return;
    }
    let axis = track.axis;

    let Some(parent) = node.parent() else {
        return;
    };
    let Some(Widget::Scrollbar(bar)) = tree.widget(parent) else {
        tracing::warn!(?id, ?parent, "scrollbar background outside a scrollbar");
        return;
    };
    let Some(slider) = tree.widget(bar.slider).and_then(Widget::as_slider) else {
        return;
    };
    // This release ends a drag, not a page click.
    if slider.button().state().is_pressed() || slider.is_inside(mouse.x, mouse.y) {
        return;
    }

    let step = if axis.along(mouse.x, mouse.y) < slider.position_along_axis() {
        ScrollStep::PageUp
    } else {
        ScrollStep::PageDown
    };
    tracing::debug!(?id, ?step, "page step");
    tree.process_event(parent, &Event::step(step));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, Recorder};
    use crate::widget::TextWindow;

    /// A container holding a scrollbar at the origin and a text window
    /// that turns reports into offsets of up to 1000.
    fn setup(axis: Axis) -> (WindowTree, WindowId, WindowId) {
        let mut tree = WindowTree::new();
        let root = tree.insert(Widget::Container);
        let bar = tree.insert_scrollbar(100, axis);
        let mut text = TextWindow::new(Rect::new(200, 200, 10, 10));
        text.set_viewport_span(1000, 1000);
        let text = tree.insert(text);
        tree.attach_child(root, bar).unwrap();
        tree.attach_child(root, text).unwrap();
        tree.set_scrollbar_position(bar, 0, 0).unwrap();
        tree.set_slider_size(bar, 20).unwrap();
        (tree, root, bar)
    }

    fn view(tree: &WindowTree, root: WindowId) -> (i32, i32) {
        let text = tree.children(root)[1];
        tree.widget(text)
            .and_then(Widget::as_text)
            .unwrap()
            .viewport_position()
    }

    fn slider_limit(tree: &WindowTree, bar: WindowId) -> i32 {
        let slider = tree.widget(bar).and_then(Widget::as_scrollbar).unwrap().slider();
        tree.widget(slider).and_then(Widget::as_slider).unwrap().limit()
    }

    #[test]
    fn test_layout_along_axis() {
        let (tree, _, bar) = setup(Axis::Horizontal);
        let parts = *tree.widget(bar).and_then(Widget::as_scrollbar).unwrap();
        let at = |id| match tree.widget(id).unwrap() {
            Widget::ScrollbarButton(b) => b.button.rectangle.rect,
            Widget::ScrollbarBackground(b) => b.rectangle.rect,
            Widget::Slider(s) => s.button().rectangle.rect,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(at(parts.up_button()), Rect::new(0, 0, 25, 25));
        assert_eq!(at(parts.background()), Rect::new(25, 0, 100, 25));
        assert_eq!(at(parts.slider()), Rect::new(25, 0, 20, 25));
        assert_eq!(at(parts.down_button()), Rect::new(125, 0, 25, 25));
        assert_eq!(tree.track_length(bar), Ok(100));
    }

    #[test]
    fn test_parts_are_children_in_order() {
        let (tree, _, bar) = setup(Axis::Vertical);
        let parts = *tree.widget(bar).and_then(Widget::as_scrollbar).unwrap();
        assert_eq!(
            tree.children(bar),
            &[
                parts.background(),
                parts.up_button(),
                parts.down_button(),
                parts.slider()
            ]
        );
    }

    #[test]
    fn test_slider_size_sets_limit() {
        let (mut tree, _, bar) = setup(Axis::Horizontal);
        assert_eq!(slider_limit(&tree, bar), 80);

        tree.set_slider_size(bar, 500).unwrap();
        assert_eq!(slider_limit(&tree, bar), 0);
    }

    #[test]
    fn test_length_change_keeps_limit_invariant() {
        let (mut tree, _, bar) = setup(Axis::Horizontal);
        tree.set_scrollbar_length(bar, 60).unwrap();
        assert_eq!(slider_limit(&tree, bar), 40);
        assert_eq!(tree.track_length(bar), Ok(60));

        tree.set_scrollbar_length(bar, 10).unwrap();
        assert_eq!(slider_limit(&tree, bar), 0);
    }

    #[test]
    fn test_moving_scrollbar_resets_content() {
        let (mut tree, root, bar) = setup(Axis::Vertical);
        tree.process_event(root, &Event::press(5, 30));
        tree.process_event(root, &Event::motion(5, 110));
        tree.process_event(root, &Event::release(5, 110));
        assert_eq!(view(&tree, root), (0, 1000));

        tree.set_scrollbar_position(bar, 0, 10).unwrap();
        assert_eq!(tree.slider_position_along_axis(bar), Ok(35));
        assert_eq!(view(&tree, root), (0, 0));
    }

    #[test]
    fn test_drag_to_end_reports_one() {
        let (mut tree, root, bar) = setup(Axis::Horizontal);
        tree.process_event(root, &Event::press(30, 5));
        tree.process_event(root, &Event::motion(110, 5));
        tree.process_event(root, &Event::release(110, 5));

        assert_eq!(tree.slider_position_along_axis(bar), Ok(105));
        assert_eq!(tree.scroll_position(bar), Ok(1.0));
        assert_eq!(view(&tree, root), (1000, 0));
    }

    #[test]
    fn test_midpoint_and_start() {
        let (mut tree, root, bar) = setup(Axis::Horizontal);
        assert_eq!(tree.scroll_position(bar), Ok(0.0));

        tree.process_event(root, &Event::press(30, 5));
        tree.process_event(root, &Event::motion(70, 5));
        assert_eq!(view(&tree, root), (500, 0));

        tree.process_event(root, &Event::motion(-300, 5));
        tree.process_event(root, &Event::release(-300, 5));
        assert_eq!(view(&tree, root), (0, 0));
    }

    #[test]
    fn test_step_buttons() {
        let (mut tree, root, bar) = setup(Axis::Horizontal);
        tree.process_event(root, &Event::press(130, 5));
        tree.process_event(root, &Event::release(130, 5));
        assert_eq!(tree.slider_position_along_axis(bar), Ok(35));
        assert_eq!(view(&tree, root), (125, 0));

        tree.process_event(root, &Event::press(5, 5));
        tree.process_event(root, &Event::release(5, 5));
        assert_eq!(tree.slider_position_along_axis(bar), Ok(25));
        assert_eq!(view(&tree, root), (0, 0));
    }

    #[test]
    fn test_background_pages_toward_release() {
        let (mut tree, root, bar) = setup(Axis::Vertical);
        tree.process_event(root, &Event::release(5, 100));
        assert_eq!(tree.slider_position_along_axis(bar), Ok(45));

        tree.process_event(root, &Event::release(5, 100));
        assert_eq!(tree.slider_position_along_axis(bar), Ok(65));

        tree.process_event(root, &Event::release(5, 30));
        assert_eq!(tree.slider_position_along_axis(bar), Ok(45));
    }

    #[test]
    fn test_release_on_slider_or_after_drag_does_not_page() {
        let (mut tree, root, bar) = setup(Axis::Vertical);
        tree.process_event(root, &Event::release(5, 30));
        assert_eq!(tree.slider_position_along_axis(bar), Ok(25));

        tree.process_event(root, &Event::press(5, 30));
        tree.process_event(root, &Event::motion(5, 40));
        tree.process_event(root, &Event::release(5, 110));
        assert_eq!(tree.slider_position_along_axis(bar), Ok(35));
    }

    #[test]
    fn test_injected_steps_reach_slider() {
        let (mut tree, root, bar) = setup(Axis::Vertical);
        tree.process_event(bar, &Event::step(ScrollStep::PageDown));
        tree.process_event(bar, &Event::step(ScrollStep::Down));
        assert_eq!(tree.slider_position_along_axis(bar), Ok(55));
        assert_eq!(view(&tree, root), (0, 375));
    }

    #[test]
    fn test_colors_fan_out() {
        let (mut tree, _, bar) = setup(Axis::Horizontal);
        let red = Color::rgb(255, 0, 0);
        let green = Color::rgb(0, 255, 0);
        tree.set_scrollbar_background_color(bar, red).unwrap();
        tree.set_scrollbar_hover_color(bar, green).unwrap();
        tree.set_scrollbar_outline_color(bar, Color::WHITE).unwrap();

        let mut recorder = Recorder::new();
        tree.draw(bar, &mut recorder);
        assert_eq!(recorder.commands().len(), 4);
        for cmd in recorder.commands() {
            match cmd {
                DrawCommand::Rect {
                    fill,
                    outline,
                    thickness,
                    ..
                } => {
                    assert_eq!(*fill, red);
                    assert_eq!(*outline, Color::WHITE);
                    assert!((*thickness - PART_THICKNESS).abs() < f32::EPSILON);
                }
                other => panic!("unexpected {other:?}"),
            }
        }

        // The track has no hover color.
        tree.process_event(bar, &Event::motion(60, 5));
        let parts = *tree.widget(bar).and_then(Widget::as_scrollbar).unwrap();
        match tree.widget(parts.background()) {
            Some(Widget::ScrollbarBackground(track)) => assert_eq!(track.rectangle.fill, red),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_misuse_is_reported() {
        let mut tree = WindowTree::new();
        let plain = tree.insert(Widget::Container);
        assert_eq!(
            tree.set_slider_size(plain, 10),
            Err(TreeError::WrongKind {
                id: plain,
                expected: "scrollbar",
                found: "container",
            })
        );
        tree.remove(plain);
        assert_eq!(
            tree.track_length(plain),
            Err(TreeError::UnknownWindow(plain))
        );
    }

    #[test]
    fn test_detached_scrollbar_still_moves() {
        let mut tree = WindowTree::new();
        let bar = tree.insert_scrollbar(100, Axis::Horizontal);
        tree.set_slider_size(bar, 20).unwrap();
        tree.process_event(bar, &Event::step(ScrollStep::PageDown));
        assert_eq!(tree.scroll_position(bar), Ok(0.25));
    }
}
