//! Button interaction state machine and the rectangle button built on it.
//!
//! [`ButtonState`] is pure: it takes a mouse event plus the result of the
//! widget's hit-test and returns the set of hooks that fired as
//! [`ButtonSignals`]. Each button kind then reacts to those signals:
//! recoloring, drag bookkeeping, or synthesizing a scroll step.

use bitflags::bitflags;

use super::rectangle::draw_rectangle;
use super::Widget;
use crate::color::Color;
use crate::event::Event;
use crate::layout::{Rect, Rectangle};
use crate::render::RenderBackend;
use crate::window::{WindowId, WindowTree};

bitflags! {
    /// Hooks fired by one [`ButtonState::update`] call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonSignals: u8 {
        /// Pressed inside while not already pressed.
        const PRESS = 1 << 0;
        /// Released after a press, wherever the pointer is.
        const RELEASE = 1 << 1;
        /// Released inside after a press.
        const CLICK = 1 << 2;
        /// Pointer moved from outside to inside.
        const HOVER_ENTER = 1 << 3;
        /// Pointer moved from inside to outside.
        const HOVER_EXIT = 1 << 4;
        /// Any pointer move.
        const MOVE = 1 << 5;
    }
}

/// Press/hover tracking for one button.
///
/// `PRESS` fires at most once per press-and-hold, and `CLICK` only on a
/// release inside the hit region that ends a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pressed: bool,
    hovered: bool,
}

impl ButtonState {
    /// Idle: neither pressed nor hovered.
    pub const fn new() -> Self {
        Self {
            pressed: false,
            hovered: false,
        }
    }

    /// Whether a press is being held.
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the pointer was last seen inside.
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Advance the state machine. `inside` is the hit-test result for the
    /// event's coordinates; non-mouse events fire nothing.
    pub fn update(&mut self, ev: &Event, inside: bool) -> ButtonSignals {
        let mut signals = ButtonSignals::empty();

        match ev {
            Event::MousePress(_) if inside => {
                self.hovered = true;
                if !self.pressed {
                    self.pressed = true;
                    signals |= ButtonSignals::PRESS;
                }
            }
            Event::MouseRelease(_) if self.pressed => {
                signals |= ButtonSignals::RELEASE;
                if inside {
                    signals |= ButtonSignals::CLICK;
                }
                self.pressed = false;
            }
            Event::MouseMove(_) => {
                if inside && !self.hovered {
                    self.hovered = true;
                    signals |= ButtonSignals::HOVER_ENTER;
                } else if !inside && self.hovered {
                    self.hovered = false;
                    signals |= ButtonSignals::HOVER_EXIT;
                }
                signals |= ButtonSignals::MOVE;
            }
            _ => {}
        }

        signals
    }
}

/// A rectangle that changes fill on hover and press and counts clicks.
#[derive(Debug, Clone, Default)]
pub struct RectangleButton {
    /// Geometry and current colors.
    pub rectangle: Rectangle,
    state: ButtonState,
    default_fill: Color,
    hover_fill: Color,
    press_fill: Color,
    clicks: u64,
}

impl RectangleButton {
    /// Create a button with the given bounds.
    pub const fn new(rect: Rect) -> Self {
        Self {
            rectangle: Rectangle::new(rect),
            state: ButtonState::new(),
            default_fill: Color::TRANSPARENT,
            hover_fill: Color::TRANSPARENT,
            press_fill: Color::TRANSPARENT,
            clicks: 0,
        }
    }

    /// Set the resting fill. Also applied immediately.
    pub const fn set_background_color(&mut self, color: Color) {
        self.default_fill = color;
        self.rectangle.fill = color;
    }

    /// Fill used while hovered.
    pub const fn set_hover_color(&mut self, color: Color) {
        self.hover_fill = color;
    }

    /// Fill used while pressed.
    pub const fn set_press_color(&mut self, color: Color) {
        self.press_fill = color;
    }

    /// Current interaction state.
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Number of completed clicks.
    pub const fn click_count(&self) -> u64 {
        self.clicks
    }

    /// Hit-test against the thickness-expanded rectangle.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        self.rectangle.is_inside_rect(x, y)
    }

    /// Run the state machine for a mouse event and apply the default
    /// reactions: press color on press, hover color on enter, resting color
    /// on exit.
    pub(crate) fn update(&mut self, ev: &Event) -> ButtonSignals {
        let Some(mouse) = ev.mouse() else {
            return ButtonSignals::empty();
        };
        let inside = self.is_inside(mouse.x, mouse.y);
        let signals = self.state.update(ev, inside);

        if signals.contains(ButtonSignals::PRESS) {
            self.rectangle.fill = self.press_fill;
        }
        if signals.contains(ButtonSignals::HOVER_ENTER) {
            self.rectangle.fill = self.hover_fill;
        }
        if signals.contains(ButtonSignals::HOVER_EXIT) {
            self.rectangle.fill = self.default_fill;
        }
        if signals.contains(ButtonSignals::CLICK) {
            self.clicks += 1;
        }

        signals
    }

    /// Pick the fill by state priority: pressed, then hovered, then resting.
    pub(crate) const fn refresh_fill(&mut self) {
        self.rectangle.fill = if self.state.pressed {
            self.press_fill
        } else if self.state.hovered {
            self.hover_fill
        } else {
            self.default_fill
        };
    }

    pub(crate) fn draw(&self, backend: &mut dyn RenderBackend) {
        draw_rectangle(&self.rectangle, backend);
    }
}

pub(crate) fn handle_event(tree: &mut WindowTree, id: WindowId, ev: &Event) {
    let Some(Widget::Button(button)) = tree.widget_mut(id) else {
        return;
    };
    let signals = button.update(ev);
    if signals.contains(ButtonSignals::CLICK) {
        tracing::debug!(?id, clicks = button.click_count(), "button clicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn colored_button() -> RectangleButton {
        let mut b = RectangleButton::new(Rect::new(0, 0, 10, 10));
        b.set_background_color(RED);
        b.set_hover_color(GREEN);
        b.set_press_color(BLUE);
        b
    }

    #[test]
    fn test_press_fires_once_per_hold() {
        let mut state = ButtonState::new();
        assert_eq!(
            state.update(&Event::press(1, 1), true),
            ButtonSignals::PRESS
        );
        for i in 0..5 {
            let signals = state.update(&Event::motion(i, i), true);
            assert!(!signals.contains(ButtonSignals::PRESS));
        }
        assert!(state.update(&Event::press(1, 1), true).is_empty());
        assert!(state.is_pressed());
    }

    #[test]
    fn test_click_requires_press_and_inside_release() {
        let mut state = ButtonState::new();
        assert!(state.update(&Event::release(1, 1), true).is_empty());

        state.update(&Event::press(1, 1), true);
        assert_eq!(
            state.update(&Event::release(1, 1), true),
            ButtonSignals::RELEASE | ButtonSignals::CLICK
        );
        assert!(!state.is_pressed());

        state.update(&Event::press(1, 1), true);
        assert_eq!(
            state.update(&Event::release(50, 50), false),
            ButtonSignals::RELEASE
        );
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut state = ButtonState::new();
        assert!(state.update(&Event::press(50, 50), false).is_empty());
        assert!(!state.is_pressed());
        assert!(!state.is_hovered());
    }

    #[test]
    fn test_hover_transitions() {
        let mut state = ButtonState::new();
        assert_eq!(
            state.update(&Event::motion(1, 1), true),
            ButtonSignals::HOVER_ENTER | ButtonSignals::MOVE
        );
        assert_eq!(
            state.update(&Event::motion(2, 2), true),
            ButtonSignals::MOVE
        );
        assert_eq!(
            state.update(&Event::motion(50, 50), false),
            ButtonSignals::HOVER_EXIT | ButtonSignals::MOVE
        );
        assert_eq!(
            state.update(&Event::motion(60, 60), false),
            ButtonSignals::MOVE
        );
    }

    #[test]
    fn test_press_sets_hovered_without_enter() {
        let mut state = ButtonState::new();
        state.update(&Event::press(1, 1), true);
        assert!(state.is_hovered());
        assert_eq!(
            state.update(&Event::motion(1, 1), true),
            ButtonSignals::MOVE
        );
    }

    #[test]
    fn test_button_colors_follow_state() {
        let mut b = colored_button();
        assert_eq!(b.rectangle.fill, RED);

        b.update(&Event::motion(5, 5));
        assert_eq!(b.rectangle.fill, GREEN);

        b.update(&Event::press(5, 5));
        assert_eq!(b.rectangle.fill, BLUE);

        b.update(&Event::motion(50, 5));
        assert_eq!(b.rectangle.fill, RED);
    }

    #[test]
    fn test_refresh_fill_priority() {
        let mut b = colored_button();
        b.update(&Event::press(5, 5));
        b.refresh_fill();
        assert_eq!(b.rectangle.fill, BLUE);

        b.update(&Event::release(5, 5));
        b.refresh_fill();
        assert_eq!(b.rectangle.fill, GREEN);
    }

    #[test]
    fn test_click_count_through_tree() {
        let mut tree = WindowTree::new();
        let root = tree.insert(Widget::Container);
        let id = tree.insert(colored_button());
        tree.attach_child(root, id).unwrap();

        tree.process_event(root, &Event::press(5, 5));
        tree.process_event(root, &Event::release(5, 5));
        tree.process_event(root, &Event::press(5, 5));
        tree.process_event(root, &Event::release(40, 40));

        let b = tree.widget(id).and_then(Widget::as_button).unwrap();
        assert_eq!(b.click_count(), 1);
    }

    #[test]
    fn test_scroll_event_fires_nothing() {
        let mut b = colored_button();
        let signals = b.update(&Event::step(crate::event::ScrollStep::Up));
        assert!(signals.is_empty());
    }
}
