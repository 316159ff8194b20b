//! Event model: the input events widgets react to, and the masks they
//! subscribe with.
//!
//! Every [`Event`] maps to exactly one bit of [`EventMask`] through
//! [`Event::kind`]. A node only sees events whose kind is in its mask, and a
//! node's mask always contains the masks of everything attached below it.

use bitflags::bitflags;

bitflags! {
    /// Set of event kinds a node and its descendants care about.
    ///
    /// Masks only ever grow: they are merged on attach and on every later
    /// subscription, and nothing removes bits again.
    ///
    /// # Example
    /// ```
    /// use windowkit::EventMask;
    /// let mask = EventMask::MOUSE_PRESS | EventMask::SCROLL;
    /// assert!(mask.contains(EventMask::SCROLL));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EventMask: u64 {
        /// Mouse button pressed.
        const MOUSE_PRESS = 1 << 0;
        /// Mouse button released.
        const MOUSE_RELEASE = 1 << 1;
        /// Pointer moved.
        const MOUSE_MOVE = 1 << 2;
        /// Scroll command or scroll position report.
        const SCROLL = 1 << 3;
        /// The press/release/move triplet every button needs.
        const MOUSE = Self::MOUSE_PRESS.bits()
            | Self::MOUSE_RELEASE.bits()
            | Self::MOUSE_MOVE.bits();
    }
}

/// Pointer coordinates carried by mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MouseEvent {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl MouseEvent {
    /// Create a new mouse event.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Orientation of a slider or scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Travel along x.
    Horizontal,
    /// Travel along y.
    Vertical,
}

impl Axis {
    /// Whether this is the horizontal axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Pick the coordinate along this axis.
    pub const fn along(self, x: i32, y: i32) -> i32 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }
}

/// Scroll command issued by a step button, the track, or an input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollStep {
    /// One line toward the start.
    Up,
    /// One line toward the end.
    Down,
    /// One slider length toward the start.
    PageUp,
    /// One slider length toward the end.
    PageDown,
}

/// Normalized position report relayed from a scrollbar to its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    /// Which scrollbar produced the report.
    pub axis: Axis,
    /// Fraction in `[0, 1]` of the slider's travel.
    pub position: f32,
}

/// Payload of a scroll-kind event.
///
/// A single value is either a command going into a scrollbar or a report
/// coming out of one, never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// Move the slider by a fixed step.
    Step(ScrollStep),
    /// The slider changed; its scrollbar should report the new position.
    SliderMoved,
    /// Where the slider now sits.
    Position(ScrollPosition),
}

/// An input or synthesized event delivered through the window tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePress(MouseEvent),
    /// Mouse button released.
    MouseRelease(MouseEvent),
    /// Pointer moved.
    MouseMove(MouseEvent),
    /// Scroll command or report.
    Scroll(ScrollEvent),
}

impl Event {
    /// Mouse press at `(x, y)`.
    pub const fn press(x: i32, y: i32) -> Self {
        Self::MousePress(MouseEvent::new(x, y))
    }

    /// Mouse release at `(x, y)`.
    pub const fn release(x: i32, y: i32) -> Self {
        Self::MouseRelease(MouseEvent::new(x, y))
    }

    /// Pointer move to `(x, y)`.
    pub const fn motion(x: i32, y: i32) -> Self {
        Self::MouseMove(MouseEvent::new(x, y))
    }

    /// Scroll step command.
    pub const fn step(step: ScrollStep) -> Self {
        Self::Scroll(ScrollEvent::Step(step))
    }

    /// The mask bit this event is filtered by.
    pub const fn kind(&self) -> EventMask {
        match self {
            Self::MousePress(_) => EventMask::MOUSE_PRESS,
            Self::MouseRelease(_) => EventMask::MOUSE_RELEASE,
            Self::MouseMove(_) => EventMask::MOUSE_MOVE,
            Self::Scroll(_) => EventMask::SCROLL,
        }
    }

    /// Pointer coordinates, for mouse-kind events.
    pub const fn mouse(&self) -> Option<MouseEvent> {
        match self {
            Self::MousePress(m) | Self::MouseRelease(m) | Self::MouseMove(m) => Some(*m),
            Self::Scroll(_) => None,
        }
    }

    /// Whether this is one of the mouse kinds.
    pub const fn is_mouse(&self) -> bool {
        self.mouse().is_some()
    }
}
