//! Reference widgets and the [`Widget`] tagged union stored in tree nodes.
//!
//! Every node holds one `Widget`. Dispatch on the variant replaces a class
//! hierarchy: the tree asks the widget for its initial mask, its attach
//! behavior, whether it is a container, how it draws and how it hit-tests,
//! and routes `handle_event` to the module that owns the variant.
//!
//! | Variant | Shape | Reacts to |
//! |---|---|---|
//! | `Container` | container | nothing (pure composition) |
//! | `Rectangle` | leaf | nothing |
//! | `Button` | leaf | mouse triplet |
//! | `Slider` | leaf | mouse triplet, scroll steps |
//! | `Scrollbar` | container | slider notifications |
//! | `ScrollbarButton` | leaf | mouse triplet (click = line step) |
//! | `ScrollbarBackground` | leaf | mouse release (page step) |
//! | `ScrollbarManager` | container | nothing itself; fans events out |
//! | `Text` | leaf | scroll position reports |

pub(crate) mod button;
pub(crate) mod manager;
mod rectangle;
pub(crate) mod scrollbar;
pub(crate) mod slider;
pub(crate) mod text;

pub use button::{ButtonSignals, ButtonState, RectangleButton};
pub use manager::ScrollbarManager;
pub use rectangle::RectangleWindow;
pub use scrollbar::{Scrollbar, ScrollbarBackground, ScrollbarButton};
pub use slider::Slider;
pub use text::TextWindow;

use crate::event::EventMask;
use crate::render::RenderBackend;

/// The widget stored in a tree node.
#[derive(Debug, Clone)]
pub enum Widget {
    /// Plain container: owns children, draws nothing itself.
    Container,
    /// Passive rectangle.
    Rectangle(RectangleWindow),
    /// Clickable rectangle with hover/press colors.
    Button(RectangleButton),
    /// Draggable, step-adjustable slider.
    Slider(Slider),
    /// Composite of two step buttons, a track and a slider.
    Scrollbar(Scrollbar),
    /// Line-step button inside a scrollbar.
    ScrollbarButton(ScrollbarButton),
    /// Track region inside a scrollbar.
    ScrollbarBackground(ScrollbarBackground),
    /// Optional horizontal/vertical scrollbars around content children.
    ScrollbarManager(ScrollbarManager),
    /// Scrollable text viewport.
    Text(TextWindow),
}

impl Widget {
    /// Short name used in logs and errors.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Rectangle(_) => "rectangle",
            Self::Button(_) => "button",
            Self::Slider(_) => "slider",
            Self::Scrollbar(_) => "scrollbar",
            Self::ScrollbarButton(_) => "scrollbar button",
            Self::ScrollbarBackground(_) => "scrollbar background",
            Self::ScrollbarManager(_) => "scrollbar manager",
            Self::Text(_) => "text window",
        }
    }

    /// Whether children may be attached under this widget.
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Container | Self::Scrollbar(_) | Self::ScrollbarManager(_)
        )
    }

    /// Mask the node starts with. It stays local until the node is
    /// attached.
    pub(crate) const fn initial_mask(&self) -> EventMask {
        match self {
            Self::Slider(_)
            | Self::Scrollbar(_)
            | Self::ScrollbarManager(_)
            | Self::Text(_) => EventMask::SCROLL,
            Self::ScrollbarBackground(_) => EventMask::MOUSE_RELEASE,
            Self::Container
            | Self::Rectangle(_)
            | Self::Button(_)
            | Self::ScrollbarButton(_) => EventMask::empty(),
        }
    }

    /// Mask a widget subscribes itself and its ancestors to on attach, in
    /// place of propagating its own mask.
    pub(crate) const fn attach_subscription(&self) -> Option<EventMask> {
        match self {
            Self::Button(_) | Self::Slider(_) | Self::ScrollbarButton(_) => Some(EventMask::MOUSE),
            _ => None,
        }
    }

    /// Hit-test. Widgets without an interactive region never contain a
    /// point.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        match self {
            Self::Button(b) => b.is_inside(x, y),
            Self::Slider(s) => s.is_inside(x, y),
            Self::ScrollbarButton(b) => b.is_inside(x, y),
            Self::Rectangle(r) => r.rectangle.is_inside_rect(x, y),
            Self::ScrollbarBackground(b) => b.rectangle.is_inside_rect(x, y),
            Self::Text(t) => t.rectangle.is_inside_rect(x, y),
            Self::Container | Self::Scrollbar(_) | Self::ScrollbarManager(_) => false,
        }
    }

    /// Draw this widget alone. Containers draw nothing.
    pub(crate) fn draw(&self, backend: &mut dyn RenderBackend) {
        match self {
            Self::Rectangle(r) => r.draw(backend),
            Self::Button(b) => b.draw(backend),
            Self::Slider(s) => s.draw(backend),
            Self::ScrollbarButton(b) => b.draw(backend),
            Self::ScrollbarBackground(b) => b.draw(backend),
            Self::Text(t) => t.draw(backend),
            Self::Container | Self::Scrollbar(_) | Self::ScrollbarManager(_) => {}
        }
    }

    /// The rectangle button, if this is one.
    pub const fn as_button(&self) -> Option<&RectangleButton> {
        match self {
            Self::Button(b) => Some(b),
            _ => None,
        }
    }

    /// Mutable rectangle button, if this is one.
    pub fn as_button_mut(&mut self) -> Option<&mut RectangleButton> {
        match self {
            Self::Button(b) => Some(b),
            _ => None,
        }
    }

    /// The slider, if this is one.
    pub const fn as_slider(&self) -> Option<&Slider> {
        match self {
            Self::Slider(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable slider, if this is one.
    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        match self {
            Self::Slider(s) => Some(s),
            _ => None,
        }
    }

    /// The scrollbar, if this is one.
    pub const fn as_scrollbar(&self) -> Option<&Scrollbar> {
        match self {
            Self::Scrollbar(s) => Some(s),
            _ => None,
        }
    }

    /// The scrollbar button, if this is one.
    pub const fn as_scrollbar_button(&self) -> Option<&ScrollbarButton> {
        match self {
            Self::ScrollbarButton(b) => Some(b),
            _ => None,
        }
    }

    /// The scrollbar manager, if this is one.
    pub const fn as_scrollbar_manager(&self) -> Option<&ScrollbarManager> {
        match self {
            Self::ScrollbarManager(m) => Some(m),
            _ => None,
        }
    }

    /// The text window, if this is one.
    pub const fn as_text(&self) -> Option<&TextWindow> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Mutable text window, if this is one.
    pub fn as_text_mut(&mut self) -> Option<&mut TextWindow> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

macro_rules! impl_from_widget {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Widget {
                fn from(w: $ty) -> Self {
                    Self::$variant(w)
                }
            }
        )*
    };
}

impl_from_widget! {
    RectangleWindow => Rectangle,
    RectangleButton => Button,
    Slider => Slider,
    Scrollbar => Scrollbar,
    ScrollbarButton => ScrollbarButton,
    ScrollbarBackground => ScrollbarBackground,
    ScrollbarManager => ScrollbarManager,
    TextWindow => Text,
}
