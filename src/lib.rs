//! # Windowkit
//!
//! A small retained-mode widget toolkit built around a window tree.
//!
//! Widgets live in a [`WindowTree`] and talk to each other through events
//! instead of direct calls: a step button clicks, its scrollbar moves the
//! slider, the slider reports back, and the scrollbar relays a normalized
//! position to whatever content sits next to it.
//!
//! ## Core Concepts
//!
//! - **Event masks**: every node carries the set of event kinds it and its
//!   descendants care about; dispatch skips whole subtrees that don't
//! - **Monotonic subscription**: attaching a node merges its mask into every
//!   ancestor, and masks never shrink
//! - **Button state machine**: press/release/hover tracking shared by every
//!   clickable widget
//! - **Scrollbar protocol**: step and page commands go into a scrollbar,
//!   position reports come out
//!
//! ## Example
//!
//! ```rust
//! use windowkit::{Event, Rect, ScrollbarConfig, TextWindow, ToolkitConfig, WindowTree};
//!
//! // One terminal cell per unit.
//! let config = ToolkitConfig::default().with_scrollbar(ScrollbarConfig {
//!     element_size: 1,
//!     line_step: 1,
//!     default_length: 10,
//! });
//! let mut tree = WindowTree::with_config(config);
//! let manager = tree.insert_scrollbar_manager(false, true);
//!
//! let mut text = TextWindow::new(Rect::new(0, 0, 40, 10));
//! text.set_text("line 1\nline 2\nline 3");
//! text.set_viewport_span(0, 20);
//! let text = tree.insert(text);
//! tree.attach_child(manager, text).unwrap();
//!
//! tree.adjust_scrollbar_size(manager, 0, 0, 40, 10).unwrap();
//! tree.adjust_scrollable_area_size(manager, 40, 20).unwrap();
//!
//! // Half the content is visible: the thumb is half the track.
//! // Click the vertical scrollbar's down button, just below the track.
//! tree.process_event(manager, &Event::press(40, 10));
//! tree.process_event(manager, &Event::release(40, 10));
//!
//! let view = tree.widget(text).and_then(|w| w.as_text()).unwrap();
//! assert_eq!(view.viewport_position(), (0, 5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod layout;
pub mod render;
pub mod widget;
pub mod window;

// Re-exports for convenience
pub use color::Color;
pub use config::{ScrollbarConfig, ToolkitConfig};
pub use error::{Result, TreeError};
pub use event::{Axis, Event, EventMask, MouseEvent, ScrollEvent, ScrollPosition, ScrollStep};
pub use layout::{Rect, Rectangle};
pub use render::{Canvas, DrawCommand, Recorder, RenderBackend};
pub use widget::{
    ButtonSignals, ButtonState, RectangleButton, RectangleWindow, Scrollbar, ScrollbarBackground,
    ScrollbarButton, ScrollbarManager, Slider, TextWindow, Widget,
};
pub use window::{Node, WindowId, WindowTree};
