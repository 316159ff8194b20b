//! Render module: the narrow drawing interface widgets draw through.
//!
//! The toolkit never rasterizes anything itself. `draw()` walks the tree and
//! issues calls on a [`RenderBackend`]:
//! - [`Recorder`]: keeps the calls as [`DrawCommand`] values
//! - [`Canvas`]: a character-cell surface that can be flushed to a terminal

mod canvas;

pub use canvas::{Canvas, CanvasCell};

use crate::color::Color;

/// Drawing primitives consumed by widgets.
pub trait RenderBackend {
    /// Draw a filled rectangle with an optional outline.
    #[allow(clippy::too_many_arguments)]
    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fill: Color,
        outline: Color,
        thickness: f32,
    );

    /// Draw text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Redirect subsequent drawing into an off-screen surface of the given
    /// size, with its own origin at `(0, 0)`.
    fn init_off_screen(&mut self, width: u32, height: u32);

    /// Copy the current off-screen surface onto the target at `(x, y)` and
    /// stop redirecting.
    fn flush_off_screen(&mut self, x: i32, y: i32);
}

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`RenderBackend::draw_rect`].
    Rect {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
        /// Width.
        width: u32,
        /// Height.
        height: u32,
        /// Fill color.
        fill: Color,
        /// Outline color.
        outline: Color,
        /// Outline thickness.
        thickness: f32,
    },
    /// [`RenderBackend::draw_text`].
    Text {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
        /// The text.
        text: String,
    },
    /// [`RenderBackend::init_off_screen`].
    InitOffScreen {
        /// Width.
        width: u32,
        /// Height.
        height: u32,
    },
    /// [`RenderBackend::flush_off_screen`].
    FlushOffScreen {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
    },
}

/// Backend that records every call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Create an empty recorder.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Calls recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderBackend for Recorder {
    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fill: Color,
        outline: Color,
        thickness: f32,
    ) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            fill,
            outline,
            thickness,
        });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn init_off_screen(&mut self, width: u32, height: u32) {
        self.commands
            .push(DrawCommand::InitOffScreen { width, height });
    }

    fn flush_off_screen(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand::FlushOffScreen { x, y });
    }
}
