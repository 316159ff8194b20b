//! Canvas: a character-cell render backend.
//!
//! One drawing unit is one terminal cell. Cells are stored in row-major
//! order in a contiguous `Vec`: `index = y * width + x`. Off-screen surfaces
//! are kept on a stack so nested `init_off_screen`/`flush_off_screen` pairs
//! compose.

use std::io::{self, Write};

use crossterm::{cursor, queue, style};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::RenderBackend;
use crate::color::Color;

/// One cell of the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasCell {
    /// Grapheme shown in this cell. Empty for the second half of a wide
    /// grapheme.
    pub symbol: String,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

impl CanvasCell {
    fn blank() -> Self {
        Self {
            symbol: String::from(" "),
            fg: Color::WHITE,
            bg: Color::TRANSPARENT,
        }
    }

    /// Whether this cell continues the wide grapheme to its left.
    pub fn is_wide_continuation(&self) -> bool {
        self.symbol.is_empty()
    }
}

/// A grid of cells.
#[derive(Debug, Clone)]
struct Surface {
    cells: Vec<CanvasCell>,
    width: u32,
    height: u32,
}

impl Surface {
    fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![CanvasCell::blank(); size],
            width,
            height,
        }
    }

    #[allow(clippy::cast_sign_loss)]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    fn get(&self, x: i32, y: i32) -> Option<&CanvasCell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut CanvasCell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }
}

/// Character-cell implementation of [`RenderBackend`].
#[derive(Debug, Clone)]
pub struct Canvas {
    screen: Surface,
    off_screen: Vec<Surface>,
    text_color: Color,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen: Surface::new(width, height),
            off_screen: Vec::new(),
            text_color: Color::WHITE,
        }
    }

    /// Canvas width in cells.
    pub const fn width(&self) -> u32 {
        self.screen.width
    }

    /// Canvas height in cells.
    pub const fn height(&self) -> u32 {
        self.screen.height
    }

    /// Color used by subsequent `draw_text` calls.
    pub const fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Cell at `(x, y)` on the visible surface.
    pub fn get(&self, x: i32, y: i32) -> Option<&CanvasCell> {
        self.screen.get(x, y)
    }

    /// The visible row `y` as a string, wide continuations skipped.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.screen.width)
            .filter_map(|x| self.screen.get(i32::try_from(x).ok()?, y))
            .map(|c| c.symbol.as_str())
            .collect()
    }

    /// Reset every cell and drop unflushed off-screen surfaces.
    pub fn clear(&mut self) {
        self.screen.cells.fill(CanvasCell::blank());
        self.off_screen.clear();
    }

    /// Resize, discarding content.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen = Surface::new(width, height);
        self.off_screen.clear();
    }

    /// Emit the visible surface as terminal commands and flush once.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (row, cells) in self
            .screen
            .cells
            .chunks(self.screen.width.max(1) as usize)
            .enumerate()
        {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(out, cursor::MoveTo(0, row))?;
            for cell in cells.iter().filter(|c| !c.is_wide_continuation()) {
                queue!(
                    out,
                    style::SetForegroundColor(term_color(cell.fg)),
                    style::SetBackgroundColor(term_color(cell.bg)),
                    style::Print(&cell.symbol)
                )?;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }

    fn target(&mut self) -> &mut Surface {
        match self.off_screen.last_mut() {
            Some(surface) => surface,
            None => &mut self.screen,
        }
    }
}

fn term_color(color: Color) -> style::Color {
    if color.is_transparent() {
        style::Color::Reset
    } else {
        style::Color::Rgb {
            r: color.red,
            g: color.green,
            b: color.blue,
        }
    }
}

impl RenderBackend for Canvas {
    #[allow(clippy::cast_possible_wrap)]
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
        let surface = self.target();
        let (w, h) = (width as i32, height as i32);

        if !fill.is_transparent() {
            for row in y..y.saturating_add(h) {
                for col in x..x.saturating_add(w) {
                    if let Some(cell) = surface.get_mut(col, row) {
                        cell.symbol.clear();
                        cell.symbol.push(' ');
                        cell.bg = fill;
                    }
                }
            }
        }

        if thickness < 1.0 || outline.is_transparent() || w < 2 || h < 2 {
            return;
        }

        let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));
        for row in y..=bottom {
            for col in x..=right {
                let symbol = match (col == x, col == right, row == y, row == bottom) {
                    (true, _, true, _) => "┌",
                    (_, true, true, _) => "┐",
                    (true, _, _, true) => "└",
                    (_, true, _, true) => "┘",
                    (_, _, true, _) | (_, _, _, true) => "─",
                    (true, _, _, _) | (_, true, _, _) => "│",
                    _ => continue,
                };
                if let Some(cell) = surface.get_mut(col, row) {
                    cell.symbol = symbol.to_string();
                    cell.fg = outline;
                }
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let fg = self.text_color;
        let surface = self.target();

        for (line_no, line) in text.split('\n').enumerate() {
            let row = y.saturating_add(i32::try_from(line_no).unwrap_or(i32::MAX));
            let mut col = x;
            for grapheme in line.graphemes(true) {
                let width = i32::try_from(grapheme.width()).unwrap_or(0);
                if width == 0 {
                    continue;
                }
                if let Some(cell) = surface.get_mut(col, row) {
                    cell.symbol = grapheme.to_string();
                    cell.fg = fg;
                }
                if width == 2 {
                    if let Some(cell) = surface.get_mut(col.saturating_add(1), row) {
                        cell.symbol.clear();
                    }
                }
                col = col.saturating_add(width);
            }
        }
    }

    fn init_off_screen(&mut self, width: u32, height: u32) {
        self.off_screen.push(Surface::new(width, height));
    }

    #[allow(clippy::cast_possible_wrap)]
    fn flush_off_screen(&mut self, x: i32, y: i32) {
        let Some(layer) = self.off_screen.pop() else {
            tracing::warn!("flush_off_screen without a matching init_off_screen");
            return;
        };

        let target = self.target();
        for (i, cell) in layer.cells.into_iter().enumerate() {
            let col = (i % layer.width as usize) as i32;
            let row = (i / layer.width as usize) as i32;
            if let Some(dst) = target.get_mut(x.saturating_add(col), y.saturating_add(row)) {
                *dst = cell;
            }
        }
    }
}
