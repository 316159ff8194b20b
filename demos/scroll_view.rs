//! Scroll View Demo: a text viewport framed by two scrollbars.
//!
//! Drag the thumbs, click the arrows or the tracks, or use the wheel and
//! PageUp/PageDown to scroll the vertical bar.
//!
//! Press 'q' or Escape to quit. Run with `RUST_LOG=windowkit=debug` and
//! redirect stderr to a file to watch the event traffic.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing_subscriber::EnvFilter;
use windowkit::{
    input, Canvas, Color, Event, Rect, ScrollbarConfig, TextWindow, ToolkitConfig, Widget,
    WindowId, WindowTree,
};

const LINES: usize = 200;

/// Restores the terminal however `main` exits.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn sample_text() -> (String, u32, u32) {
    let lines: Vec<String> = (1..=LINES)
        .map(|n| {
            format!(
                "{n:>4} | {}",
                "the quick brown fox jumps over the lazy dog ".repeat(1 + n % 4)
            )
        })
        .collect();
    let width = lines.iter().map(String::len).max().unwrap_or(0);
    let width = u32::try_from(width).unwrap_or(u32::MAX);
    let height = u32::try_from(lines.len()).unwrap_or(u32::MAX);
    (lines.join("\n"), width, height)
}

struct View {
    tree: WindowTree,
    manager: WindowId,
    text: WindowId,
    content: (u32, u32),
}

impl View {
    fn new() -> windowkit::Result<Self> {
        let config = ToolkitConfig::default().with_scrollbar(ScrollbarConfig {
            element_size: 1,
            line_step: 1,
            default_length: 10,
        });
        let mut tree = WindowTree::with_config(config);
        let manager = tree.insert_scrollbar_manager(true, true);

        let (body, width, height) = sample_text();
        let mut text = TextWindow::new(Rect::ZERO);
        text.set_text(body);
        let text = tree.insert(text);
        tree.attach_child(manager, text)?;

        let bars = tree
            .widget(manager)
            .and_then(Widget::as_scrollbar_manager)
            .map(|m| m.scrollbars())
            .unwrap_or_default();
        for bar in bars.into_iter().flatten() {
            tree.set_scrollbar_background_color(bar, Color::rgb(60, 60, 70))?;
            tree.set_scrollbar_hover_color(bar, Color::rgb(110, 110, 130))?;
            tree.set_scrollbar_press_color(bar, Color::rgb(170, 170, 200))?;
        }

        Ok(Self {
            tree,
            manager,
            text,
            content: (width, height),
        })
    }

    /// Fit the viewport to a `cols` x `rows` terminal, leaving the last
    /// column and row for the scrollbars.
    fn layout(&mut self, cols: u16, rows: u16) -> windowkit::Result<()> {
        let width = u32::from(cols).saturating_sub(1);
        let height = u32::from(rows).saturating_sub(1);
        let (content_w, content_h) = self.content;

        if let Some(text) = self.tree.widget_mut(self.text).and_then(Widget::as_text_mut) {
            text.rectangle.set_size(width, height);
            let span_x = i32::try_from(content_w.saturating_sub(width)).unwrap_or(i32::MAX);
            let span_y = i32::try_from(content_h.saturating_sub(height)).unwrap_or(i32::MAX);
            text.set_viewport_span(span_x, span_y);
            text.set_viewport_position(0, 0);
        }
        self.tree.adjust_scrollbar_size(self.manager, 0, 0, width, height)?;
        self.tree.adjust_scrollable_area_size(self.manager, content_w, content_h)
    }

    fn vertical_bar(&self) -> Option<WindowId> {
        self.tree
            .widget(self.manager)
            .and_then(Widget::as_scrollbar_manager)
            .and_then(windowkit::ScrollbarManager::vertical)
    }

    fn dispatch(&mut self, ev: &Event) {
        // Scroll steps never reach a manager's scrollbars; aim them at the
        // vertical one directly.
        let target = match ev {
            Event::Scroll(_) => self.vertical_bar().unwrap_or(self.manager),
            _ => self.manager,
        };
        self.tree.process_event(target, ev);
    }

    fn render(&self, canvas: &mut Canvas, out: &mut impl Write) -> io::Result<()> {
        canvas.clear();
        self.tree.draw(self.manager, canvas);
        canvas.write_to(out)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut view = View::new()?;
    let (cols, rows) = terminal::size()?;
    view.layout(cols, rows)?;
    let mut canvas = Canvas::new(u32::from(cols), u32::from(rows));

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    view.render(&mut canvas, &mut stdout)?;

    loop {
        let raw = event::read()?;
        match &raw {
            event::Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) =>
            {
                break;
            }
            event::Event::Resize(cols, rows) => {
                view.layout(*cols, *rows)?;
                canvas.resize(u32::from(*cols), u32::from(*rows));
            }
            _ => {
                if let Some(ev) = input::translate(&raw) {
                    view.dispatch(&ev);
                }
            }
        }
        view.render(&mut canvas, &mut stdout)?;
    }

    tracing::info!("scroll view closed");
    Ok(())
}
