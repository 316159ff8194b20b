//! Input translation: crossterm terminal events to toolkit events.
//!
//! Terminal cells are the coordinate unit, so a `Canvas` of the terminal's
//! size and a tree laid out in cells line up one to one.

use crossterm::event::{self, KeyEventKind, MouseEventKind};

use crate::event::{Event, ScrollStep};

/// Convert one terminal event.
///
/// Any mouse button counts as a press or release; drags are moves. Wheel
/// turns and the PageUp/PageDown keys become scroll steps, which should be
/// injected at a scrollbar since managers never hand scroll events to their
/// scrollbars. Everything else yields `None`.
pub fn translate(ev: &event::Event) -> Option<Event> {
    match ev {
        event::Event::Mouse(mouse) => translate_mouse(mouse),
        event::Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                event::KeyCode::PageUp => Some(Event::step(ScrollStep::PageUp)),
                event::KeyCode::PageDown => Some(Event::step(ScrollStep::PageDown)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn translate_mouse(mouse: &event::MouseEvent) -> Option<Event> {
    let (x, y) = (i32::from(mouse.column), i32::from(mouse.row));
    match mouse.kind {
        MouseEventKind::Down(_) => Some(Event::press(x, y)),
        MouseEventKind::Up(_) => Some(Event::release(x, y)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Event::motion(x, y)),
        MouseEventKind::ScrollUp => Some(Event::step(ScrollStep::Up)),
        MouseEventKind::ScrollDown => Some(Event::step(ScrollStep::Down)),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    };

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> event::Event {
        event::Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> event::Event {
        event::Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_mouse_buttons_and_motion() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 7)),
            Some(Event::press(3, 7))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Up(MouseButton::Right), 3, 7)),
            Some(Event::release(3, 7))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 9, 1)),
            Some(Event::motion(9, 1))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Moved, 0, 0)),
            Some(Event::motion(0, 0))
        );
    }

    #[test]
    fn test_wheel_and_page_keys_become_steps() {
        assert_eq!(
            translate(&mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(Event::step(ScrollStep::Down))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::ScrollUp, 0, 0)),
            Some(Event::step(ScrollStep::Up))
        );
        assert_eq!(
            translate(&key(KeyCode::PageDown, KeyEventKind::Press)),
            Some(Event::step(ScrollStep::PageDown))
        );
        assert_eq!(
            translate(&key(KeyCode::PageUp, KeyEventKind::Press)),
            Some(Event::step(ScrollStep::PageUp))
        );
    }

    #[test]
    fn test_everything_else_is_dropped() {
        assert_eq!(translate(&key(KeyCode::PageDown, KeyEventKind::Release)), None);
        assert_eq!(translate(&key(KeyCode::Char('q'), KeyEventKind::Press)), None);
        assert_eq!(translate(&mouse(MouseEventKind::ScrollLeft, 0, 0)), None);
        assert_eq!(translate(&event::Event::Resize(80, 24)), None);
        assert_eq!(translate(&event::Event::FocusGained), None);
    }
}
