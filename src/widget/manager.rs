//! Scrollbar manager: optional horizontal and vertical scrollbars framing
//! a viewport of content children.
//!
//! The scrollbars are linked to the manager as their parent but are not in
//! its child list. `process_event` hands them every non-scroll event
//! before the children, so their buttons and sliders track the pointer;
//! scroll events only take the ordinary child path, which keeps the
//! position reports the scrollbars emit from coming back to them.

use super::Widget;
use crate::error::{Result, TreeError};
use crate::event::Axis;
use crate::window::{WindowId, WindowTree};

/// Slots for up to two scrollbars plus the last viewport size.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollbarManager {
    horizontal: Option<WindowId>,
    vertical: Option<WindowId>,
    adj_width: u32,
    adj_height: u32,
}

impl ScrollbarManager {
    /// The horizontal scrollbar, if present.
    pub const fn horizontal(&self) -> Option<WindowId> {
        self.horizontal
    }

    /// The vertical scrollbar, if present.
    pub const fn vertical(&self) -> Option<WindowId> {
        self.vertical
    }

    /// Both slots, horizontal first.
    pub const fn scrollbars(&self) -> [Option<WindowId>; 2] {
        [self.horizontal, self.vertical]
    }

    /// Viewport size from the last `adjust_scrollbar_size`.
    pub const fn viewport_size(&self) -> (u32, u32) {
        (self.adj_width, self.adj_height)
    }

    /// Empty the slot holding `id`, if any.
    pub(crate) fn forget(&mut self, id: WindowId) {
        if self.horizontal == Some(id) {
            self.horizontal = None;
        }
        if self.vertical == Some(id) {
            self.vertical = None;
        }
    }
}

/// Thumb length for a track showing `viewport` of `content` units.
///
/// The visible fraction is capped at one, so content that fits (or is
/// empty) gets a full-length thumb with no travel.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn thumb_size(viewport: u32, content: u32, track: u32) -> u32 {
    let ratio = if content == 0 {
        1.0
    } else {
        (f64::from(viewport) / f64::from(content)).min(1.0)
    };
    (ratio * f64::from(track)) as u32
}

impl WindowTree {
    /// Build a manager with the requested scrollbars, detached.
    ///
    /// Each scrollbar starts with the configured default length; call
    /// [`adjust_scrollbar_size`](Self::adjust_scrollbar_size) to frame a
    /// viewport.
    pub fn insert_scrollbar_manager(&mut self, horizontal: bool, vertical: bool) -> WindowId {
        let length = self.config().scrollbar.default_length;
        let id = self.insert(ScrollbarManager::default());

        let mut manager = ScrollbarManager::default();
        for (wanted, axis) in [(horizontal, Axis::Horizontal), (vertical, Axis::Vertical)] {
            if !wanted {
                continue;
            }
            let bar = self.insert_scrollbar(length, axis);
            self.attach_to_parent(bar, id);
            match axis {
                Axis::Horizontal => manager.horizontal = Some(bar),
                Axis::Vertical => manager.vertical = Some(bar),
            }
        }

        if let Some(Widget::ScrollbarManager(slot)) = self.widget_mut(id) {
            *slot = manager;
        }
        tracing::debug!(?id, horizontal, vertical, "scrollbar manager created");
        id
    }

    /// Frame the `width` x `height` viewport at `(x, y)`: the horizontal
    /// scrollbar runs along its bottom edge and the vertical one along its
    /// right edge, each leaving room for its step buttons.
    pub fn adjust_scrollbar_size(
        &mut self,
        id: WindowId,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let manager = {
            let manager = self.scrollbar_manager_mut(id)?;
            manager.adj_width = width;
            manager.adj_height = height;
            *manager
        };
        let buttons = self.config().scrollbar.element_size.saturating_mul(2);
        let offset = |extent: u32| i32::try_from(extent).unwrap_or(i32::MAX);

        if let Some(bar) = manager.horizontal {
            self.set_scrollbar_position(bar, x, y.saturating_add(offset(height)))?;
            self.set_scrollbar_length(bar, width.saturating_sub(buttons))?;
        }
        if let Some(bar) = manager.vertical {
            self.set_scrollbar_position(bar, x.saturating_add(offset(width)), y)?;
            self.set_scrollbar_length(bar, height.saturating_sub(buttons))?;
        }
        tracing::debug!(?id, x, y, width, height, "scrollbars framed");
        Ok(())
    }

    /// Size each slider to the visible fraction of `content_width` x
    /// `content_height` content.
    pub fn adjust_scrollable_area_size(
        &mut self,
        id: WindowId,
        content_width: u32,
        content_height: u32,
    ) -> Result<()> {
        let manager = self.scrollbar_manager(id)?;

        if let Some(bar) = manager.horizontal {
            let size = thumb_size(manager.adj_width, content_width, self.track_length(bar)?);
            self.set_slider_size(bar, size)?;
        }
        if let Some(bar) = manager.vertical {
            let size = thumb_size(manager.adj_height, content_height, self.track_length(bar)?);
            self.set_slider_size(bar, size)?;
        }
        Ok(())
    }

    fn scrollbar_manager(&self, id: WindowId) -> Result<ScrollbarManager> {
        match self.widget(id) {
            Some(Widget::ScrollbarManager(m)) => Ok(*m),
            Some(other) => Err(TreeError::WrongKind {
                id,
                expected: "scrollbar manager",
                found: other.name(),
            }),
            None => Err(TreeError::UnknownWindow(id)),
        }
    }

    fn scrollbar_manager_mut(&mut self, id: WindowId) -> Result<&mut ScrollbarManager> {
        match self.widget_mut(id) {
            Some(Widget::ScrollbarManager(m)) => Ok(m),
            Some(other) => Err(TreeError::WrongKind {
                id,
                expected: "scrollbar manager",
                found: other.name(),
            }),
            None => Err(TreeError::UnknownWindow(id)),
        }
    }
}
