//! Configuration for trees and the widgets they create.

/// Scrollbar geometry and stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarConfig {
    /// Size of the step buttons along both axes, and the scrollbar's
    /// thickness across its axis.
    pub element_size: u32,
    /// Slider movement for one line step.
    pub line_step: i32,
    /// Track length given to scrollbars a manager creates before its first
    /// `adjust_scrollbar_size`.
    pub default_length: u32,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            element_size: 25,
            line_step: 10,
            default_length: 100,
        }
    }
}

/// Configuration for a [`WindowTree`](crate::WindowTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolkitConfig {
    /// Scrollbar settings.
    pub scrollbar: ScrollbarConfig,
}

impl ToolkitConfig {
    /// Replace the scrollbar settings.
    #[must_use]
    pub const fn with_scrollbar(mut self, scrollbar: ScrollbarConfig) -> Self {
        self.scrollbar = scrollbar;
        self
    }
}
