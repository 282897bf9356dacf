//! Local UI chrome state (sidebar visibility, color-scheme flag).
//!
//! DESIGN
//! ======
//! Keeps the page's two transient booleans in one model shared through a
//! Leptos context, so the top bar and sidebar can flip flags the shell
//! layout reads.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Expanded sidebar width in CSS pixels. The main column offsets by the
/// same amount while the sidebar is open.
pub const SIDEBAR_WIDTH_PX: f64 = 280.0;

/// UI state for the dashboard shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true, dark_mode: false }
    }
}

impl UiState {
    /// Flip sidebar visibility.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Flip the color-scheme flag.
    ///
    /// The flag only swaps the toggle's moon/sun glyph for now; no theme
    /// class is applied anywhere in the tree.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Current sidebar width, which doubles as the main-column left offset.
    #[must_use]
    pub fn sidebar_width_px(&self) -> f64 {
        if self.sidebar_open { SIDEBAR_WIDTH_PX } else { 0.0 }
    }
}
