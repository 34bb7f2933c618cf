//! Widget chrome state (launcher vs. expanded window).
//!
//! DESIGN
//! ======
//! Kept separate from `session` so chrome interactions never touch
//! conversation data — closing the window does not end the session.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Presentation state for the widget shell.
#[derive(Clone, Copy, Debug, Default)]
pub struct WidgetUiState {
    /// Whether the chat window is expanded; `false` shows the launcher.
    pub open: bool,
}

impl WidgetUiState {
    /// Flip between launcher and expanded window.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
