//! Page chrome state: nav bar background and active nav entry.
//!
//! DESIGN
//! ======
//! Kept apart from `chat` so the scroll listener never re-renders the chat
//! widget.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset, in CSS pixels, past which the nav bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// UI state for the page shell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Window scrolled past `SCROLL_THRESHOLD_PX`.
    pub scrolled: bool,
    /// Title of the nav link last clicked.
    pub active_nav: Option<&'static str>,
}

impl UiState {
    /// Record a new window scroll offset. Returns `true` if `scrolled` flipped.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let next = is_past_threshold(scroll_y);
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }
}

pub fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}
