//! Document-level presentation state shared by the overlays.

use chrono::Datelike;

/// State that lives on the document rather than on one overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    /// Background scrolling is suppressed while set. Owned by the modal.
    pub scroll_locked: bool,
    /// Year shown in the page footer.
    pub footer_year: i32,
}

impl DocumentState {
    /// Creates document state stamped with the current local year.
    pub fn new() -> Self {
        Self::with_year(chrono::Local::now().year())
    }

    pub fn with_year(footer_year: i32) -> Self {
        Self {
            scroll_locked: false,
            footer_year,
        }
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}
