//! Full-image lightbox overlay.
//!
//! # Invariants
//! - Opening never touches background scroll suppression.
//! - Closing clears the image source so no stale image is retained.
//! - `close` is idempotent.

use log::debug;

use crate::render::media::LightboxTarget;

/// Receives thumbnails resolved by a delegated click on the modal body.
pub trait ThumbnailListener {
    fn on_thumbnail(&mut self, target: &LightboxTarget);
}

/// Open/closed lifecycle of the lightbox overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxController {
    open: bool,
    src: String,
    caption: String,
}

impl LightboxController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `src` with an optional caption.
    pub fn open(&mut self, src: &str, caption: Option<&str>) {
        self.src = src.to_string();
        self.caption = caption.unwrap_or("").to_string();
        self.open = true;
        debug!("event=lightbox_open module=ui status=ok");
    }

    /// Hides the overlay and drops the image source.
    pub fn close(&mut self) {
        if self.open {
            debug!("event=lightbox_close module=ui status=ok");
        }
        self.open = false;
        self.src.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current image source; empty while closed.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Alternative text of the image mirrors the caption.
    pub fn alt(&self) -> &str {
        &self.caption
    }
}

impl ThumbnailListener for LightboxController {
    fn on_thumbnail(&mut self, target: &LightboxTarget) {
        self.open(target.src.as_str(), target.caption.as_deref());
    }
}
