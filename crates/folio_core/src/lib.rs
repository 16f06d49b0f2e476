//! Core rendering logic for the Folio portfolio page.
//! This crate owns the tag filter, section dispatch and overlay state; the
//! host platform only reports events and paints the produced markup.

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod render;
pub mod source;
pub mod ui;

pub use config::{ConfigError, ContentTrust, RenderConfig};
pub use filter::{collect_tag_universe, TagButton, TagFilter, ToggleOutcome};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::media::{MediaImage, MediaValue};
pub use model::project::{Project, SectionEntry, SectionSlot, Sections};
pub use model::section::{resolve_section, section_def, SectionDef, SectionKind, SECTION_DEFS};
pub use render::card::{Card, CardGrid, GridSummary};
pub use render::markup::escape_html;
pub use render::media::{extract_video_id, render_media_block, LightboxTarget};
pub use render::section::{render_section, render_sections};
pub use source::{load_projects_from_path, load_projects_from_str, SourceError};
pub use ui::document::DocumentState;
pub use ui::lightbox::{LightboxController, ThumbnailListener};
pub use ui::modal::{BodyElement, ModalContent, ModalController};
pub use ui::page::{Key, LightboxClick, ModalClick, Page, UiEvent};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
