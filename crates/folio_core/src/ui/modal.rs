//! Project detail modal.
//!
//! # Responsibility
//! - Populate the overlay from one project record via the section renderer.
//! - Own background scroll suppression while open.
//! - Resolve clicks on the modal body into thumbnails (event delegation).
//!
//! # Invariants
//! - `open` replaces all prior content; nothing from a previous record remains.
//! - `open` resets the scroll position to the top.
//! - `close` is idempotent and restores background scrolling.

use log::debug;

use super::document::DocumentState;
use super::lightbox::ThumbnailListener;
use crate::config::RenderConfig;
use crate::model::project::Project;
use crate::render::markup::interpolate;
use crate::render::media::LightboxTarget;
use crate::render::section::render_sections;

/// Element under a click inside the modal body, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyElement {
    /// The click landed on, or inside, the thumbnail with this
    /// `data-thumb-index`.
    Thumbnail(usize),
    /// Anything that is not part of a thumbnail.
    Other,
}

/// Content currently populated into the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub project_id: String,
    /// Year label shown above the title. Plain text.
    pub eyebrow: String,
    /// Plain text.
    pub title: String,
    pub tags_html: String,
    /// Hero followed by every non-empty section.
    pub body_html: String,
    thumbnails: Vec<LightboxTarget>,
}

impl ModalContent {
    fn build(project: &Project, config: &RenderConfig) -> Self {
        let trust = config.content_trust;
        let tags_html = project
            .tags
            .iter()
            .map(|tag| format!("<span class=\"modal-tag\">{}</span>", interpolate(trust, tag)))
            .collect();

        let mut body_html = String::new();
        if let Some(hero) = project.hero.as_deref() {
            body_html.push_str(&format!(
                "<div class=\"modal-hero-wrap\"><img class=\"modal-hero\" src=\"{}\" alt=\"{}\"></div>",
                interpolate(trust, &config.media_url(hero)),
                interpolate(trust, project.title.as_str())
            ));
        }
        let mut thumbnails = Vec::new();
        body_html.push_str(&render_sections(&project.sections, config, &mut thumbnails));

        Self {
            project_id: project.id.clone(),
            eyebrow: project.year.clone(),
            title: project.title.clone(),
            tags_html,
            body_html,
            thumbnails,
        }
    }

    /// Thumbnails rendered into the body, indexed by `data-thumb-index`.
    pub fn thumbnails(&self) -> &[LightboxTarget] {
        &self.thumbnails
    }
}

/// Open/closed lifecycle of the detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    open: bool,
    scroll_top: u32,
    content: Option<ModalContent>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the overlay from `project` and shows it.
    pub fn open(&mut self, project: &Project, config: &RenderConfig, document: &mut DocumentState) {
        let content = ModalContent::build(project, config);
        debug!(
            "event=modal_open module=ui status=ok thumbnails={}",
            content.thumbnails.len()
        );
        self.content = Some(content);
        self.open = true;
        self.scroll_top = 0;
        document.scroll_locked = true;
    }

    /// Hides the overlay and restores background scrolling.
    pub fn close(&mut self, document: &mut DocumentState) {
        if self.open {
            debug!("event=modal_close module=ui status=ok");
        }
        self.open = false;
        document.scroll_locked = false;
    }

    /// Forwards a body click to `listener` when it resolves to a thumbnail.
    ///
    /// Returns whether a thumbnail was hit.
    pub fn delegate_body_click(
        &self,
        element: BodyElement,
        listener: &mut impl ThumbnailListener,
    ) -> bool {
        let BodyElement::Thumbnail(index) = element else {
            return false;
        };
        if !self.open {
            return false;
        }
        match self
            .content
            .as_ref()
            .and_then(|content| content.thumbnails.get(index))
        {
            Some(target) => {
                listener.on_thumbnail(target);
                true
            }
            None => {
                debug!("event=modal_body_click module=ui status=ignored reason=unknown_thumbnail");
                false
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    /// Records the overlay scroll offset reported by the host.
    pub fn set_scroll_top(&mut self, offset: u32) {
        self.scroll_top = offset;
    }
}
