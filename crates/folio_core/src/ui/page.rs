//! Page context and event dispatch.
//!
//! # Responsibility
//! - Own every piece of mutable UI state for one page session.
//! - Route host events to the filter, grid, modal and lightbox.
//!
//! # Invariants
//! - Card visibility and the result note are recomputed after every filter
//!   mutation.
//! - The lightbox is open only while the modal is open.
//! - Escape closes both overlays unconditionally.

use log::{debug, info};

use super::document::DocumentState;
use super::lightbox::LightboxController;
use super::modal::{BodyElement, ModalController};
use crate::config::RenderConfig;
use crate::filter::{TagFilter, ToggleOutcome};
use crate::model::project::Project;
use crate::render::card::{CardGrid, GridSummary};

/// Keyboard key reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Maps a platform key name (`KeyboardEvent.key`) to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Self::Escape,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Click targets of the modal overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The backdrop itself, outside the content area.
    Backdrop,
    CloseButton,
    /// Anywhere inside the content area; body clicks carry the element hit.
    Content(BodyElement),
}

/// Click targets of the lightbox overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxClick {
    Backdrop,
    CloseButton,
    Image,
}

/// Event reported by the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    TagClicked(String),
    ClearClicked,
    /// Card click carrying the card's `data-id`.
    CardClicked(String),
    Modal(ModalClick),
    Lightbox(LightboxClick),
    KeyDown(Key),
}

/// All UI state of one page session.
#[derive(Debug, Clone)]
pub struct Page {
    config: RenderConfig,
    projects: Vec<Project>,
    filter: TagFilter,
    grid: CardGrid,
    summary: GridSummary,
    modal: ModalController,
    lightbox: LightboxController,
    document: DocumentState,
}

impl Page {
    /// Builds tag controls and cards, then applies the empty filter.
    pub fn new(projects: Vec<Project>, config: RenderConfig) -> Self {
        Self::with_document(projects, config, DocumentState::new())
    }

    pub fn with_document(
        projects: Vec<Project>,
        config: RenderConfig,
        document: DocumentState,
    ) -> Self {
        let filter = TagFilter::from_projects(&projects);
        let mut grid = CardGrid::build(&projects, &config);
        let summary = grid.apply_filter(&filter);
        info!(
            "event=page_init module=ui status=ok projects={} tags={}",
            projects.len(),
            filter.buttons().len()
        );
        Self {
            config,
            projects,
            filter,
            grid,
            summary,
            modal: ModalController::new(),
            lightbox: LightboxController::new(),
            document,
        }
    }

    /// Applies one host event.
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::TagClicked(tag) => {
                if self.filter.toggle(tag.as_str()) != ToggleOutcome::UnknownTag {
                    self.refresh_grid();
                }
            }
            UiEvent::ClearClicked => {
                self.filter.clear();
                self.refresh_grid();
            }
            UiEvent::CardClicked(id) => self.open_project(id.as_str()),
            UiEvent::Modal(ModalClick::Backdrop | ModalClick::CloseButton) => self.close_modal(),
            UiEvent::Modal(ModalClick::Content(element)) => {
                self.modal.delegate_body_click(element, &mut self.lightbox);
            }
            UiEvent::Lightbox(LightboxClick::Backdrop | LightboxClick::CloseButton) => {
                self.lightbox.close();
            }
            UiEvent::Lightbox(LightboxClick::Image) => {}
            UiEvent::KeyDown(Key::Escape) => {
                self.lightbox.close();
                self.modal.close(&mut self.document);
            }
            UiEvent::KeyDown(Key::Other(_)) => {}
        }
    }

    /// Opens the modal for the project with `id`. Unknown ids are ignored.
    pub fn open_project(&mut self, id: &str) {
        let Some(project) = self.projects.iter().find(|project| project.id == id) else {
            debug!("event=card_click module=ui status=ignored reason=unknown_project");
            return;
        };
        self.modal.open(project, &self.config, &mut self.document);
    }

    fn close_modal(&mut self) {
        self.lightbox.close();
        self.modal.close(&mut self.document);
    }

    fn refresh_grid(&mut self) {
        self.summary = self.grid.apply_filter(&self.filter);
        debug!(
            "event=grid_filter module=ui status=ok visible={} total={}",
            self.summary.visible, self.summary.total
        );
    }

    /// Result note for the current filter state.
    pub fn results_note(&self) -> String {
        self.filter
            .results_note(self.summary.visible, self.summary.total)
    }

    pub fn summary(&self) -> GridSummary {
        self.summary
    }

    pub fn filter(&self) -> &TagFilter {
        &self.filter
    }

    pub fn grid(&self) -> &CardGrid {
        &self.grid
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Grid markup for the current visibility state.
    pub fn grid_html(&self) -> String {
        self.grid.to_html(&self.config)
    }
}
