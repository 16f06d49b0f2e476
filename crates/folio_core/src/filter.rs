//! Tag filter state.
//!
//! # Responsibility
//! - Derive the sorted tag universe from all project records.
//! - Own the active tag set and the marked state of every tag control.
//! - Produce the human-readable result note.
//!
//! # Invariants
//! - The tag universe is distinct and lexicographically sorted (case-sensitive).
//! - A card matches iff the active set is empty or a subset of its tags.
//! - The active set keeps selection order and mirrors the marked controls.

use log::debug;
use std::collections::BTreeSet;

use crate::model::project::Project;

/// One tag control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagButton {
    pub tag: String,
    /// Marked while the tag is in the active set.
    pub active: bool,
}

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Activated,
    Deactivated,
    /// The tag has no control; nothing changed.
    UnknownTag,
}

/// Returns the distinct tags of all projects in lexicographic order.
pub fn collect_tag_universe(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|project| project.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Active tag selection plus its controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    buttons: Vec<TagButton>,
    active: Vec<String>,
}

impl TagFilter {
    /// Builds one unmarked control per distinct tag.
    pub fn from_projects(projects: &[Project]) -> Self {
        let buttons = collect_tag_universe(projects)
            .into_iter()
            .map(|tag| TagButton { tag, active: false })
            .collect();
        Self {
            buttons,
            active: Vec::new(),
        }
    }

    /// Flips one tag in or out of the active set.
    pub fn toggle(&mut self, tag: &str) -> ToggleOutcome {
        let Some(button) = self.buttons.iter_mut().find(|button| button.tag == tag) else {
            debug!("event=tag_toggle module=filter status=ignored reason=unknown_tag");
            return ToggleOutcome::UnknownTag;
        };

        let outcome = if let Some(pos) = self.active.iter().position(|active| active == tag) {
            self.active.remove(pos);
            button.active = false;
            ToggleOutcome::Deactivated
        } else {
            self.active.push(tag.to_string());
            button.active = true;
            ToggleOutcome::Activated
        };
        debug!(
            "event=tag_toggle module=filter status=ok outcome={:?} active_count={}",
            outcome,
            self.active.len()
        );
        outcome
    }

    /// Empties the active set and unmarks every control.
    pub fn clear(&mut self) {
        self.active.clear();
        for button in &mut self.buttons {
            button.active = false;
        }
        debug!("event=tag_clear module=filter status=ok");
    }

    /// Tag controls in universe order.
    pub fn buttons(&self) -> &[TagButton] {
        &self.buttons
    }

    /// Active tags in selection order.
    pub fn active_tags(&self) -> &[String] {
        &self.active
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active.iter().any(|active| active == tag)
    }

    /// The clear control is shown only while a filter is active.
    pub fn clear_visible(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns whether a card with `tags` passes the current selection.
    pub fn matches<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.active
            .iter()
            .all(|active| tags.iter().any(|tag| tag.as_ref() == active))
    }

    /// Builds the result note for `visible` of `total` cards.
    pub fn results_note(&self, visible: usize, total: usize) -> String {
        if self.active.is_empty() {
            format!(
                "Showing all {total} projects — click any card to read more, or filter by tag above."
            )
        } else {
            format!(
                "Showing {visible} of {total} projects matching: {}.",
                self.active.join(", ")
            )
        }
    }
}
