//! Project data source loading.
//!
//! # Responsibility
//! - Decode the externally supplied project collection from JSON.
//! - Enforce collection-level invariants before anything is rendered.
//!
//! # Invariants
//! - Ids are non-empty after trimming and unique across the collection.
//! - Collection order is preserved exactly as supplied.

use log::{error, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::model::project::Project;

/// Accepted top-level document shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectDocument {
    List(Vec<Project>),
    Wrapped { projects: Vec<Project> },
}

/// Data source loading errors.
#[derive(Debug)]
pub enum SourceError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not a project list.
    Parse(serde_json::Error),
    /// A record has a blank id; carries its collection index.
    EmptyId(usize),
    /// Two records share an id.
    DuplicateId(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read projects `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid project data: {err}"),
            Self::EmptyId(index) => write!(f, "project at index {index} has an empty id"),
            Self::DuplicateId(id) => write!(f, "duplicate project id: `{id}`"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Decodes and validates a project collection.
///
/// Accepts either a top-level array or an object with a `projects` array.
pub fn load_projects_from_str(raw: &str) -> Result<Vec<Project>, SourceError> {
    let started_at = Instant::now();
    let result = serde_json::from_str::<ProjectDocument>(raw)
        .map_err(SourceError::from)
        .and_then(|document| {
            let projects = match document {
                ProjectDocument::List(projects) => projects,
                ProjectDocument::Wrapped { projects } => projects,
            };
            validate_projects(&projects)?;
            Ok(projects)
        });

    match &result {
        Ok(projects) => info!(
            "event=projects_load module=source status=ok count={} duration_ms={}",
            projects.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=projects_load module=source status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Reads a project file and decodes it with [`load_projects_from_str`].
pub fn load_projects_from_path(path: impl AsRef<Path>) -> Result<Vec<Project>, SourceError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_projects_from_str(raw.as_str())
}

/// Checks collection-level invariants.
pub fn validate_projects(projects: &[Project]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(projects.len());
    for (index, project) in projects.iter().enumerate() {
        if project.id.trim().is_empty() {
            return Err(SourceError::EmptyId(index));
        }
        if !seen.insert(project.id.as_str()) {
            return Err(SourceError::DuplicateId(project.id.clone()));
        }
    }
    Ok(())
}
