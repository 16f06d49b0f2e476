//! Render configuration.
//!
//! # Responsibility
//! - Hold the presentation knobs shared by every renderer.
//! - Decode an optional JSON override file; missing keys take defaults.
//!
//! # Invariants
//! - Unknown keys are rejected so typos do not silently fall back.
//! - `ContentTrust::Trusted` keeps text verbatim; `Untrusted` escapes it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_MEDIA_PREFIX: &str = "media/";
const DEFAULT_VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const DEFAULT_STAGGER_STEP_MS: u32 = 50;

/// Trust boundary of the project data source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTrust {
    /// Local, author-controlled data. Text is interpolated as-is.
    #[default]
    Trusted,
    /// Text may carry markup from outside; every field is HTML-escaped.
    Untrusted,
}

/// Presentation settings consumed by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Prepended to hero and gallery image paths.
    pub media_prefix: String,
    /// Prepended to the extracted video id in the embed frame.
    pub video_embed_base: String,
    pub content_trust: ContentTrust,
    /// Entrance delay added per card index. Cosmetic only.
    pub stagger_step_ms: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            media_prefix: DEFAULT_MEDIA_PREFIX.to_string(),
            video_embed_base: DEFAULT_VIDEO_EMBED_BASE.to_string(),
            content_trust: ContentTrust::default(),
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
        }
    }
}

impl RenderConfig {
    /// Decodes a configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }

    /// Reads and decodes a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(raw.as_str())
    }

    /// Joins a data-relative media path onto the configured prefix.
    pub fn media_url(&self, relative: &str) -> String {
        format!("{}{}", self.media_prefix, relative)
    }
}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not valid configuration JSON.
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid render config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}
