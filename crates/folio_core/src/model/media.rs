//! Media section payload.

use serde::{Deserialize, Serialize};

use super::{blank_as_none, lenient_list};

/// Value carried by a `media` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaValue {
    /// Raw video URL or bare 11-character video id.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub youtube: Option<String>,
    /// Images in display order. Entries that are not `{src, caption?}`
    /// objects are dropped individually.
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<MediaImage>,
    /// Replaces the registry title of the section when set.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub label: Option<String>,
}

impl MediaValue {
    /// Returns whether rendering this value would produce no content.
    pub fn is_empty(&self) -> bool {
        self.youtube.is_none() && self.images.is_empty()
    }
}

/// One image of a media section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaImage {
    /// Path relative to the configured media prefix.
    pub src: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub caption: Option<String>,
}
