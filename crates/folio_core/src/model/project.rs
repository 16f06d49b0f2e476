//! Project record domain model.
//!
//! # Responsibility
//! - Define the canonical portfolio entry handed over by the data source.
//! - Normalize both accepted `sections` shapes into one ordered sequence.
//!
//! # Invariants
//! - `tags` decodes `null` and absent values as an empty list.
//! - `hero` decodes `""` as absent.
//! - Keyed sections follow registry order; ordered sections keep their own.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::section::SECTION_DEFS;
use super::{blank_as_none, each_decodable, null_as_default};

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, exposed on the card as `data-id`.
    pub id: String,
    pub title: String,
    /// Display label; numeric years are kept in their textual form.
    #[serde(default, deserialize_with = "year_label")]
    pub year: String,
    #[serde(default)]
    pub excerpt: String,
    /// Display order is preserved; filtering ignores it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Hero image path relative to the media prefix.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub hero: Option<String>,
    #[serde(default)]
    pub sections: Sections,
}

impl Project {
    /// Creates a record with no hero, no excerpt and no sections.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: String::new(),
            excerpt: String::new(),
            tags: Vec::new(),
            hero: None,
            sections: Sections::default(),
        }
    }
}

/// Body sections in one of the two accepted shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sections {
    /// Explicit `{id, value}` pairs; this order is authoritative. Entries
    /// without a string `id` are dropped without affecting their siblings.
    Ordered(#[serde(deserialize_with = "each_decodable")] Vec<SectionEntry>),
    /// Mapping from section id to value; rendered in registry order.
    Keyed(Map<String, Value>),
    /// Any other shape. Renders no sections.
    Unsupported(Value),
}

impl Default for Sections {
    fn default() -> Self {
        Self::Unsupported(Value::Null)
    }
}

/// One explicit section of the ordered shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    #[serde(default)]
    pub value: Value,
}

/// Borrowed `{id, value}` pair produced by [`Sections::entries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSlot<'a> {
    pub id: &'a str,
    pub value: &'a Value,
}

impl Sections {
    /// Normalizes either shape into the ordered sequence to render.
    ///
    /// Keyed ids that are not in the registry are dropped, since only the
    /// registry defines an order for them.
    pub fn entries(&self) -> Vec<SectionSlot<'_>> {
        match self {
            Self::Ordered(entries) => entries
                .iter()
                .map(|entry| SectionSlot {
                    id: entry.id.as_str(),
                    value: &entry.value,
                })
                .collect(),
            Self::Keyed(map) => SECTION_DEFS
                .iter()
                .filter_map(|def| map.get(def.id).map(|value| SectionSlot { id: def.id, value }))
                .collect(),
            Self::Unsupported(_) => Vec::new(),
        }
    }

    /// Returns whether the shape was neither a sequence nor a mapping.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

fn year_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(label) => label,
        other => other.to_string(),
    })
}
