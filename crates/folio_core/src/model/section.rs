//! Section definition registry and loose value interpretation.
//!
//! # Responsibility
//! - Map known section ids to a display title and rendering kind.
//! - Interpret a loosely typed section value according to a kind.
//!
//! # Invariants
//! - The registry is static configuration and never changes at runtime.
//! - Registry order is the canonical display order for keyed sections.
//! - Unknown ids resolve to a text section titled with the raw id.

use serde_json::Value;

use super::media::MediaValue;

/// Rendering strategy of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Single paragraph.
    Text,
    /// Unordered list, one item per entry.
    List,
    /// Video frame and image thumbnails.
    Media,
}

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: SectionKind,
}

/// Section id for the project overview paragraph.
pub const SECTION_OVERVIEW: &str = "overview";
/// Section id for the role paragraph.
pub const SECTION_ROLE: &str = "role";
/// Section id for the technical focus list.
pub const SECTION_TECHNICAL: &str = "technical";
/// Section id for the design decisions paragraph.
pub const SECTION_DECISIONS: &str = "decisions";
/// Section id for the collaboration paragraph.
pub const SECTION_COLLABORATION: &str = "collaboration";
/// Section id for the outcomes list.
pub const SECTION_OUTCOMES: &str = "outcomes";
/// Section id for the media block.
pub const SECTION_MEDIA: &str = "media";

/// Known sections in canonical display order.
pub const SECTION_DEFS: &[SectionDef] = &[
    SectionDef {
        id: SECTION_OVERVIEW,
        title: "Project Overview",
        kind: SectionKind::Text,
    },
    SectionDef {
        id: SECTION_ROLE,
        title: "My Role & Engagement",
        kind: SectionKind::Text,
    },
    SectionDef {
        id: SECTION_TECHNICAL,
        title: "Technical Focus",
        kind: SectionKind::List,
    },
    SectionDef {
        id: SECTION_DECISIONS,
        title: "Key Design Decisions & Tradeoffs",
        kind: SectionKind::Text,
    },
    SectionDef {
        id: SECTION_COLLABORATION,
        title: "Collaboration & Context",
        kind: SectionKind::Text,
    },
    SectionDef {
        id: SECTION_OUTCOMES,
        title: "Outcomes & Learning",
        kind: SectionKind::List,
    },
    SectionDef {
        id: SECTION_MEDIA,
        title: "Media",
        kind: SectionKind::Media,
    },
];

/// Looks up a known section definition.
pub fn section_def(id: &str) -> Option<&'static SectionDef> {
    SECTION_DEFS.iter().find(|def| def.id == id)
}

/// Title and kind used to render one section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSection<'a> {
    pub title: &'a str,
    pub kind: SectionKind,
}

/// Resolves a section id, degrading unknown ids to a text section titled
/// with the id itself.
pub fn resolve_section(id: &str) -> ResolvedSection<'_> {
    match section_def(id) {
        Some(def) => ResolvedSection {
            title: def.title,
            kind: def.kind,
        },
        None => ResolvedSection {
            title: id,
            kind: SectionKind::Text,
        },
    }
}

/// Interprets a value as paragraph text.
///
/// Falsy values (`null`, `false`, `0`, `""`) and objects yield `None`.
/// Arrays render their items joined by `,`.
pub fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) | Value::Object(_) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Array(items) => Some(
            items
                .iter()
                .map(display_scalar)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(display_scalar(other)),
    }
}

/// Interprets a value as list items in input order.
///
/// A lone non-empty scalar becomes a one-item list; `null`, empty values and
/// objects yield no items. `null` entries inside a list are skipped.
pub fn list_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(display_scalar)
            .collect(),
        Value::Null | Value::Object(_) => Vec::new(),
        scalar => text_value(scalar).into_iter().collect(),
    }
}

/// Interprets a value as a media payload. Non-objects and objects that do
/// not decode as media yield `None`.
pub fn media_value(value: &Value) -> Option<MediaValue> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
