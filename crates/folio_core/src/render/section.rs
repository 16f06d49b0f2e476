//! Section renderer.
//!
//! # Responsibility
//! - Dispatch one `{id, value}` pair to the text, list or media strategy.
//! - Suppress the whole wrapper, title included, when a section has no content.
//!
//! # Invariants
//! - Unknown ids render as text titled with the id; they never fail.
//! - A media `label` replaces the registry title.

use log::debug;
use serde_json::Value;

use super::markup::interpolate;
use super::media::{render_media_block, LightboxTarget};
use crate::config::RenderConfig;
use crate::model::project::Sections;
use crate::model::section::{list_value, media_value, resolve_section, text_value, SectionKind};

/// Renders one section, or `None` when it has nothing to show.
pub fn render_section(
    id: &str,
    value: &Value,
    config: &RenderConfig,
    thumbnails: &mut Vec<LightboxTarget>,
) -> Option<String> {
    let resolved = resolve_section(id);
    let trust = config.content_trust;

    let (title, inner) = match resolved.kind {
        SectionKind::Text => {
            let text = text_value(value)?;
            let inner = format!("<p class=\"modal-text\">{}</p>", interpolate(trust, &text));
            (resolved.title.to_string(), inner)
        }
        SectionKind::List => {
            let items = list_value(value);
            if items.is_empty() {
                return None;
            }
            let mut inner = String::from("<ul class=\"modal-list\">");
            for item in &items {
                inner.push_str(&format!("<li>{}</li>", interpolate(trust, item)));
            }
            inner.push_str("</ul>");
            (resolved.title.to_string(), inner)
        }
        SectionKind::Media => {
            let media = media_value(value)?;
            let inner = render_media_block(&media, config, thumbnails);
            if inner.is_empty() {
                return None;
            }
            let title = media.label.unwrap_or_else(|| resolved.title.to_string());
            (title, inner)
        }
    };

    let class = if resolved.kind == SectionKind::Media {
        "modal-section modal-media-section"
    } else {
        "modal-section"
    };
    Some(format!(
        "<div class=\"{class}\"><div class=\"modal-section-title\">{}</div>{inner}</div>",
        interpolate(trust, &title)
    ))
}

/// Renders every non-empty section of a project body in display order.
pub fn render_sections(
    sections: &Sections,
    config: &RenderConfig,
    thumbnails: &mut Vec<LightboxTarget>,
) -> String {
    if sections.is_unsupported() {
        debug!("event=sections_render module=render status=skipped reason=unsupported_shape");
        return String::new();
    }

    sections
        .entries()
        .into_iter()
        .filter_map(|slot| render_section(slot.id, slot.value, config, thumbnails))
        .collect()
}
