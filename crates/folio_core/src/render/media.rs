//! Media block renderer.
//!
//! # Responsibility
//! - Turn an optional video reference and images into modal markup.
//! - Record every rendered thumbnail so the modal body can resolve
//!   delegated clicks into lightbox targets.
//!
//! # Invariants
//! - Video id extraction never fails; unmatched input is used verbatim.
//! - Thumbnail indices are unique within one modal body.
//! - No video and no images yields an empty string.

use once_cell::sync::Lazy;
use regex::Regex;

use super::markup::interpolate;
use crate::config::RenderConfig;
use crate::model::media::{MediaImage, MediaValue};

static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:v=|youtu\.be/|embed/)([a-zA-Z0-9_-]{11})").expect("valid video id regex")
});

/// Image that a thumbnail opens in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxTarget {
    /// Full-resolution source, already joined with the media prefix.
    pub src: String,
    pub caption: Option<String>,
}

/// Extracts the 11-character video id from a watch, short or embed URL.
///
/// Input that matches none of those shapes is returned unchanged.
pub fn extract_video_id(raw: &str) -> &str {
    VIDEO_ID_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str())
}

/// Renders the media block, appending rendered thumbnails to `thumbnails`.
pub fn render_media_block(
    media: &MediaValue,
    config: &RenderConfig,
    thumbnails: &mut Vec<LightboxTarget>,
) -> String {
    let mut content = String::new();

    if let Some(youtube) = media.youtube.as_deref() {
        let video_id = interpolate(config.content_trust, extract_video_id(youtube));
        content.push_str(&format!(
            "<div class=\"modal-video-wrap\"><iframe src=\"{}{}\" allowfullscreen loading=\"lazy\"></iframe></div>",
            config.video_embed_base, video_id
        ));
    }

    match media.images.as_slice() {
        [] => {}
        [single] => {
            content.push_str("<div class=\"modal-media-single-wrap\">");
            push_figure(&mut content, single, config, thumbnails);
            content.push_str("</div>");
        }
        many => {
            content.push_str("<div class=\"modal-media-grid\">");
            for image in many {
                content.push_str("<div>");
                push_figure(&mut content, image, config, thumbnails);
                content.push_str("</div>");
            }
            content.push_str("</div>");
        }
    }

    content
}

fn push_figure(
    out: &mut String,
    image: &MediaImage,
    config: &RenderConfig,
    thumbnails: &mut Vec<LightboxTarget>,
) {
    let trust = config.content_trust;
    let src = config.media_url(image.src.as_str());
    let caption = image.caption.as_deref().unwrap_or("");
    let index = thumbnails.len();

    out.push_str(&format!(
        "<img class=\"modal-media-thumb\" src=\"{src}\" alt=\"{caption}\" data-lightbox-src=\"{src}\" data-lightbox-caption=\"{caption}\" data-thumb-index=\"{index}\" loading=\"lazy\">",
        src = interpolate(trust, src.as_str()),
        caption = interpolate(trust, caption),
    ));
    if let Some(caption) = image.caption.as_deref() {
        out.push_str(&format!(
            "<div class=\"modal-media-caption\">{}</div>",
            interpolate(trust, caption)
        ));
    }

    thumbnails.push(LightboxTarget {
        src,
        caption: image.caption.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::extract_video_id;

    #[test]
    fn extracts_id_from_each_url_shape() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=3"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(extract_video_id("https://youtu.be/abc12345678"), "abc12345678");
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/A_b-C_d-E_f?rel=0"),
            "A_b-C_d-E_f"
        );
    }

    #[test]
    fn unmatched_input_is_used_verbatim() {
        assert_eq!(extract_video_id("rawid12345x"), "rawid12345x");
        assert_eq!(extract_video_id("https://youtu.be/short"), "https://youtu.be/short");
    }
}
