//! Markup renderers for cards, sections and media blocks.
//!
//! Renderers are pure: the same record and configuration always produce the
//! same markup, and degraded input is omitted rather than reported.

pub mod card;
pub mod markup;
pub mod media;
pub mod section;
