//! Overlay controllers and the page-level event context.
//!
//! The host platform reports clicks and key presses as [`page::UiEvent`]
//! values; every transition here is synchronous and headless.

pub mod document;
pub mod lightbox;
pub mod modal;
pub mod page;
