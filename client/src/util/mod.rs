//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (fetch-on-mount,
//! timers, scrolling) and text formatting from page and component markup.

pub mod binding;
pub mod format;
pub mod markdown;
pub mod scroll;
