//! Local UI state for sections and widgets.
//!
//! DESIGN
//! ======
//! Each module is plain data with synchronous transitions. Components wrap
//! these in `RwSignal`s; keeping the transitions here makes them testable
//! without a browser.

pub mod accordion;
pub mod carousel;
pub mod contact_form;
pub mod marquee;
pub mod playback;
pub mod search;
pub mod section;
pub mod toast;
