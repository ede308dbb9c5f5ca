//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and widgets. Content-bound sections read
//! through `util::binding`; widgets own their local state signals and read
//! the toast queue from context.

pub mod cards;
pub mod contact_form;
pub mod content_sections;
pub mod faq_section;
pub mod hero;
pub mod layout;
pub mod logo_marquee;
pub mod search_bar;
pub mod services_grid;
pub mod spinner;
pub mod testimonials;
pub mod toaster;
pub mod video_testimonial;
