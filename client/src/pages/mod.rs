//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages only compose sections in order inside the shared `Layout`. Anything
//! with state lives in `components` or `state`.

pub mod blog;
pub mod contact;
pub mod destinations;
pub mod home;
pub mod hotel;
pub mod not_found;
pub mod packages;
pub mod rentals;
pub mod search;
pub mod services;
