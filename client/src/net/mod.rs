//! Content provider client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls against the provider; `types` ties each shared
//! record type to the content kind it is read from.

pub mod api;
pub mod types;
