//! Networking modules for the enquiry backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON wire schema the
//! enquiry backend expects.

pub mod api;
pub mod types;
