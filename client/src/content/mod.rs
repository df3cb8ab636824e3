//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content is read through repository traits provided via Leptos context, so
//! pages never reach for a module-level constant and tests can substitute
//! their own entries.

pub mod blog;
