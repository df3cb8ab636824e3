//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is plain data with transition methods; components wrap it in
//! `RwSignal`s so the transitions stay testable without a browser.

pub mod dropdown;
pub mod enquiry;
