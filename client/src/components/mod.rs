//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the marketing site's sections. Only the get-in-touch
//! section and the select dropdown hold local state; everything else renders
//! its props.

pub mod banner;
pub mod blog_section;
pub mod button;
pub mod captcha;
pub mod form_field;
pub mod get_in_touch;
pub mod icons;
pub mod thank_you_modal;
pub mod title_description;
