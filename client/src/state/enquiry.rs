//! Enquiry form state and its submission lifecycle.
//!
//! DESIGN
//! ======
//! The section's lifecycle is a single [`SubmissionPhase`] value instead of
//! separate loading/success flags, so "loading and succeeded" cannot both be
//! true. Validation runs over every required field in one pass and records
//! one message per failing field.
//!
//! A rejected submission lives in [`SubmissionPhase::Failed`], apart from the
//! CAPTCHA validation message, but both render in the slot under the CAPTCHA
//! widget (see [`EnquiryState::captcha_slot_message`]).

#[cfg(test)]
#[path = "enquiry_test.rs"]
mod enquiry_test;

use std::str::FromStr;

use crate::net::types::EnquiryRequest;

/// User-editable enquiry fields, all required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnquiryField {
    FullName,
    PhoneNumber,
    Email,
    ServiceType,
    Message,
}

impl EnquiryField {
    /// Validation order.
    pub const ALL: [Self; 5] = [
        Self::FullName,
        Self::PhoneNumber,
        Self::Email,
        Self::ServiceType,
        Self::Message,
    ];

    /// Form control name, matching the wire key.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
            Self::ServiceType => "serviceType",
            Self::Message => "message",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            Self::FullName => "Please enter your full name.",
            Self::PhoneNumber => "Please enter your phone number.",
            Self::Email => "Please enter your email address.",
            Self::ServiceType => "Please select a service type.",
            Self::Message => "Please enter a message.",
        }
    }
}

/// A form control name that is not an enquiry field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enquiry field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for EnquiryField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

/// Reasons a submit attempt is stopped before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("{}", .0.missing_message())]
    MissingRequiredField(EnquiryField),

    #[error("Please complete the reCAPTCHA verification.")]
    MissingCaptcha,
}

/// Controlled values of the enquiry form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryForm {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub service_type: String,
    pub message: String,
    pub referer_url: String,
    pub submitted_url: String,
}

impl EnquiryForm {
    /// Empty form with both URL fields captured from `location`.
    pub fn new(location: &str) -> Self {
        Self {
            referer_url: location.to_owned(),
            submitted_url: location.to_owned(),
            ..Self::default()
        }
    }

    pub fn value(&self, field: EnquiryField) -> &str {
        match field {
            EnquiryField::FullName => &self.full_name,
            EnquiryField::PhoneNumber => &self.phone_number,
            EnquiryField::Email => &self.email,
            EnquiryField::ServiceType => &self.service_type,
            EnquiryField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: EnquiryField) -> &mut String {
        match field {
            EnquiryField::FullName => &mut self.full_name,
            EnquiryField::PhoneNumber => &mut self.phone_number,
            EnquiryField::Email => &mut self.email,
            EnquiryField::ServiceType => &mut self.service_type,
            EnquiryField::Message => &mut self.message,
        }
    }

    fn to_request(&self, recaptcha_token: &str) -> EnquiryRequest {
        EnquiryRequest {
            full_name: self.full_name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            service_type: self.service_type.clone(),
            message: self.message.clone(),
            referer_url: self.referer_url.clone(),
            submitted_url: self.submitted_url.clone(),
            recaptcha_token: recaptcha_token.to_owned(),
        }
    }
}

/// Per-field validation messages; empty string means no error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub service_type: String,
    pub message: String,
    pub recaptcha: String,
}

impl FieldErrors {
    pub fn get(&self, field: EnquiryField) -> &str {
        match field {
            EnquiryField::FullName => &self.full_name,
            EnquiryField::PhoneNumber => &self.phone_number,
            EnquiryField::Email => &self.email,
            EnquiryField::ServiceType => &self.service_type,
            EnquiryField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        EnquiryField::ALL.into_iter().all(|f| self.get(f).is_empty()) && self.recaptcha.is_empty()
    }

    fn slot_mut(&mut self, field: EnquiryField) -> &mut String {
        match field {
            EnquiryField::FullName => &mut self.full_name,
            EnquiryField::PhoneNumber => &mut self.phone_number,
            EnquiryField::Email => &mut self.email,
            EnquiryField::ServiceType => &mut self.service_type,
            EnquiryField::Message => &mut self.message,
        }
    }

    fn record(&mut self, issue: ValidationIssue) {
        let slot = match issue {
            ValidationIssue::MissingRequiredField(field) => self.slot_mut(field),
            ValidationIssue::MissingCaptcha => &mut self.recaptcha,
        };
        *slot = issue.to_string();
    }
}

/// Where the section is in its submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    /// Request accepted; the confirmation modal is visible.
    Succeeded,
    /// Request rejected with a visitor-facing message.
    Failed(String),
}

/// Check every required field and the CAPTCHA token, collecting all issues.
///
/// # Errors
///
/// Returns every [`ValidationIssue`] found, in field order with the CAPTCHA last.
pub fn validate(form: &EnquiryForm, captcha_token: &str) -> Result<(), Vec<ValidationIssue>> {
    let mut issues: Vec<ValidationIssue> = EnquiryField::ALL
        .into_iter()
        .filter(|field| form.value(*field).is_empty())
        .map(ValidationIssue::MissingRequiredField)
        .collect();
    if captcha_token.is_empty() {
        issues.push(ValidationIssue::MissingCaptcha);
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Full state owned by the get-in-touch section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryState {
    pub form: EnquiryForm,
    pub captcha_token: String,
    pub errors: FieldErrors,
    pub phase: SubmissionPhase,
}

impl EnquiryState {
    pub fn new(location: &str) -> Self {
        Self { form: EnquiryForm::new(location), ..Self::default() }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn confirmation_open(&self) -> bool {
        self.phase == SubmissionPhase::Succeeded
    }

    /// Store an edited value and clear that field's error.
    pub fn set_field(&mut self, field: EnquiryField, value: String) {
        *self.form.value_mut(field) = value;
        self.errors.slot_mut(field).clear();
    }

    /// Store the token reported by the CAPTCHA widget (empty on expiry).
    pub fn set_captcha_token(&mut self, token: String) {
        if !token.is_empty() {
            self.errors.recaptcha.clear();
        }
        self.captcha_token = token;
    }

    /// Validate and, when everything is present, enter `Submitting`.
    ///
    /// Returns the request to send, or `None` when validation failed or a
    /// request is already in flight.
    pub fn begin_submit(&mut self) -> Option<EnquiryRequest> {
        if self.is_submitting() {
            return None;
        }
        self.errors = FieldErrors::default();
        if let Err(issues) = validate(&self.form, &self.captcha_token) {
            for issue in issues {
                self.errors.record(issue);
            }
            self.phase = SubmissionPhase::Editing;
            return None;
        }
        self.phase = SubmissionPhase::Submitting;
        Some(self.form.to_request(&self.captcha_token))
    }

    /// Reset after an accepted submission; URLs are re-captured from `location`.
    pub fn complete_success(&mut self, location: &str) {
        if !self.is_submitting() {
            return;
        }
        self.form = EnquiryForm::new(location);
        self.captcha_token.clear();
        self.errors = FieldErrors::default();
        self.phase = SubmissionPhase::Succeeded;
    }

    /// Record a rejected submission; values and field errors are kept.
    pub fn complete_failure(&mut self, message: impl Into<String>) {
        if !self.is_submitting() {
            return;
        }
        self.phase = SubmissionPhase::Failed(message.into());
    }

    /// Close the confirmation modal.
    pub fn dismiss_confirmation(&mut self) {
        if self.confirmation_open() {
            self.phase = SubmissionPhase::Editing;
        }
    }

    /// Message rendered under the CAPTCHA widget, if any.
    pub fn captcha_slot_message(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Failed(message) => Some(message.as_str()),
            _ if !self.errors.recaptcha.is_empty() => Some(self.errors.recaptcha.as_str()),
            _ => None,
        }
    }
}
