//! Registration form validation.
//!
//! [`evaluate`] is the pure rule engine. [`RegistrationForm`] owns the state of
//! one mounted form: raw values, error slots and the `aria-invalid` markers.

mod rules;

pub use rules::{evaluate, Evaluation, FieldName, PASSWORD_MIN_CHARS, USERNAME_MIN_CHARS};

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::{debug, info};
use std::fmt::Write;

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: String,
    error: Option<String>,
    aria_invalid: bool,
}

/// Values of a successfully submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form has been reset
    Accepted(Registration),
    /// Submission blocked; errors stay visible on these fields
    Rejected(Vec<FieldName>),
}

/// State of one registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    fields: [FieldState; 4],
}

fn index(field: FieldName) -> usize {
    match field {
        FieldName::Username => 0,
        FieldName::Email => 1,
        FieldName::Password => 2,
        FieldName::ConfirmPassword => 3,
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self, field: FieldName) -> &FieldState {
        &self.fields[index(field)]
    }

    fn state_mut(&mut self, field: FieldName) -> &mut FieldState {
        &mut self.fields[index(field)]
    }

    /// Input event: store the raw value without validating
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.state_mut(field).value = value.into();
    }

    pub fn value(&self, field: FieldName) -> &str {
        &self.state(field).value
    }

    /// Current error message shown under the field, if any
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.state(field).error.as_deref()
    }

    pub fn is_marked_invalid(&self, field: FieldName) -> bool {
        self.state(field).aria_invalid
    }

    /// Evaluate one field against the current password without touching state
    pub fn check(&self, field: FieldName) -> Evaluation {
        evaluate(field, self.value(field), self.value(FieldName::Password))
    }

    /// Re-evaluate every field, refresh error slots and markers, and return
    /// whether the whole form is valid
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in FieldName::ALL {
            let evaluation = self.check(field);
            let state = self.state_mut(field);
            if evaluation.valid {
                state.error = None;
                state.aria_invalid = false;
            } else {
                state.error = Some(evaluation.message);
                state.aria_invalid = true;
                ok = false;
            }
        }
        ok
    }

    /// Focus left `field`. Any blur re-validates the whole form, not just the
    /// field that lost focus.
    pub fn blur(&mut self, field: FieldName) -> bool {
        debug!("blur on {}, re-validating all fields", field);
        self.validate()
    }

    /// Submit gate. Nothing is sent anywhere; a valid form is accepted and reset.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            let failing: Vec<FieldName> = FieldName::ALL
                .into_iter()
                .filter(|f| self.error(*f).is_some())
                .collect();
            debug!("registration rejected: {:?}", failing);
            return SubmitOutcome::Rejected(failing);
        }

        let registration = Registration {
            username: self.value(FieldName::Username).to_string(),
            email: self.value(FieldName::Email).to_string(),
            password: self.value(FieldName::Password).to_string(),
        };
        info!("registration accepted for {} (simulated)", registration.username);
        self.reset();
        SubmitOutcome::Accepted(registration)
    }

    /// Clear all values, errors and markers
    pub fn reset(&mut self) {
        self.fields = Default::default();
    }

    pub fn is_clear(&self) -> bool {
        self.fields
            .iter()
            .all(|f| f.value.is_empty() && f.error.is_none() && !f.aria_invalid)
    }

    /// One `.form-control` group per field with its error slot. Password
    /// values are never echoed back.
    pub fn render_errors(&self) -> String {
        let mut html = String::new();
        for field in FieldName::ALL {
            let state = self.state(field);
            let (kind, value) = match field {
                FieldName::Password | FieldName::ConfirmPassword => ("password", ""),
                FieldName::Email => ("email", state.value.as_str()),
                FieldName::Username => ("text", state.value.as_str()),
            };
            let _ = write!(
                html,
                r#"<div class="form-control"><input type="{kind}" name="{name}" value="{value}"{invalid}><small class="error">{error}</small></div>"#,
                kind = kind,
                name = field.as_str(),
                value = encode_double_quoted_attribute(value),
                invalid = if state.aria_invalid {
                    r#" aria-invalid="true""#
                } else {
                    ""
                },
                error = encode_text(state.error.as_deref().unwrap_or("")),
            );
        }
        html
    }
}
