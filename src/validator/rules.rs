use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Some non-space text, an `@`, more text, a dot, more text
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Minimum lengths, counted in UTF-16 code units like a browser input's `length`
pub const USERNAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 6;

/// The registration form's inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields, in form order
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Form control name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl Evaluation {
    fn pass() -> Self {
        Evaluation {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: &str) -> Self {
        Evaluation {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Check one field's value. `password` is the current raw password and is
/// only consulted for [`FieldName::ConfirmPassword`].
///
/// Rules run in a fixed order and the first failing rule decides the message.
pub fn evaluate(field: FieldName, value: &str, password: &str) -> Evaluation {
    match field {
        FieldName::Username => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Evaluation::fail("enter username")
            } else if trimmed.encode_utf16().count() < USERNAME_MIN_CHARS {
                Evaluation::fail("min 3 chars")
            } else {
                Evaluation::pass()
            }
        }
        FieldName::Email => {
            if value.trim().is_empty() {
                Evaluation::fail("enter email")
            } else if !EMAIL_REGEX.is_match(value) {
                Evaluation::fail("invalid format")
            } else {
                Evaluation::pass()
            }
        }
        FieldName::Password => {
            // not trimmed: whitespace counts toward the length
            if value.is_empty() {
                Evaluation::fail("enter password")
            } else if value.encode_utf16().count() < PASSWORD_MIN_CHARS {
                Evaluation::fail("min 6 chars")
            } else {
                Evaluation::pass()
            }
        }
        FieldName::ConfirmPassword => {
            if value != password {
                Evaluation::fail("mismatch")
            } else {
                Evaluation::pass()
            }
        }
    }
}
