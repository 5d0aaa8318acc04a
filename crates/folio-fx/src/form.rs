//! Contact form validation and submission outcomes
//!
//! Validation is all-fields: every field gets a status, so the shell can
//! mark each one valid or invalid in a single pass. Only a fully valid
//! submission may reach the network.

use core::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::notify::Severity;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Minimum message length after trimming
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Shown when validation blocks a submission
pub const INVALID_FORM_MESSAGE: &str = "Please fill in all fields correctly before sending.";

/// Shown after an accepted submission
pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Label shown on the submit button while the request is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// A contact form field, in form order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name` attribute of the input
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Outcome of validating one field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

impl FieldStatus {
    /// Value for the field's `aria-invalid` attribute
    pub fn aria_invalid(self) -> &'static str {
        match self {
            FieldStatus::Valid => "false",
            FieldStatus::Invalid => "true",
        }
    }
}

/// Raw values read from the form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Value of one field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Validate one field
    pub fn check(&self, field: Field) -> FieldStatus {
        let value = self.value(field).trim();
        let ok = match field {
            Field::Name | Field::Subject => !value.is_empty(),
            Field::Email => is_valid_email(value),
            Field::Message => value.chars().count() >= MIN_MESSAGE_CHARS,
        };
        if ok {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    /// Validate every field
    pub fn validate(&self) -> ValidationReport {
        let mut statuses = [FieldStatus::Valid; 4];
        for (slot, field) in statuses.iter_mut().zip(Field::ALL) {
            *slot = self.check(field);
        }
        ValidationReport { statuses }
    }
}

/// Simple `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Per-field validation result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    statuses: [FieldStatus; 4],
}

impl ValidationReport {
    /// Status of one field
    pub fn status(&self, field: Field) -> FieldStatus {
        let index = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
        self.statuses[index]
    }

    /// Fields paired with their status, in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldStatus)> + '_ {
        Field::ALL.into_iter().zip(self.statuses.iter().copied())
    }

    /// Whether submission may proceed
    pub fn is_valid(&self) -> bool {
        self.statuses.iter().all(|s| *s == FieldStatus::Valid)
    }

    /// Fields that failed
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, status)| *status == FieldStatus::Invalid)
            .map(|(field, _)| field)
            .collect()
    }
}

/// Why a submission did not go through
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status
    Rejected { status: u16, detail: Option<String> },
    /// The request never completed (offline, DNS, CORS)
    Transport(String),
    /// The request was aborted after the configured timeout
    Timeout,
}

impl SubmitError {
    /// Message shown to the visitor
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected {
                detail: Some(detail),
                ..
            } => format!("Oops! {}", detail),
            SubmitError::Rejected { .. } => {
                "Oops! There was a problem sending your message. Please try again.".to_string()
            }
            SubmitError::Transport(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            SubmitError::Timeout => "The request timed out. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected { status, detail } => {
                write!(f, "Rejected with status {}", status)?;
                if let Some(detail) = detail {
                    write!(f, ": {}", detail)?;
                }
                Ok(())
            }
            SubmitError::Transport(msg) => write!(f, "Transport error: {}", msg),
            SubmitError::Timeout => write!(f, "Timed out"),
        }
    }
}

/// Classify an HTTP status; `body` is the JSON response text if any
///
/// Understands the `{ "errors": [{ "message": "..." }] }` shape form
/// endpoints commonly return on rejection.
pub fn classify_response(status: u16, body: Option<&str>) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let detail = body.and_then(rejection_detail);
    Err(SubmitError::Rejected { status, detail })
}

#[derive(Deserialize)]
struct RejectionBody {
    #[serde(default)]
    errors: Vec<RejectionItem>,
}

#[derive(Deserialize)]
struct RejectionItem {
    message: String,
}

fn rejection_detail(body: &str) -> Option<String> {
    let parsed: RejectionBody = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}

/// Notification for a finished submission
pub fn outcome_notification(outcome: &Result<(), SubmitError>) -> (String, Severity) {
    match outcome {
        Ok(()) => (SENT_MESSAGE.to_string(), Severity::Success),
        Err(e) => (e.user_message(), Severity::Info),
    }
}
