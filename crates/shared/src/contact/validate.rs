use std::sync::LazyLock;

use regex::Regex;

use super::InquiryDraft;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Please fill in all required fields.")]
    MissingRequiredField,

    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Rejection),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(rejection) => Err(rejection),
        }
    }
}

/// Runs the contact form rules in order and stops at the first failure.
///
/// Both the form controller and the dispatcher call this; the dispatcher's
/// call is the one that gates delivery. `phone` is never checked.
pub fn validate(draft: &InquiryDraft) -> ValidationOutcome {
    if draft.name.is_empty() || draft.email.is_empty() || draft.message.is_empty() {
        return ValidationOutcome::Invalid(Rejection::MissingRequiredField);
    }

    if !EMAIL_SHAPE.is_match(&draft.email) {
        return ValidationOutcome::Invalid(Rejection::InvalidEmailFormat);
    }

    ValidationOutcome::Valid
}
