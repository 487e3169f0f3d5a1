use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

mod validate;

pub use validate::*;

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or contact us directly.";

/// Values a visitor typed into the contact form.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl InquiryDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn validate(&self) -> ValidationOutcome {
        validate(self)
    }
}

/// Outcome of a single dispatch, as returned by the server action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub delivered: bool,
    pub user_message: String,
}

impl DispatchResult {
    pub fn delivered() -> Self {
        Self {
            delivered: true,
            user_message: SUCCESS_MESSAGE.to_owned(),
        }
    }

    pub fn failed() -> Self {
        Self::rejected(FAILURE_MESSAGE)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            delivered: false,
            user_message: message.into(),
        }
    }
}

impl From<Rejection> for DispatchResult {
    fn from(value: Rejection) -> Self {
        Self::rejected(value.to_string())
    }
}
