use elics_shared::InquiryDraft;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(
    EnumString, Display, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// Succeeded and Failed only drive rendering; they never block input.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Serialize, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }
}

/// Snapshot handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub status: SubmissionStatus,
    pub feedback: Option<Feedback>,
    pub draft: InquiryDraft,
}

impl FormView {
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }
}
