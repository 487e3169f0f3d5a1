use std::{
    str::FromStr,
    sync::{Mutex, MutexGuard, PoisonError},
};

use elics_shared::{Error, FAILURE_MESSAGE, Field, InquiryDraft, Result, ValidationOutcome};
use tokio::sync::Semaphore;

use crate::{DispatchClient, Feedback, FormView, SubmissionStatus};

#[derive(Default)]
struct FormState {
    draft: InquiryDraft,
    status: SubmissionStatus,
    feedback: Option<Feedback>,
}

/// Client side of the contact form.
///
/// Holds the draft and the submission status. The single-permit semaphore
/// guarantees at most one dispatch in flight per form; the state lock is
/// never held across the dispatch await.
pub struct ContactForm<C> {
    client: C,
    state: Mutex<FormState>,
    in_flight: Semaphore,
}

impl<C: DispatchClient> ContactForm<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(FormState::default()),
            in_flight: Semaphore::new(1),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state();
        state.draft.set(field, value);

        if state.status.is_terminal() {
            state.status = SubmissionStatus::Idle;
        }
    }

    pub fn set_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = Field::from_str(name).map_err(|_| Error::UnknownField(name.to_owned()))?;
        self.set_field(field, value);

        Ok(())
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state().status
    }

    pub fn view(&self) -> FormView {
        let state = self.state();

        FormView {
            status: state.status,
            feedback: state.feedback.clone(),
            draft: state.draft.clone(),
        }
    }

    /// Validates the current draft and, when it passes, dispatches it.
    ///
    /// Returns the status reached. A rejected draft leaves the form `Idle`
    /// with the rejection as feedback. Calling this while a dispatch is
    /// pending fails with [`Error::SubmissionInFlight`] and never reaches the
    /// client.
    pub async fn submit(&self) -> Result<SubmissionStatus> {
        let Ok(_permit) = self.in_flight.try_acquire() else {
            tracing::warn!("submit ignored, a dispatch is already in flight");

            return Err(Error::SubmissionInFlight);
        };

        let draft = {
            let mut state = self.state();

            if let ValidationOutcome::Invalid(rejection) = state.draft.validate() {
                state.status = SubmissionStatus::Idle;
                state.feedback = Some(Feedback::error(rejection.to_string()));

                return Ok(state.status);
            }

            state.status = SubmissionStatus::Submitting;
            state.feedback = None;
            state.draft.clone()
        };

        let outcome = self.client.dispatch(&draft).await;

        let mut state = self.state();

        match outcome {
            Ok(result) if result.delivered => {
                state.status = SubmissionStatus::Succeeded;
                state.draft = InquiryDraft::default();
                state.feedback = Some(Feedback::success(result.user_message));
            }
            Ok(result) => {
                let message = if result.user_message.is_empty() {
                    FAILURE_MESSAGE.to_owned()
                } else {
                    result.user_message
                };

                state.status = SubmissionStatus::Failed;
                state.feedback = Some(Feedback::error(message));
            }
            Err(err) => {
                tracing::error!(error = %err, "contact dispatch failed in transport");

                state.status = SubmissionStatus::Failed;
                state.feedback = Some(Feedback::error(FAILURE_MESSAGE));
            }
        }

        Ok(state.status)
    }
}
