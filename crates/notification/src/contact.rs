use std::sync::Arc;

use askama::Template;
use elics_shared::{DispatchResult, InquiryDraft, ValidationOutcome};
use lettre::message::Mailbox;

use crate::{
    EmailConfig, Mailer, Notification, SmtpMailer,
    template::{InquiryHtmlTemplate, InquiryPlainTemplate},
};

/// Server side of the contact form: re-validates a draft, composes the
/// notification and hands it to the mailer exactly once.
#[derive(Clone)]
pub struct Dispatcher {
    mailer: Arc<dyn Mailer>,
    sender: Mailbox,
    destination: Mailbox,
}

impl Dispatcher {
    pub fn new(mailer: Arc<dyn Mailer>, sender: Mailbox, destination: Mailbox) -> Self {
        Self {
            mailer,
            sender,
            destination,
        }
    }

    pub fn from_config(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = SmtpMailer::new(config)?;

        Ok(Self::new(
            Arc::new(mailer),
            config.sender()?,
            config.destination()?,
        ))
    }

    pub fn compose(&self, draft: &InquiryDraft) -> anyhow::Result<Notification> {
        let html = InquiryHtmlTemplate::from(draft).render()?;
        let plain = InquiryPlainTemplate::from(draft).render()?;

        Ok(Notification {
            from: self.sender.clone(),
            to: self.destination.clone(),
            reply_to: Mailbox::new(None, draft.email.parse()?),
            subject: format!("New Contact Form Submission from {}", draft.name),
            html,
            plain,
        })
    }

    #[tracing::instrument(skip_all)]
    pub async fn dispatch(&self, draft: &InquiryDraft) -> DispatchResult {
        if let ValidationOutcome::Invalid(rejection) = draft.validate() {
            tracing::debug!(%rejection, "contact inquiry rejected");

            return rejection.into();
        }

        let notification = match self.compose(draft) {
            Ok(notification) => notification,
            Err(err) => {
                tracing::error!(error = %err, "failed to compose contact notification");

                return DispatchResult::failed();
            }
        };

        match self.mailer.send(&notification).await {
            Ok(()) => {
                tracing::info!("contact notification delivered");

                DispatchResult::delivered()
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to deliver contact notification");

                DispatchResult::failed()
            }
        }
    }
}
