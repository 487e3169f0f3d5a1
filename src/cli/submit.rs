use anyhow::Result;
use elics_contact::{ContactForm, DispatchClient, FeedbackKind, HttpDispatchClient};
use elics_notification::Dispatcher;
use elics_shared::{Field, InquiryDraft};
use strum::VariantArray;

pub async fn submit(
    config: elics::config::Config,
    draft: InquiryDraft,
    url: Option<String>,
) -> Result<()> {
    match url {
        Some(url) => {
            let client = HttpDispatchClient::new(&url)?;
            tracing::info!(endpoint = %client.endpoint(), "Submitting to remote server");
            run(ContactForm::new(client), draft).await
        }
        None => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            let dispatcher = Dispatcher::from_config(&config.email)?;
            run(ContactForm::new(dispatcher), draft).await
        }
    }
}

async fn run<C: DispatchClient>(form: ContactForm<C>, draft: InquiryDraft) -> Result<()> {
    for field in Field::VARIANTS {
        form.set_field(*field, draft.get(*field));
    }

    let status = form.submit().await?;
    let view = form.view();

    match view.feedback {
        Some(feedback) if feedback.kind == FeedbackKind::Success => {
            tracing::info!(%status, "{}", feedback.message);
        }
        Some(feedback) => {
            tracing::error!(%status, "{}", feedback.message);
            anyhow::bail!(feedback.message);
        }
        None => tracing::info!(%status, "Nothing to report"),
    }

    Ok(())
}
