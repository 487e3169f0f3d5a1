use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use elics_notification::{Dispatcher, Mailer, Notification};

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<Notification>>,
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(notification.clone());

        Ok(())
    }
}

#[derive(Default)]
pub struct FailingMailer {
    pub attempts: AtomicUsize,
}

#[async_trait::async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _notification: &Notification) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        anyhow::bail!("550 5.7.1 relay access denied for smtp.internal:2525")
    }
}

pub fn dispatcher(mailer: Arc<dyn Mailer>) -> Dispatcher {
    Dispatcher::new(
        mailer,
        "ELICS Contact <noreply@elics.localhost>".parse().unwrap(),
        "inbox@elics.localhost".parse().unwrap(),
    )
}
