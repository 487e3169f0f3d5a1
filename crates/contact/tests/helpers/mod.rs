#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use elics_contact::DispatchClient;
use elics_notification::{Dispatcher, Mailer, Notification};
use elics_shared::{DispatchResult, InquiryDraft};
use tokio::sync::Notify;

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

pub struct FailingMailer;

#[async_trait::async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _notification: &Notification) -> anyhow::Result<()> {
        anyhow::bail!("connection reset by smtp.internal:2525")
    }
}

pub fn dispatcher(mailer: Arc<dyn Mailer>) -> Dispatcher {
    Dispatcher::new(
        mailer,
        "ELICS Contact <noreply@elics.localhost>".parse().unwrap(),
        "inbox@elics.localhost".parse().unwrap(),
    )
}

/// Client that holds every dispatch until `release` is called.
#[derive(Default)]
pub struct GatedClient {
    pub calls: AtomicUsize,
    pub started: Notify,
    pub gate: Notify,
}

impl GatedClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait::async_trait]
impl DispatchClient for GatedClient {
    async fn dispatch(&self, _draft: &InquiryDraft) -> anyhow::Result<DispatchResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.gate.notified().await;

        Ok(DispatchResult::delivered())
    }
}

/// Client whose transport always breaks.
#[derive(Default)]
pub struct BrokenClient {
    pub calls: AtomicUsize,
}

#[async_trait::async_trait]
impl DispatchClient for BrokenClient {
    async fn dispatch(&self, _draft: &InquiryDraft) -> anyhow::Result<DispatchResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        anyhow::bail!("error sending request for url (http://127.0.0.1:9/contact)")
    }
}
