#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use elics::AppState;
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

pub struct FailingMailer;

#[async_trait::async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _notification: &Notification) -> anyhow::Result<()> {
        anyhow::bail!("421 4.3.0 smtp.internal temporary system problem")
    }
}

pub fn create_app(mailer: Arc<dyn Mailer>) -> Router {
    let dispatcher = Dispatcher::new(
        mailer,
        "ELICS Contact <noreply@elics.localhost>".parse().unwrap(),
        "inbox@elics.localhost".parse().unwrap(),
    );

    elics::router(AppState { dispatcher })
}

/// Serves the app on an ephemeral port and returns its base URL.
pub async fn spawn_app(mailer: Arc<dyn Mailer>) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = create_app(mailer);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(format!("http://{addr}"))
}
