use axum::{
    Router,
    routing::{get, post},
};
use elics_notification::Dispatcher;
use tower_http::trace::TraceLayer;

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/contact", post(contact::action))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
