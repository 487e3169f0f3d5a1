use axum::{
    Json,
    extract::{Form, State},
};
use elics_shared::{DispatchResult, InquiryDraft};

use crate::routes::AppState;

/// POST /contact - contact form server action
///
/// Always answers 200 with a `DispatchResult`; rejections and delivery
/// failures are reported in the body, never as an HTTP error.
pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<InquiryDraft>,
) -> Json<DispatchResult> {
    Json(app_state.dispatcher.dispatch(&input).await)
}
