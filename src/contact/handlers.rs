use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::contact::dto::{ContactRequest, ContactResponse};
use crate::contact::repo::ContactMessage;
use crate::error::ApiError;
use crate::state::AppState;

pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact/submit", post(submit))
}

/// Persist one contact-form submission. No dedup, no rate limiting; email
/// dispatch is an external collaborator's job. Store failures surface as a
/// generic 500, never the underlying error.
#[instrument(skip(state, payload))]
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let form = payload.validate().map_err(ApiError::validation)?;

    let saved = ContactMessage::create(
        &state.db,
        &form.name,
        &form.email,
        form.phone.as_deref(),
        &form.subject,
        &form.message,
    )
    .await?;

    info!(contact_id = %saved.id, "contact message stored");
    Ok(Json(ContactResponse {
        success: true,
        data: saved,
    }))
}
