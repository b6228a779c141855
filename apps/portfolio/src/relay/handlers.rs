use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::relay::{send_contact, ContactRequest};
use crate::state::AppState;

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<Value>, AppError> {
    req.validate()?;
    send_contact(state.relay.as_ref(), &state.contact, &req).await?;
    Ok(Json(json!({ "status": "sent" })))
}
