//! Emergency alert endpoint.

use axum::{Form, Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::api::ApiError;

/// Create the emergency router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/emergency", post(trigger_emergency))
}

/// Alert message used when the caller supplies none.
const DEFAULT_MESSAGE: &str = "Help! I need immediate assistance";

/// Emergency alert request (urlencoded form).
#[derive(Debug, Deserialize)]
pub struct EmergencyRequest {
    /// Identifier of the user raising the alert. Uninterpreted, but required
    /// and non-empty.
    pub user_id: String,
    /// Alert message.
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

/// Fixed acknowledgement body.
#[derive(Debug, Serialize)]
pub struct EmergencyResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Record an emergency alert.
///
/// The only observable effect is one appended row with `status = "sent"`;
/// no paging or SMS is dispatched.
async fn trigger_emergency(
    State(state): State<AppState>,
    Form(req): Form<EmergencyRequest>,
) -> Result<Json<EmergencyResponse>, ApiError> {
    if req.user_id.is_empty() {
        return Err(ApiError::Validation(
            "user_id must not be empty".to_string(),
        ));
    }

    state
        .storage
        .record_emergency(req.user_id, req.message)
        .await?;

    Ok(Json(EmergencyResponse {
        status: "success",
        message: "Emergency alert logged",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_defaults_to_the_fixed_sentence() {
        let req: EmergencyRequest = serde_urlencoded::from_str("user_id=u1").unwrap();
        assert_eq!(req.user_id, "u1");
        assert_eq!(req.message, "Help! I need immediate assistance");
    }

    #[test]
    fn missing_user_id_fails_deserialization() {
        assert!(serde_urlencoded::from_str::<EmergencyRequest>("message=hi").is_err());
    }
}
