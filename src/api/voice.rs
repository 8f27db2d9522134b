//! Voice assistant endpoint.
//!
//! Accepts a text utterance, derives a reply with a single keyword check,
//! and logs both sides of the exchange. Each request is independent; no
//! session or multi-turn context exists despite the conversational framing.

use axum::{Form, Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::api::ApiError;
use crate::domain::Language;

/// Create the voice assistant router.
pub fn router() -> Router<AppState> {
    Router::new().route("/voice-assistant", post(process_voice))
}

/// Canned reply when the utterance mentions an emergency.
const EMERGENCY_REPLY: &str = "I've detected an emergency. Help is on the way!";

/// Voice assistant request (urlencoded form).
#[derive(Debug, Deserialize)]
pub struct VoiceRequest {
    /// The utterance text.
    pub text: String,
    /// Language tag, recorded with each turn. Unknown tags are rejected by
    /// deserialization before the handler runs.
    #[serde(default)]
    pub language: Language,
    /// Identifier of the speaking user.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "user1".to_string()
}

/// Voice assistant response.
#[derive(Debug, Serialize)]
pub struct VoiceResponse {
    pub input_text: String,
    pub response: String,
}

/// Derive the assistant reply for an utterance.
///
/// Pure function of the text: a case-insensitive `emergency` substring
/// yields the canned alert reply, anything else is echoed back.
fn derive_response(text: &str) -> String {
    if text.to_lowercase().contains("emergency") {
        EMERGENCY_REPLY.to_string()
    } else {
        format!("I understood: {text}. How can I help you further?")
    }
}

/// Process a voice utterance and log the user/assistant turn pair.
async fn process_voice(
    State(state): State<AppState>,
    Form(req): Form<VoiceRequest>,
) -> Result<Json<VoiceResponse>, ApiError> {
    tracing::info!("Received text input ({}): {}", req.language, req.text);

    let response = derive_response(&req.text);

    state
        .storage
        .record_exchange(
            req.user_id,
            req.language,
            req.text.clone(),
            response.clone(),
        )
        .await?;

    Ok(Json(VoiceResponse {
        input_text: req.text,
        response,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emergency_keyword_is_detected_in_any_case() {
        for text in [
            "emergency",
            "EMERGENCY",
            "Emergency now",
            "I need help, this is an emergency!",
        ] {
            assert_eq!(derive_response(text), EMERGENCY_REPLY);
        }
    }

    #[test]
    fn other_utterances_are_echoed_verbatim() {
        assert_eq!(
            derive_response("What time is it?"),
            "I understood: What time is it?. How can I help you further?"
        );
        assert_eq!(
            derive_response(""),
            "I understood: . How can I help you further?"
        );
    }

    #[test]
    fn language_and_user_id_default_when_absent() {
        let req: VoiceRequest = serde_urlencoded::from_str("text=hello").unwrap();
        assert_eq!(req.language, Language::EnUs);
        assert_eq!(req.user_id, "user1");
    }

    #[test]
    fn unknown_language_tag_fails_deserialization() {
        assert!(serde_urlencoded::from_str::<VoiceRequest>("text=hi&language=fr-FR").is_err());
    }
}
