//! REST call to the remote assistant endpoint.
//!
//! Client-side (browser): real HTTP via `gloo-net`.
//! Native (unit tests, non-WASM hosts): stubs returning a transport error so
//! the session records its fallback instead of crashing.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and unsuccessful envelopes all
//! surface as [`ChatError`] values; the session layer maps every one of
//! them to the same fallback message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ChatError;
use super::types::AssistantReply;
#[cfg(any(test, feature = "browser"))]
use super::types::ChatEnvelope;
use crate::state::session::ChatMessage;

#[cfg(any(test, feature = "browser"))]
fn chat_endpoint(backend_url: &str) -> String {
    let base = backend_url.trim_end_matches('/');
    format!("{base}/api/chat")
}

/// Serialize prior conversation turns for the optional `history` request
/// field. Only role and text cross the wire; internal ids and product
/// attachments stay client-side.
#[must_use]
pub fn history_payload(messages: &[ChatMessage]) -> serde_json::Value {
    let turns = messages
        .iter()
        .map(|message| {
            serde_json::json!({
                "role": message.role.as_str(),
                "content": message.text,
            })
        })
        .collect::<Vec<_>>();
    serde_json::Value::Array(turns)
}

#[cfg(any(test, feature = "browser"))]
fn validate_envelope(envelope: ChatEnvelope) -> Result<AssistantReply, ChatError> {
    if !envelope.success {
        let reason = envelope
            .error
            .unwrap_or_else(|| "backend reported failure".to_owned());
        return Err(ChatError::Rejected(reason));
    }
    let Some(body) = envelope.response else {
        return Err(ChatError::Rejected("missing response body".to_owned()));
    };
    let Some(text) = body.message.filter(|message| !message.is_empty()) else {
        return Err(ChatError::Rejected("missing reply message".to_owned()));
    };
    Ok(AssistantReply {
        text,
        product: body.product,
        products: body.products.unwrap_or_default(),
    })
}

/// Send one user message to `POST {backend_url}/api/chat` and validate the
/// response envelope.
///
/// # Errors
///
/// Returns a [`ChatError`] for transport failures, non-2xx statuses, bodies
/// that fail to parse, and envelopes without a usable reply.
pub async fn send_chat_message(
    backend_url: &str,
    message: &str,
    history: Option<serde_json::Value>,
) -> Result<AssistantReply, ChatError> {
    #[cfg(feature = "browser")]
    {
        let mut payload = serde_json::json!({ "message": message });
        if let Some(history) = history {
            payload["history"] = history;
        }

        let resp = gloo_net::http::Request::post(&chat_endpoint(backend_url))
            .json(&payload)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }

        let envelope: ChatEnvelope = resp
            .json()
            .await
            .map_err(|e| ChatError::Malformed(e.to_string()))?;
        validate_envelope(envelope)
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (backend_url, message, history);
        Err(ChatError::Transport("not available outside the browser".to_owned()))
    }
}
