use super::*;
use crate::state::session::{Role, SessionState};

fn envelope(json: serde_json::Value) -> ChatEnvelope {
    serde_json::from_value(json).expect("envelope should deserialize")
}

// =============================================================
// chat_endpoint
// =============================================================

#[test]
fn chat_endpoint_joins_backend_url() {
    assert_eq!(chat_endpoint("https://shop.example"), "https://shop.example/api/chat");
}

#[test]
fn chat_endpoint_trims_trailing_slashes() {
    assert_eq!(chat_endpoint("https://shop.example/"), "https://shop.example/api/chat");
    assert_eq!(chat_endpoint("https://shop.example//"), "https://shop.example/api/chat");
}

#[test]
fn chat_endpoint_with_empty_base_is_same_origin() {
    assert_eq!(chat_endpoint(""), "/api/chat");
}

// =============================================================
// validate_envelope
// =============================================================

#[test]
fn validate_envelope_accepts_success_with_message() {
    let reply = validate_envelope(envelope(serde_json::json!({
        "success": true,
        "response": { "message": "Hi" }
    })))
    .expect("valid envelope");
    assert_eq!(reply.text, "Hi");
    assert!(reply.product.is_none());
    assert!(reply.products.is_empty());
}

#[test]
fn validate_envelope_rejects_unsuccessful_payload() {
    let err = validate_envelope(envelope(serde_json::json!({
        "success": false,
        "error": "rate limited"
    })))
    .expect_err("unsuccessful envelope");
    assert_eq!(err, ChatError::Rejected("rate limited".to_owned()));
}

#[test]
fn validate_envelope_rejects_missing_response_body() {
    let err = validate_envelope(envelope(serde_json::json!({ "success": true })))
        .expect_err("missing body");
    assert!(matches!(err, ChatError::Rejected(_)));
}

#[test]
fn validate_envelope_rejects_missing_or_empty_message() {
    let missing = validate_envelope(envelope(serde_json::json!({
        "success": true,
        "response": {}
    })));
    let empty = validate_envelope(envelope(serde_json::json!({
        "success": true,
        "response": { "message": "" }
    })));
    assert!(matches!(missing, Err(ChatError::Rejected(_))));
    assert!(matches!(empty, Err(ChatError::Rejected(_))));
}

#[test]
fn validate_envelope_keeps_product_attachments() {
    let reply = validate_envelope(envelope(serde_json::json!({
        "success": true,
        "response": {
            "message": "Here you go",
            "product": { "id": "p1", "title": "Pillow", "price": 49.99 },
            "products": [
                { "id": "p2", "title": "Blanket", "price": 79.99 },
                { "id": "p3", "name": "Candle", "price": "24.99" }
            ]
        }
    })))
    .expect("valid envelope");
    assert_eq!(reply.product.as_ref().map(|p| p.id.as_str()), Some("p1"));
    assert_eq!(reply.products.len(), 2);
    assert_eq!(reply.products[1].title, "Candle");
}

// =============================================================
// history_payload
// =============================================================

#[test]
fn history_payload_serializes_role_and_text_only() {
    let mut session = SessionState::seeded(0.0);
    session.set_pending_input("do you ship to Canada?".to_owned());
    let _ = session.begin_send(1.0);

    let history = history_payload(&session.messages);
    let turns = history.as_array().expect("array payload");
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0]["role"], Role::Assistant.as_str());
    assert_eq!(turns[1]["role"], Role::User.as_str());
    assert_eq!(turns[1]["content"], "do you ship to Canada?");
    assert!(turns[1].get("id").is_none());
}

#[test]
fn history_payload_for_empty_log_is_empty_array() {
    assert_eq!(history_payload(&[]), serde_json::json!([]));
}
