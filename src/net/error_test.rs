use super::*;

#[test]
fn chat_error_messages_name_their_cause() {
    assert_eq!(
        ChatError::Transport("connection refused".to_owned()).to_string(),
        "chat request failed: connection refused"
    );
    assert_eq!(ChatError::Status(500).to_string(), "chat request returned status 500");
    assert_eq!(
        ChatError::Rejected("missing reply message".to_owned()).to_string(),
        "assistant reply rejected: missing reply message"
    );
    assert_eq!(
        ChatError::Malformed("expected value at line 1".to_owned()).to_string(),
        "malformed assistant reply: expected value at line 1"
    );
}
