//! Conversation-session state for one mounted widget.
//!
//! DESIGN
//! ======
//! One session owns the append-only message log, the uncommitted input
//! buffer, and the single in-flight guard. Transitions are pure and
//! synchronous; the async transport settles through `complete_send` exactly
//! once per accepted `begin_send`. There is no queueing: a send attempted
//! while a reply is outstanding is dropped, not buffered.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ChatError;
use crate::net::types::{AssistantReply, Product};

/// Greeting seeded as the first assistant message of every session.
pub const GREETING_TEXT: &str = "Hello! Welcome to our store. I'm here to help you find \
     the perfect products. What can I assist you with today?";

/// Fixed assistant message appended when a send fails for any reason.
pub const FALLBACK_TEXT: &str =
    "Sorry, I'm having trouble responding right now. Please try again in a moment.";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire and class-name form of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One immutable entry in the conversation log.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Session-unique id, strictly increasing in append order. Doubles as
    /// the render key.
    pub id: u64,
    pub role: Role,
    pub text: String,
    /// Single highlighted product attached to an assistant reply.
    pub product: Option<Product>,
    /// Ordered product recommendations; empty means none.
    pub products: Vec<Product>,
    /// Epoch milliseconds, used for display formatting only — ordering is
    /// always by append sequence.
    pub sent_at_ms: f64,
}

/// Conversation state: the message log, input buffer, and in-flight guard.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Append-only message log in insertion order.
    pub messages: Vec<ChatMessage>,
    /// Raw, uncommitted input buffer. Stored verbatim; trimming happens
    /// only inside the send guard.
    pub pending_input: String,
    /// True from an accepted `begin_send` until the round-trip settles.
    /// The sole backpressure mechanism per session.
    pub awaiting_reply: bool,
    next_message_id: u64,
}

impl SessionState {
    /// New session with the greeting already seeded.
    #[must_use]
    pub fn seeded(now_ms: f64) -> Self {
        let mut session = Self::default();
        session.seed(now_ms);
        session
    }

    /// Append the fixed greeting. No-op unless the log is empty, so a
    /// session always holds exactly one greeting.
    pub fn seed(&mut self, now_ms: f64) {
        if !self.messages.is_empty() {
            return;
        }
        self.push_message(Role::Assistant, GREETING_TEXT.to_owned(), None, Vec::new(), now_ms);
    }

    /// Replace the input buffer verbatim, untrimmed.
    pub fn set_pending_input(&mut self, text: String) {
        self.pending_input = text;
    }

    /// Commit the pending input as a user message and arm the in-flight
    /// guard, returning the text for the remote call.
    ///
    /// Returns `None` with no side effects when the trimmed buffer is empty
    /// or a reply is already outstanding.
    pub fn begin_send(&mut self, now_ms: f64) -> Option<String> {
        if self.awaiting_reply || self.pending_input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.pending_input);
        self.push_message(Role::User, text.clone(), None, Vec::new(), now_ms);
        self.awaiting_reply = true;
        Some(text)
    }

    /// Settle the outstanding round-trip: append the assistant reply on
    /// success, or the fixed fallback on any failure. Clears the in-flight
    /// guard on both paths.
    pub fn complete_send(&mut self, outcome: Result<AssistantReply, ChatError>, now_ms: f64) {
        match outcome {
            Ok(reply) => {
                self.push_message(Role::Assistant, reply.text, reply.product, reply.products, now_ms);
            }
            Err(_) => {
                self.push_message(Role::Assistant, FALLBACK_TEXT.to_owned(), None, Vec::new(), now_ms);
            }
        }
        self.awaiting_reply = false;
    }

    /// Total messages in the log.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Most recently appended message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    fn push_message(
        &mut self,
        role: Role,
        text: String,
        product: Option<Product>,
        products: Vec<Product>,
        sent_at_ms: f64,
    ) {
        self.next_message_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_message_id,
            role,
            text,
            product,
            products,
            sent_at_ms,
        });
    }
}
