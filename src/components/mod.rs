//! Leptos view modules over the session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure views reading context-provided state; swapping the
//! styling or layout never touches `state::session`.

pub mod chat_window;
pub mod launcher;
pub mod message_bubble;
pub mod product_card;
pub mod quick_actions;
