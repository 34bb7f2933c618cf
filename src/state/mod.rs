//! Domain state for one mounted widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns conversation data and its transition rules; `ui` keeps
//! chrome concerns (launcher open/closed) out of conversation state.

pub mod session;
pub mod ui;
