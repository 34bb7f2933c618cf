//! Networking: wire schema, the REST round-trip, and send orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the response schema, `api` performs the HTTP call,
//! `error` names its failure modes, and `chat_client` bridges them to the
//! session signal.

pub mod api;
pub mod chat_client;
pub mod error;
pub mod types;
