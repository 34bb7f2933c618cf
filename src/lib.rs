//! # shopchat
//!
//! Embeddable store-assistant chat widget: a Leptos + WASM component that
//! mounts into a host storefront page, sends visitor messages to a remote
//! assistant endpoint, and renders reply text and product recommendations.
//!
//! The conversation core (`state::session`) and wire parsing (`net`) are
//! plain Rust with no browser dependency; everything WASM-specific sits
//! behind the `browser` cargo feature, so the crate unit-tests natively.

pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "browser")]
pub mod embed;
pub mod net;
pub mod state;
pub mod util;
