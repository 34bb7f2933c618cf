//! Send orchestration between the session signal and the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure transitions live on `SessionState`; this module wires them to the
//! async transport and the reactive graph. Settlement goes through
//! `RwSignal::try_update`, so a reply landing after the widget unmounts is
//! a no-op instead of a write to a disposed session.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::session::SessionState;

/// Commit the pending input and start the round-trip. Does nothing when
/// the guard rejects (empty input, or a reply already in flight).
pub fn send_pending(config: &WidgetConfig, session: RwSignal<SessionState>) {
    #[cfg(feature = "browser")]
    {
        use crate::net::api;
        use crate::util::time::now_ms;

        let Some(outbound) = session.try_update(|s| s.begin_send(now_ms())).flatten() else {
            return;
        };
        let history = config.send_history.then(|| {
            session.with_untracked(|s| {
                // Prior turns only; the current message travels in its own field.
                let prior = &s.messages[..s.messages.len().saturating_sub(1)];
                api::history_payload(prior)
            })
        });
        let backend_url = config.backend_url.clone();

        leptos::task::spawn_local(async move {
            let outcome = api::send_chat_message(&backend_url, &outbound, history).await;
            if let Err(err) = &outcome {
                log::warn!("chat round-trip failed: {err}");
            }
            let _ = session.try_update(|s| s.complete_send(outcome, now_ms()));
        });
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (config, session);
    }
}

/// One-click canned phrase: buffer the label, then send through the same
/// guard. While a reply is in flight the send half is dropped and the
/// label stays buffered, exactly as if the user had typed it.
pub fn send_quick_action(config: &WidgetConfig, session: RwSignal<SessionState>, label: &str) {
    let canned = label.to_owned();
    let _ = session.try_update(|s| s.set_pending_input(canned));
    send_pending(config, session);
}
