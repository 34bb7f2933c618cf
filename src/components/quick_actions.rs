//! Quick-action bar: canned phrases sent with one click.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::chat_client;
use crate::state::session::SessionState;

/// Canned phrases offered below the message list.
pub const QUICK_ACTIONS: [&str; 4] =
    ["Show products", "Shipping info", "Return policy", "Product care"];

/// Row of one-click canned phrases. Dispatches through the same guard as
/// typed input, so clicks during an in-flight reply are dropped.
#[component]
pub fn QuickActions() -> impl IntoView {
    let config = expect_context::<WidgetConfig>();
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="shopchat-quick-actions">
            <p class="shopchat-quick-actions__label">"Quick actions:"</p>
            <div class="shopchat-quick-actions__row">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|label| {
                        let config = config.clone();
                        view! {
                            <button
                                class="shopchat-quick-actions__button"
                                disabled=move || session.get().awaiting_reply
                                on:click=move |_| chat_client::send_quick_action(&config, session, label)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
