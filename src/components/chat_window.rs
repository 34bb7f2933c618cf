//! Chat window: header, message list, quick actions, and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure rendering over the session signal; every conversation mutation
//! goes through `net::chat_client`, so this window is a swappable view
//! over the one session core.

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::components::quick_actions::QuickActions;
use crate::config::WidgetConfig;
use crate::net::chat_client;
use crate::state::session::SessionState;
use crate::state::ui::WidgetUiState;

/// Expanded chat window.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let config = expect_context::<WidgetConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<WidgetUiState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = session.get();
        let _ = state.messages.len();
        let _ = state.awaiting_reply;

        #[cfg(feature = "browser")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let title = config.assistant_name.clone();
    let send_config = config.clone();
    let do_send = move || chat_client::send_pending(&send_config, session);

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let awaiting = move || session.get().awaiting_reply;
    let can_send =
        move || !session.get().pending_input.trim().is_empty() && !session.get().awaiting_reply;

    view! {
        <div class="shopchat-window">
            <div class="shopchat-window__header">
                <div class="shopchat-window__identity">
                    <span class="shopchat-window__title">{title}</span>
                    <span class="shopchat-window__status">"Online now"</span>
                </div>
                <button
                    class="shopchat-window__close"
                    aria-label="Close chat"
                    on:click=move |_| ui.update(|u| u.open = false)
                >
                    "\u{d7}"
                </button>
            </div>

            <div class="shopchat-window__messages" node_ref=messages_ref>
                {move || {
                    session
                        .get()
                        .messages
                        .iter()
                        .cloned()
                        .map(|message| view! { <MessageBubble message/> })
                        .collect::<Vec<_>>()
                }}

                {move || {
                    awaiting()
                        .then(|| {
                            view! {
                                <div class="shopchat-typing">
                                    <span class="shopchat-typing__dot"></span>
                                    <span class="shopchat-typing__dot"></span>
                                    <span class="shopchat-typing__dot"></span>
                                </div>
                            }
                        })
                }}
            </div>

            <QuickActions/>

            <div class="shopchat-window__input-row">
                <input
                    class="shopchat-window__input"
                    type="text"
                    placeholder="Type your message..."
                    disabled=awaiting
                    prop:value=move || session.get().pending_input
                    on:input=move |ev| {
                        session.update(|s| s.set_pending_input(event_target_value(&ev)));
                    }
                    on:keydown=on_keydown
                />
                <button
                    class="shopchat-window__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
