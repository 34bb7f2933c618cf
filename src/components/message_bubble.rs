//! One conversation-log entry: role-styled bubble, attachments, timestamp.

use leptos::prelude::*;

use crate::components::product_card::{ProductCard, ProductList};
use crate::state::session::{ChatMessage, Role};
use crate::util::markdown::render_assistant_html;
use crate::util::time::format_clock_time;

/// Message bubble for either role. Assistant text renders as sanitized
/// markdown; user text stays plain.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == Role::User;
    let stamp = format_clock_time(message.sent_at_ms);

    view! {
        <div class="shopchat-message" class:shopchat-message--user=is_user>
            <div class="shopchat-message__bubble">
                {if is_user {
                    view! { <span class="shopchat-message__text">{message.text.clone()}</span> }
                        .into_any()
                } else {
                    let rendered = render_assistant_html(&message.text);
                    view! { <div class="shopchat-message__markdown" inner_html=rendered></div> }
                        .into_any()
                }}
                {message.product.clone().map(|product| view! { <ProductCard product/> })}
                {(!message.products.is_empty())
                    .then(|| {
                        let products = message.products.clone();
                        view! { <ProductList products/> }
                    })}
                <span class="shopchat-message__time">{stamp}</span>
            </div>
        </div>
    }
}
