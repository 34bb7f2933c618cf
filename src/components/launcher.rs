//! Floating launcher bubble shown while the chat window is closed.

use leptos::prelude::*;

use crate::state::ui::WidgetUiState;

/// Round launcher button that expands the chat window.
#[component]
pub fn Launcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<WidgetUiState>>();

    view! {
        <button
            class="shopchat-launcher"
            aria-label="Open chat"
            on:click=move |_| ui.update(|u| u.open = true)
        >
            <svg class="shopchat-launcher__icon" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M12 3C6.5 3 2 6.9 2 11.7c0 2.1.9 4 2.4 5.5L3 21l4.1-1.4c1.5.6 3.1.9 4.9.9 5.5 0 10-3.9 10-8.8S17.5 3 12 3z"/>
            </svg>
        </button>
    }
}
