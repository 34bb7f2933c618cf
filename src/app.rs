//! Root widget component wiring state contexts to the view tree.

use leptos::prelude::*;

use crate::components::chat_window::ChatWindow;
use crate::components::launcher::Launcher;
use crate::config::WidgetConfig;
use crate::state::session::SessionState;
use crate::state::ui::WidgetUiState;
use crate::util::time::now_ms;

/// Root component for one mounted widget instance.
///
/// Owns the conversation session for the lifetime of the mount and
/// provides it (plus chrome state and config) to every child via context.
/// Unmounting disposes the signals, which is what invalidates any reply
/// still in flight.
#[component]
pub fn ChatWidgetRoot(config: WidgetConfig) -> impl IntoView {
    let session = RwSignal::new(SessionState::seeded(now_ms()));
    let ui = RwSignal::new(WidgetUiState::default());

    provide_context(config);
    provide_context(session);
    provide_context(ui);

    view! {
        <div class="shopchat">
            <Show when=move || !ui.get().open>
                <Launcher/>
            </Show>
            <Show when=move || ui.get().open>
                <ChatWindow/>
            </Show>
        </div>
    }
}
