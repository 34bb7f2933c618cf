//! Per-instance widget configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Host-provided configuration for one widget instance.
///
/// An explicit struct handed to `embed::mount_widget` — there is no global
/// registration; each mounted widget owns its own copy via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Base URL of the assistant backend. Empty means same-origin.
    pub backend_url: String,
    /// Send prior conversation turns with each request. Off by default;
    /// the minimal wire contract is the single current message.
    pub send_history: bool,
    /// Mount inside a shadow root with the widget stylesheet injected.
    pub style_isolation: bool,
    /// Title shown in the chat window header.
    pub assistant_name: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            send_history: false,
            style_isolation: false,
            assistant_name: "Store Assistant".to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Config pointing at a specific backend; other fields keep defaults.
    #[must_use]
    pub fn with_backend_url(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.to_owned(),
            ..Self::default()
        }
    }
}
