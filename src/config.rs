//! Widget configuration read from the host page.
//!
//! The host page places an element with id [`MOUNT_ID`] where the widget
//! should render and may override defaults through `data-*` attributes on
//! that element. Every default matches the fixed values the chat endpoint
//! expects, so a bare `<div id="chat-widget"></div>` is a complete setup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the host element the widget mounts into.
pub const MOUNT_ID: &str = "chat-widget";

pub const DEFAULT_API_BASE: &str = "/api/v1/chat";
pub const DEFAULT_PLATFORM: &str = "web";
pub const DEFAULT_USER_ID: &str = "web_user";
pub const DEFAULT_PROJECT_ID: &str = "nia_chat";
pub const DEFAULT_PLACEHOLDER: &str = "Type your message...";

/// Runtime settings for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Path prefix of the chat endpoint; the thread id is appended as the last segment.
    pub api_base: String,
    pub platform: String,
    pub user_id: String,
    pub project_id: String,
    /// Placeholder text of the message input.
    pub placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            platform: DEFAULT_PLATFORM.to_owned(),
            user_id: DEFAULT_USER_ID.to_owned(),
            project_id: DEFAULT_PROJECT_ID.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Build a config from `data-*` attribute lookups.
    ///
    /// - `data-api-base`: default `/api/v1/chat`, trailing slashes trimmed
    /// - `data-platform`: default `web`
    /// - `data-user-id`: default `web_user`
    /// - `data-project-id`: default `nia_chat`
    /// - `data-placeholder`: default `Type your message...`
    ///
    /// Missing or blank attributes fall back to the default.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, default: &str| attr_or(lookup(name), default);

        Self {
            api_base: normalize_api_base(&read("data-api-base", DEFAULT_API_BASE)),
            platform: read("data-platform", DEFAULT_PLATFORM),
            user_id: read("data-user-id", DEFAULT_USER_ID),
            project_id: read("data-project-id", DEFAULT_PROJECT_ID),
            placeholder: read("data-placeholder", DEFAULT_PLACEHOLDER),
        }
    }
}

fn attr_or(raw: Option<String>, default: &str) -> String {
    raw.map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
