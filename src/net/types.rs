//! Wire types for `POST {api_base}/{thread_id}`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-side conversation identifier, opaque to the client.
///
/// Starts as the sentinel `"new"`, which asks the server to open a thread.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    pub const NEW: &'static str = "new";

    /// The sentinel id used before the server has assigned one.
    #[must_use]
    pub fn new_thread() -> Self {
        Self(Self::NEW.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` while no thread has been assigned yet.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.0 == Self::NEW
    }
}

impl Default for ThreadId {
    fn default() -> Self {
        Self::new_thread()
    }
}

impl From<String> for ThreadId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ThreadId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON body sent for every user turn. Field order is the wire order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub platform: String,
    pub user_id: String,
    pub project_id: String,
}

/// Success body. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub thread_id: ThreadId,
    pub reply: String,
}

/// A user turn accepted for sending, with the thread id read at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub text: String,
    pub thread_id: ThreadId,
}

/// Endpoint URL for a turn on `thread_id`.
#[must_use]
pub fn chat_endpoint(api_base: &str, thread_id: &ThreadId) -> String {
    format!("{api_base}/{thread_id}")
}
