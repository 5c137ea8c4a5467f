//! HTTP client for the chat endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, docs): the browser transport returns a transport
//! error since the endpoint is only reachable from a page.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`ChatError`]. Non-2xx bodies are never
//! read, and a success body that is not `{thread_id, reply}` is a decode
//! error rather than a partial result.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ChatError;
use super::types::{ChatRequest, ChatResponse, PendingSend, ThreadId, chat_endpoint};
use crate::config::WidgetConfig;

/// Raw outcome of one HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Response text; left empty for non-success statuses.
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the chat client and the HTTP stack.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    /// POST `body` as `application/json` to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Transport`] when the request cannot be completed.
    async fn post_json(&self, url: &str, body: &ChatRequest) -> Result<HttpReply, ChatError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl ChatTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &ChatRequest) -> Result<HttpReply, ChatError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| ChatError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChatError::Transport(e.to_string()))?;
            let mut reply = HttpReply { status: resp.status(), body: String::new() };
            if reply.is_success() {
                reply.body = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
            }
            Ok(reply)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(ChatError::Transport("not available outside the browser".to_owned()))
        }
    }
}

/// Sends user turns to the chat endpoint.
#[derive(Clone, Debug)]
pub struct ChatClient<T> {
    transport: T,
    config: WidgetConfig,
}

impl<T: ChatTransport> ChatClient<T> {
    pub fn new(transport: T, config: WidgetConfig) -> Self {
        Self { transport, config }
    }

    /// Request body for `text` with the configured fixed fields.
    pub fn request_for(&self, text: &str) -> ChatRequest {
        ChatRequest {
            message: text.to_owned(),
            platform: self.config.platform.clone(),
            user_id: self.config.user_id.clone(),
            project_id: self.config.project_id.clone(),
        }
    }

    pub fn endpoint_for(&self, thread_id: &ThreadId) -> String {
        chat_endpoint(&self.config.api_base, thread_id)
    }

    /// Send one turn and return the parsed reply.
    ///
    /// # Errors
    ///
    /// - [`ChatError::Transport`] if the request could not be completed
    /// - [`ChatError::Status`] for any non-2xx status
    /// - [`ChatError::Decode`] if a 2xx body is not `{thread_id, reply}`
    pub async fn send(&self, pending: &PendingSend) -> Result<ChatResponse, ChatError> {
        let url = self.endpoint_for(&pending.thread_id);
        let body = self.request_for(&pending.text);
        log::debug!("chat: POST {url}");

        let reply = self.transport.post_json(&url, &body).await?;
        if !reply.is_success() {
            return Err(ChatError::Status { status: reply.status });
        }
        Ok(serde_json::from_str::<ChatResponse>(&reply.body)?)
    }
}
