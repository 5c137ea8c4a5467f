//! Conversation log and turn lifecycle for one widget instance.
//!
//! A turn moves `Idle -> Sending -> Idle`. [`ChatState::submit`] enters
//! `Sending` and hands back the text plus the thread id to send with;
//! [`ChatState::settle`] leaves it with either the bot reply or the fixed
//! apology. Submits that arrive while a turn is in flight are rejected, so
//! there is never more than one request, one typing indicator, or one
//! reader of a not-yet-updated thread id.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::ChatError;
use crate::net::types::{ChatResponse, PendingSend, ThreadId};

/// Shown in place of a reply whenever a turn fails.
pub const APOLOGY_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Who a log entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
    System,
}

impl Role {
    /// CSS modifier class used when rendering the entry.
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::System => "system",
        }
    }
}

/// A single rendered turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    /// Render key, unique within one [`ChatState`].
    pub id: u64,
    pub role: Role,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    Sending,
}

/// Conversation identity carried across turns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatSession {
    pub thread_id: ThreadId,
}

/// Result of [`ChatState::submit`].
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened.
    Empty,
    /// A turn is already in flight; nothing happened.
    Busy,
    /// The user entry was appended; send this and then call [`ChatState::settle`].
    Accepted(PendingSend),
}

/// State for the chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    session: ChatSession,
    entries: Vec<ChatEntry>,
    phase: ChatPhase,
    next_id: u64,
}

impl ChatState {
    #[must_use]
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    #[must_use]
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    /// The typing indicator is shown exactly while a turn is in flight.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.phase == ChatPhase::Sending
    }

    /// Accept raw input from the text field.
    ///
    /// On acceptance the trimmed text is appended as a user entry and the
    /// state enters `Sending`. The caller clears the input and sends the
    /// returned [`PendingSend`].
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.phase == ChatPhase::Sending {
            log::debug!("chat: submit ignored while a reply is pending");
            return SubmitOutcome::Busy;
        }

        self.push(Role::User, text.to_owned());
        self.phase = ChatPhase::Sending;

        SubmitOutcome::Accepted(PendingSend {
            text: text.to_owned(),
            thread_id: self.session.thread_id.clone(),
        })
    }

    /// Apply the outcome of the in-flight turn and return to `Idle`.
    ///
    /// The thread id only changes on success; failures leave it as it was.
    pub fn settle(&mut self, result: Result<ChatResponse, ChatError>) {
        self.phase = ChatPhase::Idle;
        match result {
            Ok(resp) => {
                log::debug!("chat: reply on thread {}", resp.thread_id);
                self.session.thread_id = resp.thread_id;
                self.push(Role::Bot, resp.reply);
            }
            Err(e) => {
                log::error!("chat: error sending message: {e}");
                self.push(Role::System, APOLOGY_MESSAGE.to_owned());
            }
        }
    }

    fn push(&mut self, role: Role, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ChatEntry { id, role, text });
    }
}
