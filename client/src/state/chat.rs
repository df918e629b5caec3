//! Chat widget state: panel visibility, proactive prompt, the in-flight
//! guard and the transcript.
//!
//! DESIGN
//! ======
//! The widget's flags are folded into tagged enums so invalid combinations
//! cannot be represented: the prompt bubble is a variant of "closed", and
//! the message awaiting a reply lives inside the in-flight variant.
//!
//! Every transition is a plain method so the protocol is testable without a
//! browser. The component layer owns timers, listeners and the network call
//! and only reports outcomes back through these methods.

use std::time::Duration;

use crate::content::OWNER_NAME;
use crate::net::types::{ChatReply, ChatRequest, HistoryEntry};

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Idle time before the proactive prompt may appear.
pub const PROMPT_DELAY: Duration = Duration::from_secs(10);

/// `PROMPT_DELAY` as the millisecond count browser timers take.
pub fn prompt_delay_millis() -> u32 {
    u32::try_from(PROMPT_DELAY.as_millis()).unwrap_or(u32::MAX)
}

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Render key only; not part of the wire protocol.
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Chat panel visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Closed,
    /// Closed, with the invitation bubble showing.
    Prompting,
    Open,
}

/// Request lifecycle. At most one request is outstanding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Exchange {
    #[default]
    Idle,
    /// Waiting on the endpoint; `pending` is the text that was sent.
    InFlight { pending: String },
}

/// Whether the visitor has clicked anywhere on the page yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Engagement {
    #[default]
    Untouched,
    Interacted,
}

/// Complete widget state for one page lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub panel: Panel,
    pub exchange: Exchange,
    pub engagement: Engagement,
    pub messages: Vec<ChatMessage>,
    /// Assigned by the endpoint on the first successful reply.
    pub thread_id: Option<String>,
    /// Bumped whenever the prompt timer must restart. A timer carries the
    /// epoch it was armed with and is ignored once the epoch moves on.
    pub prompt_epoch: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            panel: Panel::Closed,
            exchange: Exchange::Idle,
            engagement: Engagement::Untouched,
            messages: vec![ChatMessage::assistant(greeting())],
            thread_id: None,
            prompt_epoch: 0,
        }
    }
}

/// Opening line of every fresh transcript.
pub fn greeting() -> String {
    let first_name = OWNER_NAME.split_whitespace().next().unwrap_or(OWNER_NAME);
    format!(
        "Hi! I'm {first_name}'s AI assistant. Feel free to ask me anything about my experience, skills, or projects!"
    )
}

impl ChatState {
    pub fn is_open(&self) -> bool {
        self.panel == Panel::Open
    }

    pub fn is_prompting(&self) -> bool {
        self.panel == Panel::Prompting
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.exchange, Exchange::InFlight { .. })
    }

    /// Open a closed panel (clearing any prompt) or close an open one.
    /// Leaves the transcript alone and restarts the prompt timer.
    pub fn toggle(&mut self) {
        self.panel = match self.panel {
            Panel::Closed | Panel::Prompting => Panel::Open,
            Panel::Open => Panel::Closed,
        };
        self.prompt_epoch += 1;
    }

    /// Hide the prompt bubble without opening the panel.
    pub fn dismiss_prompt(&mut self) {
        if self.panel == Panel::Prompting {
            self.panel = Panel::Closed;
        }
    }

    /// Latch the first page interaction. Returns `true` on the first call.
    pub fn record_interaction(&mut self) -> bool {
        if self.engagement == Engagement::Interacted {
            return false;
        }
        self.engagement = Engagement::Interacted;
        self.prompt_epoch += 1;
        true
    }

    /// Prompt timer expiry for the timer armed at `epoch`. Returns `true`
    /// when the prompt was activated and the notification should play.
    pub fn fire_prompt_timer(&mut self, epoch: u64) -> bool {
        if epoch != self.prompt_epoch
            || self.panel != Panel::Closed
            || self.engagement != Engagement::Interacted
        {
            return false;
        }
        self.panel = Panel::Prompting;
        true
    }

    /// Start a send. Returns the request to post, or `None` when the input is
    /// blank or another request is still outstanding.
    pub fn begin_send(&mut self, input: &str) -> Option<ChatRequest> {
        if input.trim().is_empty() || self.is_loading() {
            return None;
        }
        self.exchange = Exchange::InFlight { pending: input.to_owned() };
        Some(ChatRequest { message: input.to_owned(), thread_id: self.thread_id.clone() })
    }

    /// Apply a successful reply to the outstanding request.
    pub fn complete(&mut self, reply: ChatReply) {
        let Exchange::InFlight { pending } = std::mem::take(&mut self.exchange) else {
            return;
        };

        self.thread_id = Some(reply.thread_id().to_owned());
        match reply {
            ChatReply::FirstExchange { response, history, .. } => {
                let mut messages = flatten_history(&history);
                messages.push(ChatMessage::user(pending));
                messages.push(ChatMessage::assistant(response));
                self.messages = messages;
            }
            ChatReply::ContinuingExchange { response, .. } => {
                self.messages.push(ChatMessage::user(pending));
                self.messages.push(ChatMessage::assistant(response));
            }
        }
    }

    /// Abandon the outstanding request. The transcript is left as it was and
    /// the pending text is dropped. Returns the dropped text.
    pub fn fail(&mut self) -> Option<String> {
        match std::mem::take(&mut self.exchange) {
            Exchange::InFlight { pending } => Some(pending),
            Exchange::Idle => None,
        }
    }
}

/// Expand server history into alternating user/assistant messages.
pub fn flatten_history(history: &[HistoryEntry]) -> Vec<ChatMessage> {
    history
        .iter()
        .flat_map(|entry| {
            [ChatMessage::user(entry.user_message.clone()), ChatMessage::assistant(entry.assistant_response.clone())]
        })
        .collect()
}
