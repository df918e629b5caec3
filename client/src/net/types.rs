//! Wire types for the remote chat endpoint.
//!
//! The endpoint speaks camelCase JSON:
//!
//! ```text
//! -> { "message": "...", "threadId": "..." | null }
//! <- { "threadId": "...", "response": "...", "history"?: [{ "userMessage", "assistantResponse" }] }
//! ```

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Request body posted for every visitor message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Always serialized; `null` until the endpoint assigns a thread.
    pub thread_id: Option<String>,
}

/// One prior exchange replayed by the endpoint for an existing thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub user_message: String,
    pub assistant_response: String,
}

/// Response body exactly as the endpoint sends it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseBody {
    pub thread_id: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
}

/// A successful reply, classified by whether it seeds the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatReply {
    /// First exchange of the page lifetime and the endpoint sent history:
    /// the transcript is rebuilt from it.
    FirstExchange {
        thread_id: String,
        response: String,
        history: Vec<HistoryEntry>,
    },
    /// Everything else: the new pair is appended.
    ContinuingExchange { thread_id: String, response: String },
}

impl ChatReply {
    /// Classify a response body. `had_thread` is whether the request that
    /// produced it already carried a thread id.
    pub fn classify(body: ChatResponseBody, had_thread: bool) -> Self {
        match body.history {
            Some(history) if !had_thread => Self::FirstExchange {
                thread_id: body.thread_id,
                response: body.response,
                history,
            },
            _ => Self::ContinuingExchange {
                thread_id: body.thread_id,
                response: body.response,
            },
        }
    }

    pub fn thread_id(&self) -> &str {
        match self {
            Self::FirstExchange { thread_id, .. } | Self::ContinuingExchange { thread_id, .. } => thread_id,
        }
    }
}
