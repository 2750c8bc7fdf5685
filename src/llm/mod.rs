//! Completion client capability for chat-completion requests.
//!
//! The trait is the only seam between the requester and the remote service;
//! the live adapter lives in [`openrouter`], tests supply their own doubles.

pub mod openrouter;

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed future type alias used by [`CompletionClient`] to keep the trait
/// dyn-compatible.
pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Completion, LlmError>> + Send + 'a>>;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions framing the conversation.
    System,
    /// The human side of the conversation.
    User,
    /// The model side of the conversation.
    Assistant,
}

/// A single message in a chat-completion conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user-role message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    /// Creates a system-role message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }
}

/// A request for one chat completion.
///
/// Serializes to the wire shape verbatim; field values are forwarded to the
/// service exactly as given here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier (e.g. `"openai/gpt-4o"`).
    pub model: String,
    /// Ordered conversation messages.
    pub messages: Vec<ChatMessage>,
    /// Always `false`; streaming is out of scope.
    pub stream: bool,
}

/// One candidate response among potentially several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChatMessage,
}

/// The response to a completion request. Fields beyond `choices` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// Candidate responses; may be empty.
    pub choices: Vec<Choice>,
}

/// Failure modes of a completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The HTTP request never produced a response.
    #[error("request to completion endpoint failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The service rejected the credential (HTTP 401/402/403).
    #[error("authentication rejected ({status}): {message}")]
    Auth {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the raw body.
        message: String,
    },
    /// Any other non-success HTTP status.
    #[error("completion endpoint returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the raw body.
        message: String,
    },
    /// A success status with a body that does not decode as a completion.
    #[error("could not parse completion response: {0}")]
    Malformed(String),
    /// The service answered with zero choices.
    #[error("no completion returned")]
    NoCompletion,
}

/// Sends completion requests to a chat-completion service.
pub trait CompletionClient: Send + Sync {
    /// Performs one completion call.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] describing the failure (network, auth,
    /// service error, or undecodable response).
    fn complete(&self, request: &ChatRequest) -> CompletionFuture<'_>;
}
