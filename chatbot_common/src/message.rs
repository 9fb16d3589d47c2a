//! Dialogue messages exchanged with the model backend and stored in the transcript.
//!
//! A `Message` serializes to the `{"role": ..., "content": ...}` shape used both by
//! the transcript file and by the backend request body.
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Text typed by the person at the terminal.
    User,
    /// Reply produced by the backend or by a built-in command.
    Assistant,
}

/// A single turn of the dialogue. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message.
    pub role: Role,
    /// Message text, stored as typed.
    pub content: String,
}

impl Message {
    /// Creates a message authored by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates a message authored by the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
