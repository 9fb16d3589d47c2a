//! In-memory dialogue history and its JSON snapshot on disk.
//!
//! The file holds a pretty-printed (4-space) JSON array of `{role, content}` objects
//! with non-ASCII text kept as-is. Every save rewrites the whole file.
use crate::event_log::EventLog;
use chatbot_common::{ChatError, Message, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::PathBuf;

/// Ordered dialogue history plus the file it is saved to.
#[derive(Debug)]
pub struct TranscriptStore {
    messages: Vec<Message>,
    path: PathBuf,
}

impl TranscriptStore {
    /// Creates an empty transcript that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            messages: Vec::new(),
            path: path.into(),
        }
    }

    /// Appends a message. Content is not validated.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Serializes the transcript with 4-space indentation.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.messages.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Overwrites the transcript file with the full current history.
    pub fn save(&self) -> Result<()> {
        let json = self.to_json()?;
        fs::write(&self.path, json)
            .map_err(|e| ChatError::Persistence(format!("{}: {}", self.path.display(), e)))
    }

    /// Saves the transcript, logging the outcome. Failures never reach the caller.
    pub fn persist(&self, log: &dyn EventLog) {
        match self.save() {
            Ok(()) => log.info(&format!(
                "Transcript saved to {} ({} messages)",
                self.path.display(),
                self.messages.len()
            )),
            Err(e) => log.error(&format!("Error saving transcript: {}", e)),
        }
    }
}
