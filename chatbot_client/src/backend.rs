//! Conversational-model backend.
//!
//! The session hands the backend the whole transcript and gets back one assistant
//! message. `OllamaBackend` talks to Ollama's non-streaming `/api/chat` endpoint.
use chatbot_common::net::endpoint;
use chatbot_common::{BackendError, Message, Role};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Unary chat call: ordered history in, one reply out.
pub trait ChatBackend {
    fn chat(&self, history: &[Message]) -> Result<Message, BackendError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<Message>,
    error: Option<String>,
}

/// Ollama HTTP backend.
pub struct OllamaBackend {
    client: Client,
    url: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(client: Client, base_url: &str, model: impl Into<String>) -> Self {
        Self {
            client,
            url: endpoint(base_url, "api/chat"),
            model: model.into(),
        }
    }
}

impl ChatBackend for OllamaBackend {
    fn chat(&self, history: &[Message]) -> Result<Message, BackendError> {
        let request = ChatRequest {
            model: &self.model,
            messages: history,
            stream: false,
        };
        let response = self.client.post(&self.url).json(&request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ChatResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;
        match parsed.message {
            Some(message) if message.role == Role::Assistant => Ok(message),
            Some(message) => Err(BackendError::MalformedResponse(format!(
                "expected an assistant reply, got role {}",
                message.role
            ))),
            None => Err(BackendError::MalformedResponse(
                parsed.error.unwrap_or_else(|| "reply has no message".to_string()),
            )),
        }
    }
}
