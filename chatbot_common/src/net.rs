//! Endpoint defaults and HTTP client construction.
//!
//! Quote requests use a bounded timeout; backend requests have none, since a model
//! reply may take arbitrarily long and the session waits for it.
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::ChatError;

/// Exchange-rate provider endpoint for the USD/BRL pair.
pub const QUOTE_URL: &str = "https://economia.awesomeapi.com.br/last/USD-BRL";
/// Base URL of the local Ollama server.
pub const OLLAMA_URL: &str = "http://localhost:11434";
/// Model used for free-text turns.
pub const DEFAULT_MODEL: &str = "llama3.2";
/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("chatbot/", env!("CARGO_PKG_VERSION"));
/// Timeout for a single quote request.
pub const QUOTE_TIMEOUT: Duration = Duration::from_secs(15);

/// Creates the blocking client used for quote requests.
pub fn quote_client() -> Result<Client, ChatError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(QUOTE_TIMEOUT)
        .build()
        .map_err(|e| ChatError::HttpClient(e.to_string()))
}

/// Creates the blocking client used for backend requests (no timeout).
pub fn backend_client() -> Result<Client, ChatError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| ChatError::HttpClient(e.to_string()))
}

/// Joins a base URL and a path, tolerating a trailing slash on the base.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_build() {
        assert!(quote_client().is_ok());
        assert!(backend_client().is_ok());
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        assert_eq!(endpoint("http://localhost:11434/", "/api/chat"), "http://localhost:11434/api/chat");
        assert_eq!(endpoint(OLLAMA_URL, "api/chat"), "http://localhost:11434/api/chat");
    }
}
