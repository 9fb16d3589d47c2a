//!
//! Common types and utilities for the chatbot session.
//!
//! This crate aggregates:
//! - `error` — fault taxonomy (`FetchError`, `BackendError`, `ChatError`).
//! - `result` — handy `Result<T, ChatError>` alias.
//! - `message` — role-tagged dialogue messages.
//! - `command` — in-session command tokens and intent classification.
//! - `quote` — exchange-rate quote model and provider payload parsing.
//! - `net` — endpoint defaults and HTTP client construction.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod message;
pub mod command;
pub mod quote;
pub mod net;

pub use error::{BackendError, ChatError, FetchError};
pub use result::Result;
pub use message::{Message, Role};
pub use command::Intent;
pub use quote::QuoteResult;
