//! Command-line arguments for the chatbot.
//!
//! Every flag has a default, so running the binary without arguments starts the REPL
//! against a local Ollama server with the dollar-quote command enabled.
use chatbot_common::net::{DEFAULT_MODEL, OLLAMA_URL, QUOTE_URL};
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Model name passed to the backend for free-text turns.
    #[clap(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Ollama server.
    #[clap(long, default_value = OLLAMA_URL)]
    pub ollama_url: String,

    /// Exchange-rate endpoint queried by `/dolar`.
    #[clap(long, default_value = QUOTE_URL)]
    pub quote_url: String,

    /// Append-only event log.
    #[clap(long, default_value = "chatbot.log")]
    pub log_file: PathBuf,

    /// File the transcript is written to on exit (overwritten).
    #[clap(long, default_value = "historico_conversas.json")]
    pub transcript: PathBuf,

    /// Disable the `/dolar` command.
    #[clap(long)]
    pub no_quote: bool,
}
