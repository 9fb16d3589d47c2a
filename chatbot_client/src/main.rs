//! ChatBot — an interactive terminal chat backed by a local Ollama model.
//!
//! Free text is sent, together with the whole conversation so far, to the model; a
//! few in-session commands are handled locally:
//!
//! - `sair` / `exit` / `quit` — end the chat and save the transcript as JSON.
//! - `/ajuda` — list the commands.
//! - `/dolar` — current USD/BRL rate (disable with `--no-quote`).
//!
//! Usage example (CLI):
//! ```bash
//! chatbot --model llama3.2 --log-file chatbot.log --transcript historico_conversas.json
//! ```
//!
//! Events go to an append-only log file as `<timestamp> - <LEVEL> - <message>`.
mod args;
mod backend;
mod event_log;
mod fetcher;
mod session;
mod transcript;

use crate::args::Args;
use crate::backend::OllamaBackend;
use crate::event_log::{EventLog, FacadeLog};
use crate::fetcher::{QuoteFetcher, QuoteSource};
use crate::session::Session;
use crate::transcript::TranscriptStore;
use chatbot_common::net::{backend_client, quote_client};
use chatbot_common::{ChatError, Result};
use chrono::{Local, Timelike};
use clap::Parser;
use log::info;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

/// Exit status used when the session is interrupted with Ctrl+C.
const INTERRUPTED: i32 = 130;

fn main() -> Result<(), ChatError> {
    let args = Args::parse();
    init_logger(&args.log_file)?;
    info!("Session starting with model {}", args.model);

    let log: Arc<dyn EventLog> = Arc::new(FacadeLog);
    {
        let log = Arc::clone(&log);
        ctrlc::set_handler(move || {
            log.warn("Session interrupted; transcript not saved.");
            log::logger().flush();
            process::exit(INTERRUPTED);
        })
        .map_err(|e| ChatError::Io(io::Error::other(e)))?;
    }

    let backend = OllamaBackend::new(backend_client()?, &args.ollama_url, args.model.as_str());
    let quotes: Option<Box<dyn QuoteSource>> = if args.no_quote {
        None
    } else {
        Some(Box::new(QuoteFetcher::new(
            quote_client()?,
            args.quote_url.as_str(),
            Arc::clone(&log),
        )))
    };

    let mut session = Session::new(
        Box::new(backend),
        quotes,
        TranscriptStore::new(&args.transcript),
        log,
        args.log_file.display().to_string(),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.write_banner(&mut stdout, Local::now().hour())?;
    session.run(stdin.lock(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Sends log records to `path` (appending) as `<timestamp> - <LEVEL> - <message>`.
fn init_logger(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
