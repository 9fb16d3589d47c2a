//! Interactive session loop.
//!
//! Reads one line at a time, classifies it, and either runs a built-in command or
//! sends the transcript to the model backend. Every fault raised while handling a
//! line is logged and summarized to the user, and the loop keeps going; only the
//! exit command saves the transcript.
//!
//! A failed backend turn leaves its user message in the transcript without a reply.
use crate::backend::ChatBackend;
use crate::event_log::EventLog;
use crate::fetcher::QuoteSource;
use crate::transcript::TranscriptStore;
use chatbot_common::command::{EXIT_TOKENS, HELP, QUOTE, classify, help_lines};
use chatbot_common::{BackendError, ChatError, FetchError, Intent, Message, QuoteResult, Result};
use std::io::{self, BufRead, ErrorKind, Write};
use std::sync::Arc;

/// Input prompt.
pub const PROMPT: &str = "Você: ";
/// Printed before the transcript is saved on exit.
pub const FAREWELL: &str = "Chat encerrado!";
/// Reply used when the quote could not be fetched.
pub const QUOTE_UNAVAILABLE: &str = "Não foi possível obter a cotação do dólar no momento.";

/// Greeting for the given local hour (0-23).
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Bom dia! Seja bem-vindo ao ChatBot. Estou à disposição para você."
    } else if hour < 18 {
        "Boa tarde! Vamos bater um papo?"
    } else {
        "Boa noite! Sobre o que você deseja conversar?"
    }
}

/// Renders the outcome of a quote fetch as an assistant reply.
pub fn quote_reply(result: std::result::Result<QuoteResult, FetchError>) -> String {
    match result {
        Ok(quote) => format!(
            "A cotação atual do dólar (USD) para o real (BRL) é: R$ {} (Atualizado em: {})",
            quote.bid, quote.timestamp
        ),
        Err(_) => QUOTE_UNAVAILABLE.to_string(),
    }
}

/// What the loop does after handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// Single-user chat session. Owns the transcript for its whole lifetime.
pub struct Session {
    backend: Box<dyn ChatBackend>,
    quotes: Option<Box<dyn QuoteSource>>,
    transcript: TranscriptStore,
    log: Arc<dyn EventLog>,
    log_file: String,
}

impl Session {
    /// `quotes == None` disables the `/dolar` command.
    pub fn new(
        backend: Box<dyn ChatBackend>,
        quotes: Option<Box<dyn QuoteSource>>,
        transcript: TranscriptStore,
        log: Arc<dyn EventLog>,
        log_file: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            quotes,
            transcript,
            log,
            log_file: log_file.into(),
        }
    }

    #[cfg(test)]
    pub fn transcript(&self) -> &TranscriptStore {
        &self.transcript
    }

    /// Greeting plus the list of in-session commands.
    pub fn write_banner<W: Write>(&self, out: &mut W, hour: u32) -> io::Result<()> {
        writeln!(out, "{}", greeting(hour))?;
        writeln!(
            out,
            "Digite '{}' ou '{}' para encerrar a conversa.",
            EXIT_TOKENS[..2].join("', '"),
            EXIT_TOKENS[2]
        )?;
        writeln!(out, "Digite '{}' para ver os comandos disponíveis.", HELP)?;
        if self.quotes.is_some() {
            writeln!(out, "Digite '{}' para ver a cotação atual do dólar.", QUOTE)?;
        }
        writeln!(out)
    }

    /// Runs until an exit command or end of input.
    ///
    /// A line that is not valid UTF-8 is reported like any other turn fault. Other
    /// read failures, and a failure to write a fault notice to `out`, end the loop
    /// with an error; neither path saves the transcript.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(out)?;
                    self.log.warn("End of input reached; transcript not saved.");
                    return Ok(());
                }
                Ok(_) => {}
                // read_line has already consumed the offending bytes
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.report(&ChatError::Io(e), out)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            let line = line.trim_end_matches(['\r', '\n']);

            match self.handle_line(line, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Terminate) => return Ok(()),
                Err(e) => self.report(&e, out)?,
            }
        }
    }

    /// Classifies and handles one line of input.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match classify(line, self.quotes.is_some()) {
            Intent::Exit => {
                if let Err(e) = writeln!(out, "{}", FAREWELL) {
                    self.log.warn(&format!("Could not print farewell: {}", e));
                }
                self.transcript.persist(self.log.as_ref());
                Ok(Flow::Terminate)
            }
            Intent::Help => {
                writeln!(out, "Comandos disponíveis:")?;
                for help_line in help_lines(self.quotes.is_some()) {
                    writeln!(out, "{}", help_line)?;
                }
                Ok(Flow::Continue)
            }
            Intent::Quote => {
                let reply = match &self.quotes {
                    Some(source) => quote_reply(source.fetch()),
                    None => QUOTE_UNAVAILABLE.to_string(),
                };
                self.log.info(&format!("ChatBot: {}", reply));
                self.transcript.append(Message::assistant(reply.as_str()));
                writeln!(out, "ChatBot: {}\n", reply)?;
                Ok(Flow::Continue)
            }
            Intent::FreeText => {
                self.transcript.append(Message::user(line));
                let reply = self.backend.chat(self.transcript.messages())?;
                self.transcript.append(reply.clone());
                self.log.info(&format!("User: {}", line));
                self.log.info(&format!("ChatBot: {}", reply.content));
                writeln!(out, "ChatBot: {}\n", reply.content)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn report<W: Write>(&self, err: &ChatError, out: &mut W) -> io::Result<()> {
        let detail = match err {
            ChatError::Backend(BackendError::Network(_)) => format!("Backend unreachable: {}", err),
            ChatError::Backend(BackendError::MalformedResponse(_)) => {
                format!("Backend returned an unusable reply: {}", err)
            }
            ChatError::Backend(BackendError::Rejected { .. }) => format!("Backend call failed: {}", err),
            ChatError::Io(_) => format!("Terminal I/O failed: {}", err),
            ChatError::Json(_) | ChatError::Persistence(_) | ChatError::HttpClient(_) => {
                format!("Error during execution: {}", err)
            }
        };
        self.log.error(&detail);
        writeln!(
            out,
            "Erro localizado durante execução. Para mais detalhes, verifique o arquivo '{}'.",
            self.log_file
        )
    }
}
