//! In-session command tokens and intent classification.
//!
//! Every raw input line is classified into exactly one `Intent`. Tokens are matched
//! after trimming surrounding whitespace and ignoring ASCII case; the order of the
//! checks is exit, help, quote, then free text.
use strum_macros::EnumString;

/// Help command token.
pub const HELP: &str = "/ajuda";
/// Exchange-rate command token.
pub const QUOTE: &str = "/dolar";
/// Tokens that end the session.
pub const EXIT_TOKENS: [&str; 3] = ["sair", "exit", "quit"];

/// Recognized command keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum Keyword {
    #[strum(serialize = "sair", serialize = "exit", serialize = "quit")]
    Exit,
    #[strum(serialize = "/ajuda")]
    Help,
    #[strum(serialize = "/dolar")]
    Quote,
}

/// Classified meaning of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// End the session and save the transcript.
    Exit,
    /// Print the command list.
    Help,
    /// Fetch the USD/BRL rate.
    Quote,
    /// Send the line to the model backend.
    FreeText,
}

/// Classifies `line`. With `quote_enabled == false` the quote token is ordinary text.
pub fn classify(line: &str, quote_enabled: bool) -> Intent {
    match line.trim().parse::<Keyword>() {
        Ok(Keyword::Exit) => Intent::Exit,
        Ok(Keyword::Help) => Intent::Help,
        Ok(Keyword::Quote) if quote_enabled => Intent::Quote,
        Ok(Keyword::Quote) | Err(_) => Intent::FreeText,
    }
}

/// Lines of the help text, one per available command.
pub fn help_lines(quote_enabled: bool) -> Vec<String> {
    let mut lines = vec![
        format!("- '{}': Encerrar o chat.", EXIT_TOKENS.join("', '")),
        format!("- '{}': Mostrar esta lista de comandos.", HELP),
    ];
    if quote_enabled {
        lines.push(format!("- '{}': Ver a cotação atual do dólar.", QUOTE));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_tokens_ignore_case_and_whitespace() {
        for line in ["sair", "EXIT", "Quit", "  sair\n", "exit\r\n"] {
            assert_eq!(classify(line, true), Intent::Exit, "{line:?}");
        }
    }

    #[test]
    fn commands_are_recognized() {
        assert_eq!(classify("/ajuda", true), Intent::Help);
        assert_eq!(classify("/AJUDA", false), Intent::Help);
        assert_eq!(classify("/dolar", true), Intent::Quote);
        assert_eq!(classify("/Dolar ", true), Intent::Quote);
    }

    #[test]
    fn quote_token_is_free_text_when_disabled() {
        assert_eq!(classify("/dolar", false), Intent::FreeText);
    }

    #[test]
    fn partial_or_embedded_tokens_are_free_text() {
        for line in ["sair agora", "exit!", "/ajud", "quero /dolar", "", "olá"] {
            assert_eq!(classify(line, true), Intent::FreeText, "{line:?}");
        }
    }

    #[test]
    fn help_lists_quote_only_when_enabled() {
        assert_eq!(help_lines(false).len(), 2);
        let lines = help_lines(true);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "- 'sair', 'exit', 'quit': Encerrar o chat.");
        assert!(lines[2].contains("/dolar"));
    }
}
