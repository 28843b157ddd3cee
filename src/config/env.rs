//! Environment option handling

use log::debug;

use super::cli::{parse_tokens, report_parse_failure, ParseFailure, RawOpts};

/// Environment variable holding extra launcher options, tokenized with
/// shell rules and parsed like a command line.
pub const OPTIONS_VAR: &str = "LMENU_OPTS";

/// Environment variable the `--display` value is exported to.
pub const DISPLAY_VAR: &str = "DISPLAY";

/// Parse a shell-tokenizable option string, the environment
/// counterpart of the command-line pass. Malformed input contributes
/// nothing after a diagnostic.
pub(crate) fn parse_opts_string(raw: &str) -> RawOpts {
    let tokens = match shell_words::split(raw) {
        Ok(tokens) => tokens,
        Err(err) => {
            report_parse_failure(&ParseFailure::Tokenize(err));
            return RawOpts::default();
        }
    };
    debug!("{} option tokens from ${}", tokens.len(), OPTIONS_VAR);
    let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
    parse_tokens(&tokens)
}
