//! Rustyline helper: completion, highlighting, and hints for slash commands.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Every slash command the REPL understands, for tab completion.
const COMMANDS: &[&str] = &[
    "/view", "/mode", "/theme", "/history", "/chat", "/voice", "/save", "/show", "/back", "/nav",
    "/help", "/quit",
];

#[derive(Clone, Copy, Default)]
pub struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, Vec::new()));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: (*cmd).to_string(),
                replacement: (*cmd).to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    // Command and nav lines stand out from plain content submissions.
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') || line.starts_with('?') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }

        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use rustyline::history::DefaultHistory;

    use super::*;

    #[test]
    fn test_hint_completes_partial_command() {
        let helper = CliHelper;
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        assert_eq!(helper.hint("/th", 3, &ctx).as_deref(), Some("eme"));
        assert_eq!(helper.hint("/theme on", 9, &ctx), None);
        assert_eq!(helper.hint("hello", 5, &ctx), None);
    }

    #[test]
    fn test_completion_filters_by_prefix() {
        let helper = CliHelper;
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (start, candidates) = helper.complete("/h", 2, &ctx).unwrap();
        assert_eq!(start, 0);
        let names: Vec<&str> = candidates.iter().map(|p| p.display.as_str()).collect();
        assert_eq!(names, vec!["/history", "/help"]);

        let (_, none) = helper.complete("plain text", 10, &ctx).unwrap();
        assert!(none.is_empty());
    }
}
