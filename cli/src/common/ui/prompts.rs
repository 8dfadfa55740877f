//! # Prompt Collector
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! Asks the operator for the repository name and the base path, and turns
//! the answers into a `ProjectRequest`. An empty or whitespace-only name
//! fails with `ScaffoldError::EmptyName` before anything touches the disk.
//!
//! ## Architecture
//!
//! Input goes through the `Prompter` trait:
//! - `TerminalPrompter` uses `dialoguer` widgets when a person is at the
//!   terminal.
//! - `LinePrompter` reads newline-terminated answers from any `BufRead`,
//!   which covers piped stdin and tests. End of input counts as an empty
//!   answer.
//!
//! `stdin_prompter` picks `TerminalPrompter` only when stdin is a terminal
//! and `console::user_attended()` reports stdout is one as well.
//!
use crate::core::error::{Result, ScaffoldError};
use crate::core::request::{ProjectKind, ProjectRequest};
use anyhow::anyhow;
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;

pub const NAME_PROMPT: &str = "Enter the repository name";
pub const PATH_PROMPT: &str = "Enter the relative path where the repository should be created";
pub const DEFAULT_BASE_PATH: &str = ".";

/// A source of answers to single-line questions.
pub trait Prompter {
    /// Asks `prompt` and returns the raw answer, or `default` when the answer
    /// is blank and a default exists.
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// `dialoguer`-backed prompts for interactive terminals.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .map_err(|e| anyhow!(ScaffoldError::Prompt(e.to_string())))
    }
}

/// Line-oriented prompts over arbitrary reader/writer pairs.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let shown = match default {
            Some(default) => format!("{} [{}]: ", prompt, default),
            None => format!("{}: ", prompt),
        };
        self.output
            .write_all(shown.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| anyhow!(ScaffoldError::Prompt(e.to_string())))?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|e| anyhow!(ScaffoldError::Prompt(e.to_string())))?;
        let answer = line.trim_end_matches(['\r', '\n']);

        match default {
            Some(default) if answer.trim().is_empty() => Ok(default.to_string()),
            _ => Ok(answer.to_string()),
        }
    }
}

/// Prompter for the process's stdin: widgets when both stdin and stdout are
/// a terminal, plain lines otherwise (piped answers, redirected output).
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if wants_terminal_widgets(std::io::stdin().is_terminal(), console::user_attended()) {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(
            std::io::stdin().lock(),
            std::io::stdout(),
        ))
    }
}

/// `dialoguer` reads keys from the tty, not from stdin, so piped answers
/// would be ignored unless stdin is the terminal too.
fn wants_terminal_widgets(stdin_is_terminal: bool, stdout_is_terminal: bool) -> bool {
    stdin_is_terminal && stdout_is_terminal
}

/// Collects the repository name and base path and builds the request.
///
/// The name is checked before the path is asked for, so an empty name ends
/// the run after a single question.
pub fn collect_request(
    prompter: &mut dyn Prompter,
    kind: ProjectKind,
    enable_container_validation: bool,
) -> Result<ProjectRequest> {
    let name = prompter.ask(NAME_PROMPT, None)?;
    if name.trim().is_empty() {
        return Err(anyhow!(ScaffoldError::EmptyName));
    }

    let base = prompter.ask(PATH_PROMPT, Some(DEFAULT_BASE_PATH))?;
    let base = base.trim();
    let base = if base.is_empty() { DEFAULT_BASE_PATH } else { base };
    let base_path = PathBuf::from(shellexpand::tilde(base).into_owned());
    debug!("Collected name '{}' and base path {:?}", name.trim(), base_path);

    ProjectRequest::new(kind, &name, base_path, enable_container_validation)
}
