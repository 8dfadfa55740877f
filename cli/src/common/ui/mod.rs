//! # Terminal UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Operator-facing output. Status lines are colored with `console::style`
//! (color is dropped automatically when the stream is not a terminal) and
//! carry no contract beyond readability. Diagnostics go through `tracing`
//! instead; these helpers are only for what the operator is meant to read.
//!
//! - `banner`: cyan, bold; first line of a workflow
//! - `step`: yellow; announces the next action
//! - `note`: plain informational line
//! - `success`: green, bold
//! - `error`: red, bold, on stderr
//!
//! Interactive input lives in the `prompts` submodule.
//!
use console::style;

/// Prompting for the repository name and location.
pub mod prompts;

pub fn banner(msg: &str) {
    println!("{}", style(msg).cyan().bold());
}

pub fn step(msg: &str) {
    println!("{}", style(msg).yellow());
}

pub fn note(msg: &str) {
    println!("{}", msg);
}

pub fn success(msg: &str) {
    println!("{} {}", style("✅").green(), style(msg).green().bold());
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("❌").red(), style(msg).red().bold());
}
