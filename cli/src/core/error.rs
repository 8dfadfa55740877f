//! # Scaffold Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy shared by every scaffold workflow.
//! Each variant names one class of fatal failure; there is no local recovery
//! anywhere in the tool, so every error unwinds to `main`, which prints it and
//! exits with status 1.
//!
//! ## Architecture
//!
//! The error system follows the same two-part shape used across the CLI:
//! - `ScaffoldError`: a `thiserror` enum for the specific failure kinds
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can attach
//!   step context with `.context(...)`
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if name.trim().is_empty() {
//!     return Err(anyhow!(ScaffoldError::EmptyName));
//! }
//!
//! // Add context to errors using anyhow
//! write_file(&path, &content)
//!     .with_context(|| format!("Failed to write {}", path.display()))?;
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::EmptyName)) => {
//!         /* ... */
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the scaffolding workflows.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Repository name cannot be empty.")]
    EmptyName,

    #[error("Invalid repository name '{0}': it must be a single directory name.")]
    InvalidName(String),

    #[error("Failed to initialize Git repository (`{cmd}` exited with status {status}).")]
    VcsInit { cmd: String, status: String },

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalTool { cmd: String, status: String },

    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete file '{}': {source}", path.display())]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Type alias for Result using anyhow::Error so every step can add context.
pub type Result<T> = anyhow::Result<T>;
