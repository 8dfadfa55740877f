//! # Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks for the scaffold workflows. Command handlers in
//! `commands::` compose these; nothing here knows which workflow is running.
//!
//! - **`docker`**: `docker build` / `docker compose` wrappers and the
//!   container validation state machine.
//! - **`fs`**: directory creation, file writes and deletes with typed errors.
//! - **`git`**: `git init` and the `.gitignore` writer.
//! - **`process`**: the `ToolRunner` seam every external command goes through.
//! - **`ui`**: colored status lines and the name/path prompts.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{fs, git, process::SystemRunner};
//!
//! git::init_repo(&SystemRunner, &cfg.tools.git, &ctx).await?;
//! fs::io::materialize(&ctx, &files)?;
//! ```
//!

/// Docker CLI wrappers and container validation.
pub mod docker;
/// Filesystem operations.
pub mod fs;
/// Version control setup.
pub mod git;
/// External process execution.
pub mod process;
/// Terminal output and prompts.
pub mod ui;
