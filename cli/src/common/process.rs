//! # Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Every external tool the scaffold workflows drive (`git`, `docker`, the
//! Angular CLI, `python3`) is started through this module. Commands run to
//! completion one at a time with inherited stdio, so the operator sees the
//! tool's own progress output in place.
//!
//! ## Architecture
//!
//! - **`Invocation`**: program, arguments and working directory of one call.
//! - **`ToolRunner`**: the seam between workflows and the OS. It reports the
//!   exit status and leaves the interpretation to the caller, so `git init`
//!   can fail as a `VcsInit` error while everything else fails as
//!   `ExternalTool`.
//! - **`SystemRunner`**: the production runner on `tokio::process::Command`.
//! - **`run_checked`**: runs an invocation and turns a non-zero exit into
//!   `ScaffoldError::ExternalTool`.
//!
//! ## Usage
//!
//! ```rust
//! let inv = Invocation::new(&cfg.tools.docker, ["build", "-t", ctx.build_tag(), "."], ctx.root());
//! process::run_checked(&SystemRunner, &inv).await?;
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::{debug, error, info, instrument};

/// One external command: what to run and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl ToolStatus {
    /// Exit code for messages; `?` when the process was killed by a signal.
    pub fn code_display(&self) -> String {
        self.code.map_or("?".to_string(), |c| c.to_string())
    }
}

/// Runs external commands on behalf of the workflows.
pub trait ToolRunner {
    /// Runs `invocation` to completion and reports its exit status. An `Err`
    /// means the process could not be started at all.
    async fn run(&self, invocation: &Invocation) -> Result<ToolStatus>;
}

/// Spawns real processes with inherited stdin/stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    #[instrument(skip_all, fields(cmd = %invocation))]
    async fn run(&self, invocation: &Invocation) -> Result<ToolStatus> {
        info!("Executing command: {}", invocation);
        debug!("Working directory: {}", invocation.cwd.display());

        let status = tokio::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| {
                format!(
                    "Failed to execute command '{}'. Is it installed and in PATH?",
                    invocation.program
                )
            })?;

        Ok(ToolStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// Runs `invocation` and fails with `ScaffoldError::ExternalTool` on a
/// non-zero exit.
pub async fn run_checked<R: ToolRunner>(runner: &R, invocation: &Invocation) -> Result<()> {
    let status = runner.run(invocation).await?;
    if !status.success {
        error!(
            "Command '{}' failed with exit code {}",
            invocation,
            status.code_display()
        );
        return Err(anyhow!(ScaffoldError::ExternalTool {
            cmd: invocation.to_string(),
            status: status.code_display(),
        }));
    }
    debug!("Command '{}' completed successfully.", invocation);
    Ok(())
}

/// Test doubles for `ToolRunner`.
#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every invocation and reports success unless the invocation
    /// matches the configured failure predicate.
    #[derive(Default)]
    pub struct RecordingRunner {
        calls: RefCell<Vec<Invocation>>,
        fail_when: Option<Box<dyn Fn(&Invocation) -> bool>>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_when(predicate: impl Fn(&Invocation) -> bool + 'static) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_when: Some(Box::new(predicate)),
            }
        }

        pub fn calls(&self) -> Vec<Invocation> {
            self.calls.borrow().clone()
        }

        /// The recorded calls rendered as command lines.
        pub fn command_lines(&self) -> Vec<String> {
            self.calls.borrow().iter().map(ToString::to_string).collect()
        }
    }

    impl ToolRunner for RecordingRunner {
        async fn run(&self, invocation: &Invocation) -> Result<ToolStatus> {
            self.calls.borrow_mut().push(invocation.clone());
            let failed = self.fail_when.as_ref().is_some_and(|f| f(invocation));
            Ok(ToolStatus {
                success: !failed,
                code: Some(if failed { 1 } else { 0 }),
            })
        }
    }
}
