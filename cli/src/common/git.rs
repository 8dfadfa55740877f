//! # Git Repository Setup (`common::git`)
//!
//! File: cli/src/common/git.rs
//!
//! Initializes version control in the repository root and writes the ignore
//! file. A non-zero exit from `git init` is reported as
//! `ScaffoldError::VcsInit` and aborts the workflow.
//!
use crate::common::fs::io;
use crate::common::process::{Invocation, ToolRunner};
use crate::common::ui;
use crate::core::error::{Result, ScaffoldError};
use crate::core::workflow::WorkflowContext;
use anyhow::{anyhow, Context};
use tracing::{error, info};

/// Runs `<git> init` with the repository root as working directory.
pub async fn init_repo<R: ToolRunner>(runner: &R, git: &str, ctx: &WorkflowContext) -> Result<()> {
    ui::step("Initializing Git repository...");
    let invocation = Invocation::new(git, ["init"], ctx.root());
    let status = runner
        .run(&invocation)
        .await
        .context("Failed to initialize Git repository")?;
    if !status.success {
        error!("`{}` exited with {}", invocation, status.code_display());
        return Err(anyhow!(ScaffoldError::VcsInit {
            cmd: invocation.to_string(),
            status: status.code_display(),
        }));
    }
    info!("Git repository initialized at {}", ctx.root().display());
    Ok(())
}

/// Writes `template` to `.gitignore` in the repository root.
pub fn write_ignore_file(ctx: &WorkflowContext, template: &str) -> Result<()> {
    ui::step("Adding .gitignore to repository...");
    io::write_file(&ctx.path(".gitignore"), template).context("Failed to add .gitignore")?;
    ui::note("Added .gitignore to the repo.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::process::testing::RecordingRunner;
    use crate::core::templating::PYTHON_GITIGNORE;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_init_repo_runs_in_root() -> Result<()> {
        let dir = tempdir()?;
        let ctx = WorkflowContext::new(dir.path().to_path_buf(), "demo");
        let runner = RecordingRunner::new();

        init_repo(&runner, "git", &ctx).await?;

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to_string(), "git init");
        assert_eq!(calls[0].cwd, dir.path());
        Ok(())
    }

    #[tokio::test]
    async fn test_init_repo_failure_is_vcs_error() {
        let dir = tempdir().unwrap();
        let ctx = WorkflowContext::new(dir.path().to_path_buf(), "demo");
        let runner = RecordingRunner::failing_when(|_| true);

        let err = init_repo(&runner, "git", &ctx).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::VcsInit { .. })
        ));
    }

    #[test]
    fn test_write_ignore_file() -> Result<()> {
        let dir = tempdir()?;
        let ctx = WorkflowContext::new(dir.path().to_path_buf(), "demo");
        write_ignore_file(&ctx, PYTHON_GITIGNORE)?;
        assert_eq!(fs::read_to_string(dir.path().join(".gitignore"))?, PYTHON_GITIGNORE);
        Ok(())
    }

    #[test]
    fn test_write_ignore_file_missing_root() {
        let dir = tempdir().unwrap();
        let ctx = WorkflowContext::new(dir.path().join("never-created"), "demo");
        assert!(write_ignore_file(&ctx, "target/\n").is_err());
    }
}
