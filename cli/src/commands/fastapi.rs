//! # FastAPI Scaffold Command
//!
//! File: cli/src/commands/fastapi.rs
//!
//! ## Overview
//!
//! Implements `project fastapi` (alias `backend`). Creates a repository for a
//! containerized FastAPI service:
//!
//! ```text
//! <name>/
//! ├── .gitignore
//! ├── docker-compose.yml
//! ├── env/                      (virtual environment, optional)
//! ├── src/
//! │   ├── Dockerfile
//! │   └── app/
//! │       ├── requirements.txt
//! │       ├── main.py
//! │       ├── models/__init__.py
//! │       ├── functions/__init__.py
//! │       └── routers/__init__.py
//! └── tests/
//!     └── test_api.py
//! ```
//!
//! ## Workflow
//!
//! 1. Prompt for the repository name (fails before any disk change if empty)
//!    and base path.
//! 2. Create the repository root.
//! 3. `git init`, then write the Python `.gitignore`.
//! 4. Create the virtual environment when `fastapi.create_venv` is set.
//! 5. Render and write the service files.
//!
//! Any failure stops the run; files already written stay on disk.
//!
use crate::common::fs::io;
use crate::common::git;
use crate::common::process::{self, Invocation, SystemRunner, ToolRunner};
use crate::common::ui::{self, prompts::{self, Prompter}};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::request::ProjectKind;
use crate::core::templating::{self, TemplateParams, PYTHON_GITIGNORE};
use crate::core::workflow::WorkflowContext;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `project fastapi`. The workflow is fully interactive.
#[derive(Parser, Debug)]
pub struct FastapiArgs {}

/// Handles the `project fastapi` command.
pub async fn handle_fastapi(_args: FastapiArgs, config: &Config) -> Result<()> {
    ui::banner("🚀 Welcome to the FastAPI Project Setup Tool! 🚀");
    let mut prompter = prompts::stdin_prompter();
    let ctx = scaffold(prompter.as_mut(), &SystemRunner, config).await?;
    ui::success(&format!(
        "FastAPI project '{}' created at {}",
        ctx.repo_name(),
        ctx.root().display()
    ));
    Ok(())
}

/// Runs the backend scaffold and returns the context of the created repository.
pub async fn scaffold<R: ToolRunner>(
    prompter: &mut dyn Prompter,
    runner: &R,
    config: &Config,
) -> Result<WorkflowContext> {
    let request = prompts::collect_request(prompter, ProjectKind::Backend, false)?;
    let ctx = WorkflowContext::establish(&request)?;

    git::init_repo(runner, &config.tools.git, &ctx).await?;
    git::write_ignore_file(&ctx, PYTHON_GITIGNORE)?;

    if config.fastapi.create_venv {
        ui::step("Creating virtual environment...");
        let venv = Invocation::new(
            &config.tools.python,
            ["-m", "venv", config.fastapi.venv_dir.as_str()],
            ctx.root(),
        );
        process::run_checked(runner, &venv)
            .await
            .context("Failed to create the Python virtual environment")?;
    }

    ui::step("Creating project files...");
    let params = TemplateParams::new(
        &ctx,
        request.kind().port(),
        &config.network.external,
        &config.network.ipv4_address,
    );
    let files = templating::render(request.kind(), &params)?;
    io::materialize(&ctx, &files)?;
    info!("FastAPI scaffold complete at {}", ctx.root().display());
    Ok(ctx)
}
