//! # Angular Scaffold Command
//!
//! File: cli/src/commands/angular.rs
//!
//! ## Overview
//!
//! Implements `project angular [--docker]` (alias `frontend`). Creates a
//! repository, lets the Angular CLI generate the application into it
//! (`ng new <name> --directory . --defaults`), then adds the production
//! container files: a compose manifest and a two-stage `src/Dockerfile` that
//! builds with Node and serves the bundle from nginx on port 80.
//!
//! With `--docker` the container validation workflow runs afterwards
//! (see `common::docker::validation`): it builds a development image, checks
//! it starts, and leaves it running from `docker-compose.dev.yml`.
//!
//! ## Workflow
//!
//! 1. Prompt for name and base path, create the repository root.
//! 2. `git init` in the root.
//! 3. `ng new`. A failure here stops the run; validation is never attempted
//!    on a half-generated project.
//! 4. Render and write the production container files.
//! 5. Optional container validation.
//!
use crate::common::docker::validation::{ContainerValidation, FixedDelay, Settle};
use crate::common::fs::io;
use crate::common::git;
use crate::common::process::{self, Invocation, SystemRunner, ToolRunner};
use crate::common::ui::{self, prompts::{self, Prompter}};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::request::ProjectKind;
use crate::core::templating::{self, TemplateParams};
use crate::core::workflow::WorkflowContext;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `project angular`.
#[derive(Parser, Debug)]
pub struct AngularArgs {
    /// Build the development image and leave it running via docker compose.
    #[arg(long)]
    pub docker: bool,
}

/// Handles the `project angular` command.
pub async fn handle_angular(args: AngularArgs, config: &Config) -> Result<()> {
    ui::banner("🚀 Welcome to the Angular Project Setup Tool! 🚀");
    let mut prompter = prompts::stdin_prompter();
    let ctx = scaffold(
        prompter.as_mut(),
        &SystemRunner,
        &FixedDelay,
        config,
        args.docker,
    )
    .await?;
    ui::success(&format!(
        "Angular project '{}' created at {}",
        ctx.repo_name(),
        ctx.root().display()
    ));
    Ok(())
}

/// Runs the frontend scaffold, and the container validation when
/// `validate` is set.
pub async fn scaffold<R: ToolRunner, S: Settle>(
    prompter: &mut dyn Prompter,
    runner: &R,
    settle: &S,
    config: &Config,
    validate: bool,
) -> Result<WorkflowContext> {
    let request = prompts::collect_request(prompter, ProjectKind::Frontend, validate)?;
    let ctx = WorkflowContext::establish(&request)?;

    git::init_repo(runner, &config.tools.git, &ctx).await?;

    ui::step("Generating the Angular application...");
    let generate = Invocation::new(
        &config.tools.angular_cli,
        ["new", ctx.repo_name(), "--directory", ".", "--defaults"],
        ctx.root(),
    );
    process::run_checked(runner, &generate)
        .await
        .context("Angular CLI failed to generate the application")?;

    ui::step("Adding container files...");
    let params = TemplateParams::new(
        &ctx,
        request.kind().port(),
        &config.network.external,
        &config.network.ipv4_address,
    );
    let files = templating::render(request.kind(), &params)?;
    io::materialize(&ctx, &files)?;

    if request.enable_container_validation() {
        ContainerValidation::new(&ctx, config, runner, settle).run().await?;
    }
    info!("Angular scaffold complete at {}", ctx.root().display());
    Ok(ctx)
}
