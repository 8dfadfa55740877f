//! # Docker CLI Interface (`common::docker`)
//!
//! File: cli/src/common/docker/mod.rs
//!
//! ## Overview
//!
//! Wrappers for the three Docker CLI calls the scaffold tool makes, plus the
//! container validation workflow built on them. Calls go through a
//! `ToolRunner`, run in the repository root, and fail with
//! `ScaffoldError::ExternalTool` on a non-zero exit.
//!
//! - `build_image`: `docker build -t <tag> <context>`
//! - `compose_up`: `docker compose -f <file> up -d`
//! - `compose_down`: `docker compose -f <file> down`
//!
//! ## Usage
//!
//! ```rust
//! docker::build_image(&runner, &cfg.tools.docker, &ctx, ".").await?;
//! docker::compose_up(&runner, &cfg.tools.docker, &ctx, "docker-compose.dev.yml").await?;
//! ```
//!
use crate::common::process::{self, Invocation, ToolRunner};
use crate::core::error::Result;
use crate::core::workflow::WorkflowContext;

/// The validation state machine (build, dev up/down, manifest swap, final up).
pub mod validation;

pub async fn build_image<R: ToolRunner>(
    runner: &R,
    docker: &str,
    ctx: &WorkflowContext,
    context_dir: &str,
) -> Result<()> {
    let invocation = Invocation::new(
        docker,
        ["build", "-t", ctx.build_tag(), context_dir],
        ctx.root(),
    );
    process::run_checked(runner, &invocation).await
}

pub async fn compose_up<R: ToolRunner>(
    runner: &R,
    docker: &str,
    ctx: &WorkflowContext,
    manifest: &str,
) -> Result<()> {
    let invocation = Invocation::new(
        docker,
        ["compose", "-f", manifest, "up", "-d"],
        ctx.root(),
    );
    process::run_checked(runner, &invocation).await
}

pub async fn compose_down<R: ToolRunner>(
    runner: &R,
    docker: &str,
    ctx: &WorkflowContext,
    manifest: &str,
) -> Result<()> {
    let invocation = Invocation::new(
        docker,
        ["compose", "-f", manifest, "down"],
        ctx.root(),
    );
    process::run_checked(runner, &invocation).await
}
