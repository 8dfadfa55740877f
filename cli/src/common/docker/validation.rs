//! # Container Validation Workflow
//!
//! File: cli/src/common/docker/validation.rs
//!
//! ## Overview
//!
//! Optional last phase of the Angular scaffold (`project angular --docker`).
//! It proves the generated project builds and starts in a container, then
//! leaves the development container running in its permanent configuration.
//!
//! ## Architecture
//!
//! The workflow is a linear state machine; each `advance` performs exactly
//! one transition:
//!
//! ```text
//! Idle --build image--> Built --write transient manifest, up--> DevUp
//!   --settle, down--> DevDown --delete transient, write final--> DevFileReplaced
//!   --final up--> FinalUp --> Done
//! ```
//!
//! Any failed transition moves to `Failed`, which is absorbing. The returned
//! error names the step that failed and the last state reached so the
//! operator can clean up by hand; containers that are already up and
//! manifests already written are left in place.
//!
//! The transient manifest (`docker-compose.dev.bootstrap.yml`) relies on the
//! image's default command. After teardown it is deleted and the final
//! manifest (`docker-compose.dev.yml`), which runs `ng serve` explicitly, is
//! written and brought up detached. The transient path never exists after a
//! successful run.
//!
//! The wait between dev up and dev down goes through the `Settle` trait so
//! tests can skip it.
//!
use crate::common::docker;
use crate::common::fs::io;
use crate::common::process::ToolRunner;
use crate::common::ui;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::templating::{self, DevManifest, TemplateParams, ANGULAR_DEV_PORT};
use crate::core::workflow::WorkflowContext;
use anyhow::Context;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info};

/// Development manifest used once to check the image starts.
pub const TRANSIENT_MANIFEST: &str = "docker-compose.dev.bootstrap.yml";
/// Development manifest left in place and running after validation.
pub const FINAL_MANIFEST: &str = "docker-compose.dev.yml";

/// Waits for the development container to initialize.
pub trait Settle {
    async fn settle(&self, duration: Duration);
}

/// Sleeps for the full duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedDelay;

impl Settle for FixedDelay {
    async fn settle(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    Idle,
    Built,
    DevUp,
    DevDown,
    DevFileReplaced,
    FinalUp,
    Done,
    Failed,
}

impl ValidationState {
    /// What the transition out of this state does, for error messages.
    fn pending_step(self) -> &'static str {
        match self {
            ValidationState::Idle => "building the image",
            ValidationState::Built => "starting the development containers",
            ValidationState::DevUp => "stopping the development containers",
            ValidationState::DevDown => "replacing the development manifest",
            ValidationState::DevFileReplaced => "starting the final containers",
            ValidationState::FinalUp => "finishing",
            ValidationState::Done | ValidationState::Failed => "resuming a finished validation",
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub struct ContainerValidation<'a, R, S> {
    ctx: &'a WorkflowContext,
    runner: &'a R,
    settle: &'a S,
    docker: &'a str,
    settle_for: Duration,
    params: TemplateParams,
    state: ValidationState,
}

impl<'a, R: ToolRunner, S: Settle> ContainerValidation<'a, R, S> {
    pub fn new(
        ctx: &'a WorkflowContext,
        config: &'a Config,
        runner: &'a R,
        settle: &'a S,
    ) -> Self {
        Self {
            ctx,
            runner,
            settle,
            docker: &config.tools.docker,
            settle_for: config.validation.settle_duration(),
            params: TemplateParams::new(
                ctx,
                ANGULAR_DEV_PORT,
                &config.network.external,
                &config.network.dev_ipv4_address,
            ),
            state: ValidationState::Idle,
        }
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Drives the workflow from its current state to `Done`.
    pub async fn run(&mut self) -> Result<()> {
        while self.state != ValidationState::Done {
            let from = self.state;
            match self.advance().await {
                Ok(next) => {
                    debug!("Container validation: {} -> {}", from, next);
                    self.state = next;
                }
                Err(e) => {
                    self.state = ValidationState::Failed;
                    error!("Container validation failed in state {}: {:#}", from, e);
                    return Err(e.context(format!(
                        "Container validation failed while {} (last completed state: {}). \
                         Containers and manifests were left as they are.",
                        from.pending_step(),
                        from
                    )));
                }
            }
        }
        ui::success("Docker Dev Setup successful");
        Ok(())
    }

    async fn advance(&self) -> Result<ValidationState> {
        match self.state {
            ValidationState::Idle => {
                let dockerfile = templating::render_dev_dockerfile(&self.params)?;
                io::materialize(self.ctx, std::slice::from_ref(&dockerfile))?;
                ui::step(&format!("Building image {}...", self.ctx.build_tag()));
                docker::build_image(self.runner, self.docker, self.ctx, ".").await?;
                ui::step("Docker build executed");
                Ok(ValidationState::Built)
            }
            ValidationState::Built => {
                self.write_manifest(DevManifest::Transient, TRANSIENT_MANIFEST)?;
                ui::step("Docker Dev Setup created.");
                docker::compose_up(self.runner, self.docker, self.ctx, TRANSIENT_MANIFEST)
                    .await?;
                Ok(ValidationState::DevUp)
            }
            ValidationState::DevUp => {
                ui::note(&format!("Waiting for {} seconds...", self.settle_for.as_secs()));
                self.settle.settle(self.settle_for).await;
                docker::compose_down(self.runner, self.docker, self.ctx, TRANSIENT_MANIFEST)
                    .await?;
                Ok(ValidationState::DevDown)
            }
            ValidationState::DevDown => {
                let transient = self.ctx.path(TRANSIENT_MANIFEST);
                io::remove_file(&transient)?;
                ui::note(&format!("File '{}' has been deleted.", transient.display()));
                self.write_manifest(DevManifest::Final, FINAL_MANIFEST)?;
                ui::note("Continuing with the setup...");
                Ok(ValidationState::DevFileReplaced)
            }
            ValidationState::DevFileReplaced => {
                docker::compose_up(self.runner, self.docker, self.ctx, FINAL_MANIFEST).await?;
                info!("Final development containers are up");
                Ok(ValidationState::FinalUp)
            }
            ValidationState::FinalUp => Ok(ValidationState::Done),
            ValidationState::Done | ValidationState::Failed => {
                anyhow::bail!("Container validation already finished in state {}", self.state)
            }
        }
    }

    fn write_manifest(&self, which: DevManifest, relative_path: &str) -> Result<()> {
        let manifest = templating::render_dev_manifest(&self.params, which, relative_path)?;
        io::write_file(&self.ctx.path(relative_path), &manifest.content)
            .with_context(|| format!("Failed to write {}", relative_path))
    }
}
