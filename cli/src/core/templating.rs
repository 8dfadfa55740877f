//! # Scaffold Template Renderer
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module produces the literal contents of every generated file. Template
//! sources are embedded in the binary from `cli/templates/` and rendered with
//! the Tera engine against a small parameter struct, so rendering is a pure
//! function of its inputs: no filesystem access, no environment lookups, and
//! identical inputs always yield identical output.
//!
//! ## Architecture
//!
//! - `TemplateParams`: the substitution values (repository identifier, build
//!   tag, port, proxy network name and address), serialized into a
//!   `tera::Context`.
//! - `render`: the file set for a `ProjectKind`, as `RenderedFile`s with
//!   repository-relative paths.
//! - `render_dev_dockerfile` / `render_dev_manifest`: the extra files the
//!   container validation workflow writes, rendered on demand.
//! - `PYTHON_GITIGNORE`: static ignore list, written verbatim.
//!
//! Backend (`ProjectKind::Backend`) produces eight files:
//! `docker-compose.yml`, `src/Dockerfile`, `src/app/requirements.txt`,
//! `src/app/main.py`, three `__init__.py` package markers under
//! `src/app/{models,functions,routers}` and `tests/test_api.py`.
//!
//! Frontend (`ProjectKind::Frontend`) produces `docker-compose.yml` and a
//! two-stage `src/Dockerfile`; the rest of the project comes from the Angular
//! CLI.
//!
//! ## Examples
//!
//! ```rust
//! let params = TemplateParams::new(
//!     &ctx,
//!     ProjectKind::Backend.port(),
//!     &cfg.network.external,
//!     &cfg.network.ipv4_address,
//! );
//! for file in templating::render(ProjectKind::Backend, &params)? {
//!     println!("{} ({} bytes)", file.relative_path.display(), file.content.len());
//! }
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use crate::core::request::ProjectKind;
use crate::core::workflow::WorkflowContext;
use anyhow::anyhow;
use serde::Serialize;
use std::path::PathBuf;
use tera::Tera;
use tracing::debug;

const FASTAPI_COMPOSE: &str = include_str!("../../templates/fastapi/docker-compose.yml.tera");
const FASTAPI_DOCKERFILE: &str = include_str!("../../templates/fastapi/Dockerfile.tera");
const FASTAPI_REQUIREMENTS: &str = include_str!("../../templates/fastapi/requirements.txt.tera");
const FASTAPI_MAIN: &str = include_str!("../../templates/fastapi/main.py.tera");
const FASTAPI_PACKAGE_INIT: &str = include_str!("../../templates/fastapi/__init__.py.tera");
const FASTAPI_TEST: &str = include_str!("../../templates/fastapi/test_api.py.tera");

const ANGULAR_COMPOSE: &str = include_str!("../../templates/angular/docker-compose.yml.tera");
const ANGULAR_DOCKERFILE: &str = include_str!("../../templates/angular/Dockerfile.tera");
const ANGULAR_DEV_DOCKERFILE: &str = include_str!("../../templates/angular/Dockerfile.dev.tera");
const ANGULAR_DEV_COMPOSE: &str =
    include_str!("../../templates/angular/docker-compose.dev.yml.tera");

/// Ignore list written to `.gitignore` for backend projects.
pub const PYTHON_GITIGNORE: &str = include_str!("../../templates/gitignore/python.gitignore");

/// Package directories created under `src/app`, each with an `__init__.py`.
pub const FASTAPI_PACKAGES: [&str; 3] = ["models", "functions", "routers"];

/// Port the Angular development server listens on.
pub const ANGULAR_DEV_PORT: u16 = 4200;

/// Substitution values shared by every template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    /// Docker-safe repository identifier: service, container and network prefix.
    pub repo_name: String,
    /// Lowercase image reference, e.g. `demo:latest`.
    pub build_tag: String,
    pub port: u16,
    pub external_network: String,
    pub ipv4_address: String,
}

impl TemplateParams {
    pub fn new(
        ctx: &WorkflowContext,
        port: u16,
        external_network: &str,
        ipv4_address: &str,
    ) -> Self {
        Self {
            repo_name: ctx.identifier().to_string(),
            build_tag: ctx.build_tag().to_string(),
            port,
            external_network: external_network.to_string(),
            ipv4_address: ipv4_address.to_string(),
        }
    }
}

/// A generated file: repository-relative path plus full contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub relative_path: PathBuf,
    pub content: String,
}

/// Which of the two development manifests to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevManifest {
    /// Relies on the image's default command; used once to validate the image.
    Transient,
    /// Launches `ng serve` explicitly; left running afterwards.
    Final,
}

/// Renders the complete file set for `kind`.
pub fn render(kind: ProjectKind, params: &TemplateParams) -> Result<Vec<RenderedFile>> {
    let context = base_context(params)?;
    let files = match kind {
        ProjectKind::Backend => {
            let mut files = vec![
                rendered("docker-compose.yml", FASTAPI_COMPOSE, &context)?,
                rendered("src/Dockerfile", FASTAPI_DOCKERFILE, &context)?,
                rendered("src/app/requirements.txt", FASTAPI_REQUIREMENTS, &context)?,
                rendered("src/app/main.py", FASTAPI_MAIN, &context)?,
            ];
            for package in FASTAPI_PACKAGES {
                let mut package_context = context.clone();
                package_context.insert("package", package);
                files.push(rendered(
                    &format!("src/app/{}/__init__.py", package),
                    FASTAPI_PACKAGE_INIT,
                    &package_context,
                )?);
            }
            files.push(rendered("tests/test_api.py", FASTAPI_TEST, &context)?);
            files
        }
        ProjectKind::Frontend => vec![
            rendered("docker-compose.yml", ANGULAR_COMPOSE, &context)?,
            rendered("src/Dockerfile", ANGULAR_DOCKERFILE, &context)?,
        ],
    };
    debug!("Rendered {} files for {} project", files.len(), kind);
    Ok(files)
}

/// Renders the development `Dockerfile` built during container validation.
pub fn render_dev_dockerfile(params: &TemplateParams) -> Result<RenderedFile> {
    rendered("Dockerfile", ANGULAR_DEV_DOCKERFILE, &base_context(params)?)
}

/// Renders a development compose manifest destined for `relative_path`.
pub fn render_dev_manifest(
    params: &TemplateParams,
    which: DevManifest,
    relative_path: &str,
) -> Result<RenderedFile> {
    let mut context = base_context(params)?;
    context.insert("serve", &(which == DevManifest::Final));
    rendered(relative_path, ANGULAR_DEV_COMPOSE, &context)
}

fn base_context(params: &TemplateParams) -> Result<tera::Context> {
    tera::Context::from_serialize(params).map_err(|e| {
        anyhow!(ScaffoldError::Template { source: e })
            .context("Failed to create Tera context from template parameters")
    })
}

fn rendered(relative_path: &str, template: &str, context: &tera::Context) -> Result<RenderedFile> {
    let content = Tera::one_off(template, context, false).map_err(|e| {
        anyhow!(ScaffoldError::Template { source: e })
            .context(format!("Tera rendering failed for '{}'", relative_path))
    })?;
    Ok(RenderedFile {
        relative_path: PathBuf::from(relative_path),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn params(repo_name: &str, port: u16) -> TemplateParams {
        let ctx = WorkflowContext::new(PathBuf::from("/unused"), repo_name);
        TemplateParams::new(&ctx, port, "frontproxy_fnet", "172.20.20.90")
    }

    fn find<'a>(files: &'a [RenderedFile], path: &str) -> &'a RenderedFile {
        files
            .iter()
            .find(|f| f.relative_path == Path::new(path))
            .unwrap_or_else(|| panic!("missing rendered file {}", path))
    }

    #[test]
    fn test_backend_file_set() -> Result<()> {
        let files = render(ProjectKind::Backend, &params("demo", 8000))?;
        assert_eq!(files.len(), 8);

        let main = find(&files, "src/app/main.py");
        assert!(main.content.contains("app = FastAPI()"));

        for package in FASTAPI_PACKAGES {
            let init = find(&files, &format!("src/app/{}/__init__.py", package));
            assert_eq!(init.content.trim(), format!("# Init file for {}", package));
        }

        let requirements = find(&files, "src/app/requirements.txt");
        assert_eq!(
            requirements.content.lines().collect::<Vec<_>>(),
            vec!["fastapi", "uvicorn[standard]", "pydantic", "typing_extensions"]
        );
        find(&files, "tests/test_api.py");
        Ok(())
    }

    #[test]
    fn test_backend_compose_uses_repo_name() -> Result<()> {
        let files = render(ProjectKind::Backend, &params("demo", 8000))?;
        let compose = &find(&files, "docker-compose.yml").content;

        assert!(compose.contains("services:\n  demo:\n"));
        assert!(compose.contains("container_name: demo"));
        assert!(compose.contains("name: demo_backend"));
        assert!(compose.contains("- \"8000\""));
        assert!(compose.contains("frontproxy_fnet:\n    external: true"));
        assert!(compose.contains("ipv4_address: 172.20.20.90"));
        assert!(compose.contains("com.docker.network.enable_ipv6: \"false\""));

        let dockerfile = &find(&files, "src/Dockerfile").content;
        assert!(dockerfile.starts_with("FROM python:3.9-slim"));
        assert!(dockerfile.contains("\"--port\", \"8000\""));
        Ok(())
    }

    #[test]
    fn test_render_is_deterministic() -> Result<()> {
        let p = params("demo", 8000);
        assert_eq!(render(ProjectKind::Backend, &p)?, render(ProjectKind::Backend, &p)?);
        let p = params("Demo", 80);
        assert_eq!(render(ProjectKind::Frontend, &p)?, render(ProjectKind::Frontend, &p)?);
        Ok(())
    }

    #[test]
    fn test_frontend_keeps_name_case_and_embeds_build_tag() -> Result<()> {
        let files = render(ProjectKind::Frontend, &params("Demo", 80))?;
        assert_eq!(files.len(), 2);

        let compose = &find(&files, "docker-compose.yml").content;
        assert!(compose.contains("name: Demo_backend"));
        assert!(compose.contains("container_name: Demo"));
        assert!(compose.contains("max-size: \"1024m\""));

        let dockerfile = &find(&files, "src/Dockerfile").content;
        assert!(dockerfile.contains("FROM node:20.11.0-alpine as build"));
        assert!(dockerfile.contains("FROM nginx:latest"));
        assert!(dockerfile.contains("/usr/local/app/dist/demo:latest/browser"));
        assert!(dockerfile.contains("EXPOSE 80"));
        Ok(())
    }

    #[test]
    fn test_dev_manifests_differ_only_by_command() -> Result<()> {
        let p = params("Demo", ANGULAR_DEV_PORT);
        let transient = render_dev_manifest(&p, DevManifest::Transient, "a.yml")?;
        let final_manifest = render_dev_manifest(&p, DevManifest::Final, "b.yml")?;

        assert!(!transient.content.contains("command:"));
        let serve_line =
            "    command: [\"ng\", \"serve\", \"--host\", \"0.0.0.0\", \"--disable-host-check\"]\n";
        assert!(final_manifest.content.contains(serve_line));
        for manifest in [&transient, &final_manifest] {
            assert!(manifest.content.contains("image: demo:latest"));
            assert!(manifest.content.contains("- \"4200:4200\"\n    "));
            assert!(manifest.content.contains("- ./:/usr/local/app"));
        }
        assert_eq!(
            transient.content.lines().count() + 1,
            final_manifest.content.lines().count()
        );
        Ok(())
    }

    #[test]
    fn test_dev_dockerfile() -> Result<()> {
        let file = render_dev_dockerfile(&params("demo", ANGULAR_DEV_PORT))?;
        assert_eq!(file.relative_path, PathBuf::from("Dockerfile"));
        assert!(file.content.contains("EXPOSE 4200"));
        assert!(file.content.contains("ENV PATH /usr/local/app/node_modules/.bin:$PATH"));
        Ok(())
    }

    #[test]
    fn test_python_gitignore_covers_venv() {
        assert!(PYTHON_GITIGNORE.lines().any(|l| l == "__pycache__/"));
        assert!(PYTHON_GITIGNORE.lines().any(|l| l == "env/"));
    }
}
