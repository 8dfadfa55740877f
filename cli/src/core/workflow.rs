//! # Workflow Context
//!
//! File: cli/src/core/workflow.rs
//!
//! ## Overview
//!
//! Every scaffold run works inside exactly one repository root, chosen once
//! from the operator's answers. Instead of changing the process working
//! directory, the root is resolved to an absolute path, created, and carried
//! in a `WorkflowContext` that every later step receives explicitly. File
//! writes resolve against `ctx.root()`, and subprocesses are started with it
//! as their working directory.
//!
//! The context also derives the names used inside generated files:
//! - `identifier`: the repository name made safe for Docker container,
//!   service and network names (case preserved)
//! - `build_tag`: the lowercase image reference `<identifier>:latest`
//!
use crate::common::fs::io;
use crate::common::ui;
use crate::core::error::Result;
use crate::core::request::ProjectRequest;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowContext {
    root: PathBuf,
    repo_name: String,
    identifier: String,
    build_tag: String,
}

impl WorkflowContext {
    /// Resolves `<absolute base>/<repo name>`, creates it (idempotent) and
    /// returns the context for the rest of the run.
    pub fn establish(request: &ProjectRequest) -> Result<Self> {
        let base = std::path::absolute(request.base_path()).with_context(|| {
            format!(
                "Failed to resolve base path '{}'",
                request.base_path().display()
            )
        })?;
        let root = base.join(request.repo_name());

        ui::step(&format!("Creating directory at {}...", root.display()));
        io::ensure_dir_exists(&root)?;
        info!("Repository root established at {}", root.display());

        Ok(Self::new(root, request.repo_name()))
    }

    /// Builds a context for an existing root without touching the filesystem.
    pub fn new(root: PathBuf, repo_name: &str) -> Self {
        let identifier = docker_identifier(repo_name);
        let build_tag = build_tag(&identifier);
        Self {
            root,
            repo_name: repo_name.to_string(),
            identifier,
            build_tag,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a repository-relative path against the root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn build_tag(&self) -> &str {
        &self.build_tag
    }
}

/// Maps a repository name onto a name Docker accepts for containers,
/// services and networks, and which also lowercases into a valid image
/// repository: alphanumeric runs joined by single `.`, `_` or `-`.
///
/// Characters outside `[A-Za-z0-9_.-]` become `-`. A run of separators
/// collapses to its first character, and leading and trailing separators
/// are dropped. Case is preserved; `project` is used if nothing remains.
pub fn docker_identifier(repo_name: &str) -> String {
    let mut identifier = String::with_capacity(repo_name.len());
    let mut pending_separator = None;
    for c in repo_name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if let Some(separator) = pending_separator.take() {
                if !identifier.is_empty() {
                    identifier.push(separator);
                }
            }
            identifier.push(c);
        } else if pending_separator.is_none() {
            pending_separator = Some(if matches!(c, '_' | '.' | '-') { c } else { '-' });
        }
    }
    if identifier.is_empty() {
        "project".to_string()
    } else {
        identifier
    }
}

/// Image references must be lowercase.
pub fn build_tag(identifier: &str) -> String {
    format!("{}:latest", identifier).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::ProjectKind;
    use tempfile::tempdir;

    #[test]
    fn test_identifier_preserves_case() {
        assert_eq!(docker_identifier("Demo"), "Demo");
        assert_eq!(docker_identifier("my_api-v2.1"), "my_api-v2.1");
    }

    #[test]
    fn test_identifier_replaces_disallowed_characters() {
        assert_eq!(docker_identifier("my app"), "my-app");
        assert_eq!(docker_identifier("shop/ui@next"), "shop-ui-next");
        assert_eq!(docker_identifier("--hidden"), "hidden");
        assert_eq!(docker_identifier("***"), "project");
    }

    #[test]
    fn test_identifier_separator_runs_and_edges() {
        assert_eq!(docker_identifier("api-"), "api");
        assert_eq!(docker_identifier("Demo_"), "Demo");
        assert_eq!(docker_identifier("my..app"), "my.app");
        assert_eq!(docker_identifier("a.-b"), "a.b");
        assert_eq!(docker_identifier("café"), "caf");
        assert_eq!(docker_identifier("über app"), "ber-app");
        assert_eq!(docker_identifier("a - b"), "a-b");
    }

    #[test]
    fn test_build_tag_matches_reference_grammar() {
        // [a-z0-9]+((\.|_|-)[a-z0-9]+)*:latest
        fn valid(tag: &str) -> bool {
            let Some(repo) = tag.strip_suffix(":latest") else {
                return false;
            };
            let mut previous_separator = true;
            for c in repo.chars() {
                let separator = matches!(c, '.' | '_' | '-');
                if !(separator || c.is_ascii_lowercase() || c.is_ascii_digit()) {
                    return false;
                }
                if separator && previous_separator {
                    return false;
                }
                previous_separator = separator;
            }
            !previous_separator
        }

        for name in [
            "api-", "my..app", "café", "Demo_", "a.-b", "Demo", "my_api-v2.1", "***", "--x--",
            "名前", "a__b", "Shop UI (v2)",
        ] {
            let tag = build_tag(&docker_identifier(name));
            assert!(valid(&tag), "{:?} produced invalid tag {:?}", name, tag);
        }
    }

    #[test]
    fn test_build_tag_is_lowercase() {
        assert_eq!(build_tag(&docker_identifier("Demo")), "demo:latest");
        assert_eq!(build_tag(&docker_identifier("My App")), "my-app:latest");
    }

    #[test]
    fn test_establish_creates_root() -> Result<()> {
        let base = tempdir()?;
        let request = ProjectRequest::new(ProjectKind::Backend, "demo", base.path(), false)?;

        let ctx = WorkflowContext::establish(&request)?;

        assert_eq!(ctx.root(), base.path().join("demo"));
        assert!(ctx.root().is_dir());
        assert_eq!(ctx.path("src/Dockerfile"), base.path().join("demo/src/Dockerfile"));
        assert_eq!(ctx.build_tag(), "demo:latest");
        Ok(())
    }

    #[test]
    fn test_establish_is_idempotent() -> Result<()> {
        let base = tempdir()?;
        std::fs::create_dir(base.path().join("Demo"))?;
        let request = ProjectRequest::new(ProjectKind::Frontend, "Demo", base.path(), false)?;

        let ctx = WorkflowContext::establish(&request)?;
        assert_eq!(ctx.identifier(), "Demo");
        assert_eq!(ctx.build_tag(), "demo:latest");
        Ok(())
    }
}
