//! # Project Request
//!
//! File: cli/src/core/request.rs
//!
//! The validated, immutable description of what the operator asked for. A
//! `ProjectRequest` can only be constructed with a non-empty (trimmed)
//! repository name, so every later step can rely on it.
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::anyhow;
use std::fmt;
use std::path::{Path, PathBuf};

/// The scaffold templates the tool knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// FastAPI service packaged behind the proxy network.
    Backend,
    /// Angular application served by nginx.
    Frontend,
}

impl ProjectKind {
    /// Port the service exposes in its production compose manifest.
    pub fn port(self) -> u16 {
        match self {
            ProjectKind::Backend => 8000,
            ProjectKind::Frontend => 80,
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectKind::Backend => write!(f, "FastAPI"),
            ProjectKind::Frontend => write!(f, "Angular"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    kind: ProjectKind,
    repo_name: String,
    base_path: PathBuf,
    enable_container_validation: bool,
}

impl ProjectRequest {
    /// Builds a request, rejecting empty or whitespace-only names with
    /// `ScaffoldError::EmptyName`. The stored name is trimmed.
    ///
    /// The name becomes one directory below the base path and the `ng new`
    /// project name, so path separators, `.` and `..` are rejected with
    /// `ScaffoldError::InvalidName`.
    pub fn new(
        kind: ProjectKind,
        repo_name: &str,
        base_path: impl Into<PathBuf>,
        enable_container_validation: bool,
    ) -> Result<Self> {
        let repo_name = repo_name.trim();
        if repo_name.is_empty() {
            return Err(anyhow!(ScaffoldError::EmptyName));
        }
        if matches!(repo_name, "." | "..") || repo_name.contains(['/', '\\']) {
            return Err(anyhow!(ScaffoldError::InvalidName(repo_name.to_string())));
        }
        Ok(Self {
            kind,
            repo_name: repo_name.to_string(),
            base_path: base_path.into(),
            enable_container_validation,
        })
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn enable_container_validation(&self) -> bool {
        self.enable_container_validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let request = ProjectRequest::new(ProjectKind::Backend, "  demo \n", ".", false).unwrap();
        assert_eq!(request.repo_name(), "demo");
        assert_eq!(request.base_path(), Path::new("."));
        assert!(!request.enable_container_validation());
    }

    #[test]
    fn test_empty_names_rejected() {
        for name in ["", "   ", "\t\n"] {
            let err = ProjectRequest::new(ProjectKind::Frontend, name, ".", true).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ScaffoldError>(),
                Some(ScaffoldError::EmptyName)
            ));
        }
    }

    #[test]
    fn test_path_like_names_rejected() {
        for name in ["../escape", "nested/app", "..", ".", "win\\dir", " / "] {
            let err = ProjectRequest::new(ProjectKind::Backend, name, ".", false).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<ScaffoldError>(),
                    Some(ScaffoldError::InvalidName(_))
                ),
                "{:?} was accepted",
                name
            );
        }
        // Dots inside a name are fine.
        assert!(ProjectRequest::new(ProjectKind::Backend, "my.app", ".", false).is_ok());
    }

    #[test]
    fn test_kind_ports() {
        assert_eq!(ProjectKind::Backend.port(), 8000);
        assert_eq!(ProjectKind::Frontend.port(), 80);
        assert_eq!(ProjectKind::Frontend.to_string(), "Angular");
    }
}
