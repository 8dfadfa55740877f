//! # Filesystem Materializer
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` for the handful of operations the scaffold
//! workflows perform, each mapping failures onto the `ScaffoldError` taxonomy
//! with the offending path attached:
//! - **`ensure_dir_exists`**: `mkdir -p`; succeeds if the directory is already
//!   there, fails if the path is a file.
//! - **`write_file`**: create-or-truncate. The parent directory must already
//!   exist; callers create it first.
//! - **`remove_file`**: deletes a file that must exist.
//! - **`materialize`**: writes a batch of `RenderedFile`s below the repository
//!   root, creating each parent directory first. Later entries for the same
//!   path overwrite earlier ones.
//!
//! Every failure is fatal to the workflow; nothing here retries.
//!
use crate::core::error::{Result, ScaffoldError};
use crate::core::templating::RenderedFile;
use crate::core::workflow::WorkflowContext;
use anyhow::{anyhow, Context};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing ancestors. If the path already
/// exists but is not a directory, a `ScaffoldError::FileWrite` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| {
                anyhow!(ScaffoldError::FileWrite {
                    path: path.to_path_buf(),
                    source: e,
                })
            })
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ScaffoldError::FileWrite {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Path exists but is not a directory",
            ),
        });
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Writes `content` to `path`, truncating any existing file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        anyhow!(ScaffoldError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Deletes the file at `path`. A missing file is an error.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| {
        anyhow!(ScaffoldError::FileDelete {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    info!("Deleted file: {:?}", path);
    Ok(())
}

/// Writes rendered files below the repository root, in order.
pub fn materialize(ctx: &WorkflowContext, files: &[RenderedFile]) -> Result<()> {
    for file in files {
        let target = ctx.path(&file.relative_path);
        if let Some(parent) = target.parent() {
            ensure_dir_exists(parent)?;
        }
        write_file(&target, &file.content)?;
    }
    info!("Materialized {} files under {:?}", files.len(), ctx.root());
    Ok(())
}
