//! # Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem operations used by the scaffold workflows. Everything currently
//! lives in `io`; callers import from the submodule directly
//! (`crate::common::fs::io::materialize`).
//!

/// Directory creation, file writes/deletes and batch materialization.
pub mod io;
