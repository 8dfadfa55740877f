//! # Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core components shared by every scaffold
//! workflow: error types, configuration, the validated request, the workflow
//! context that pins the repository root, and the template renderer.
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ScaffoldError, Result}; // For error handling
//! use crate::core::templating; // For rendering scaffold files
//! ```
//!
pub mod config;
pub mod error;
pub mod request;
pub mod templating;
pub mod workflow;
