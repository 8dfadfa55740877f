//! # Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per scaffold workflow. Each exposes a clap `XxxArgs` struct and
//! an async `handle_xxx(args, &config)` handler that `main.rs` dispatches to,
//! plus a `scaffold` function generic over the external-process runner so
//! the workflow can be driven without real tools.
//!
//! - `fastapi`: containerized FastAPI backend (`project fastapi`)
//! - `angular`: Angular frontend with optional container validation
//!   (`project angular [--docker]`)
//!

/// Frontend scaffold.
pub mod angular;
/// Backend scaffold.
pub mod fastapi;
