//! # Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test drives
//! the compiled `project` binary with answers on stdin and a configuration
//! file that replaces every external tool with `true` or `false`, so no real
//! git, docker, Angular CLI or Python is needed.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Command for the compiled `project` binary with no ambient configuration.
pub fn project_cmd() -> Command {
    let mut cmd = Command::cargo_bin("project").expect("Failed to find project binary for testing");
    cmd.env_remove("PROJECT_CLI_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Writes a config into `dir` whose tools all succeed, except docker when
/// `docker_succeeds` is false. The validation settle delay is disabled.
pub fn write_stub_config(dir: &Path, docker_succeeds: bool) -> PathBuf {
    let docker = if docker_succeeds { "true" } else { "false" };
    let config = format!(
        r#"[tools]
git = "true"
docker = "{docker}"
angular_cli = "true"
python = "true"

[validation]
settle_secs = 0
"#
    );
    let path = dir.join("config.toml");
    fs::write(&path, config).expect("Failed to write stub config");
    path
}

/// Prompt answers: repository name, then base path.
pub fn answers(name: &str, base: &Path) -> String {
    format!("{}\n{}\n", name, base.display())
}
