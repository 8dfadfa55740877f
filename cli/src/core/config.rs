//! # Scaffold Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads the optional `config.toml` that tunes the scaffold workflows: which
//! program names to invoke for external tools, the addresses written into the
//! generated compose manifests, whether the backend gets a virtual environment,
//! and how long the container validation waits before tearing down.
//!
//! ## Architecture
//!
//! Configuration sources (first match wins):
//! 1. The file given by `--config` / `PROJECT_CLI_CONFIG`
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Default values defined in the code
//!
//! Every section is defaulted, so a file only needs the keys it overrides.
//! The loaded value is validated before use and then passed by reference to
//! the handlers; nothing re-reads it during a run.
//!
//! ## Examples
//!
//! ```toml
//! [tools]
//! docker = "podman"
//!
//! [validation]
//! settle_secs = 5
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Upper bound for the validation settle delay.
const MAX_SETTLE_SECS: u64 = 300;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub fastapi: FastapiConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Program names used for every external invocation.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ToolsConfig {
    pub git: String,
    pub docker: String,
    pub angular_cli: String,
    pub python: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            docker: "docker".to_string(),
            angular_cli: "ng".to_string(),
            python: "python3".to_string(),
        }
    }
}

/// Networking values baked into the generated compose manifests.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct NetworkConfig {
    /// Name of the pre-existing reverse proxy network (marked `external`).
    pub external: String,
    /// Fixed address of the service on the proxy network.
    pub ipv4_address: String,
    /// Fixed address used by the development manifests.
    pub dev_ipv4_address: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            external: "frontproxy_fnet".to_string(),
            ipv4_address: "172.20.20.90".to_string(),
            dev_ipv4_address: "172.20.20.91".to_string(),
        }
    }
}

/// Backend scaffold options.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct FastapiConfig {
    /// Create a Python virtual environment after `git init`.
    pub create_venv: bool,
    /// Directory name of the virtual environment, relative to the repository root.
    pub venv_dir: String,
}

impl Default for FastapiConfig {
    fn default() -> Self {
        Self {
            create_venv: true,
            venv_dir: "env".to_string(),
        }
    }
}

/// Container validation options.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ValidationConfig {
    /// Seconds to let the development container start before bringing it down.
    pub settle_secs: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { settle_secs: 20 }
    }
}

impl ValidationConfig {
    pub fn settle_duration(&self) -> Duration {
        Duration::from_secs(self.settle_secs)
    }
}

/// Loads, validates and returns the effective configuration.
///
/// `explicit` is the path passed via `--config` (or `PROJECT_CLI_CONFIG`); a
/// leading `~` is expanded. When it is absent the user config file is used if
/// present, otherwise the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "ProjectCli", "project-cli") else {
        debug!("Could not determine user config directory, using defaults.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn validate_config(config: &Config) -> Result<()> {
    let tools = [
        ("tools.git", &config.tools.git),
        ("tools.docker", &config.tools.docker),
        ("tools.angular_cli", &config.tools.angular_cli),
        ("tools.python", &config.tools.python),
        ("network.external", &config.network.external),
        ("fastapi.venv_dir", &config.fastapi.venv_dir),
    ];
    for (key, value) in tools {
        if value.trim().is_empty() {
            return Err(anyhow!(ScaffoldError::Config(format!(
                "'{}' cannot be empty.",
                key
            ))));
        }
    }

    for (key, value) in [
        ("network.ipv4_address", &config.network.ipv4_address),
        ("network.dev_ipv4_address", &config.network.dev_ipv4_address),
    ] {
        if value.parse::<Ipv4Addr>().is_err() {
            return Err(anyhow!(ScaffoldError::Config(format!(
                "'{}' is not a valid IPv4 address: '{}'",
                key, value
            ))));
        }
    }

    if config.validation.settle_secs > MAX_SETTLE_SECS {
        return Err(anyhow!(ScaffoldError::Config(format!(
            "'validation.settle_secs' must be at most {} (got {}).",
            MAX_SETTLE_SECS, config.validation.settle_secs
        ))));
    }
    Ok(())
}
