/*
 * config.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! CLI configuration.
//!
//! Settings come from a TOML file: the path given with `--config`, or
//! `clerkly.toml` in the working directory when present. Every key is
//! optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use clerkly_draft::OutputFormat;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "clerkly.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory that generated documents are written to
    pub output_dir: PathBuf,

    /// Default output format when `--to` is not given
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. The implicit `clerkly.toml` in `cwd` is
    /// optional; without it the defaults apply.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let implicit = cwd.join(CONFIG_FILE_NAME);
                if !implicit.is_file() {
                    debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
                implicit
            }
        };

        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML source.
    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
