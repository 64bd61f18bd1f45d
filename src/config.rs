// src/config.rs

use clap::Parser;
use std::{env, path::PathBuf};

pub const ERROR_LOG_ENV: &str = "PERSONDIR_ERROR_LOG";
pub const DEFAULT_ERROR_LOG: &str = "error.log";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "persondir")]
#[command(about = "Download a person dataset and look up users by id", long_about = None)]
pub struct Cli {
    /// URL to the data file
    #[arg(long)]
    pub url: String,
}

/// Settings that come from the environment rather than the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where rejected dataset lines are appended.
    pub error_log: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let error_log = lookup(ERROR_LOG_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ERROR_LOG));
        Self { error_log }
    }
}
