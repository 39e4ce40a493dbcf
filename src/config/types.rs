// ABOUTME: Log level and deployment environment types shared by config and logging
// ABOUTME: Parsed leniently from the environment and strictly from the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use clap::ValueEnum;
use gemini_fit_core::errors::AppError;
use serde::{Deserialize, Serialize};

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Failures only
    Error,
    /// Degraded behavior such as a skipped persistent write
    Warn,
    /// One line per user action
    #[default]
    Info,
    /// Cache tiers, token usage, request shapes
    Debug,
    /// Everything, including dependency internals
    Trace,
}

impl LogLevel {
    /// Lowercase name as used in `RUST_LOG` directives
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

}

impl FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(AppError::config_invalid(format!("Unknown log level '{other}'"))),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Deployment environment; production switches logs to JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Interactive use on a workstation
    #[default]
    Development,
    /// Unattended runs whose logs are collected
    Production,
}

impl Environment {
    /// Environment variable selecting the deployment environment
    pub const ENV_VAR: &'static str = "ENVIRONMENT";

    /// Parse, treating anything other than production as development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Read [`Self::ENV_VAR`], defaulting to development
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR).map_or_else(|_| Self::default(), |s| Self::from_str_or_default(&s))
    }

    /// Whether this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_environment_parsing() {
        assert!(Environment::from_str_or_default("PROD").is_production());
        assert!(!Environment::from_str_or_default("staging").is_production());
    }
}
