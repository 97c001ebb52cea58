//! Client configuration and factory.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use fizzbot_core::answer::AnswerMode;
use fizzbot_core::session::{SessionConfig, DEFAULT_START_PATH};
use fizzbot_core::traits::QuizApi;

use crate::http::{HttpQuizApi, DEFAULT_DOMAIN};

/// Top-level fizzbot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FizzbotConfig {
    /// Service origin, e.g. `https://api.noopschallenge.com`.
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Path of the root resource.
    #[serde(default = "default_start_path")]
    pub start_path: String,
    /// Where answers come from.
    #[serde(default)]
    pub mode: AnswerMode,
    /// Submissions allowed per question. Unset retries forever; zero is rejected.
    #[serde(default)]
    pub max_attempts: Option<NonZeroU32>,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}
fn default_start_path() -> String {
    DEFAULT_START_PATH.to_string()
}

impl Default for FizzbotConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            start_path: default_start_path(),
            mode: AnswerMode::default(),
            max_attempts: None,
        }
    }
}

impl FizzbotConfig {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            start_path: self.start_path.clone(),
            max_attempts: self.max_attempts,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `fizzbot.toml` in the current directory
/// 2. `~/.config/fizzbot/config.toml`
///
/// `FIZZBOT_DOMAIN` overrides the configured domain.
pub fn load_config() -> Result<FizzbotConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<FizzbotConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("fizzbot.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => FizzbotConfig::default(),
    };

    if let Ok(domain) = std::env::var("FIZZBOT_DOMAIN") {
        config.domain = domain;
    }

    Ok(config)
}

/// Parse a TOML config and resolve `${VAR}` references in its string values.
pub fn parse_config(content: &str) -> Result<FizzbotConfig> {
    let mut config: FizzbotConfig = toml::from_str(content)?;
    config.domain = resolve_env_vars(&config.domain);
    config.start_path = resolve_env_vars(&config.start_path);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("fizzbot"))
}

/// Create the HTTP quiz API for a configuration.
pub fn create_api(config: &FizzbotConfig) -> Result<Arc<dyn QuizApi>> {
    let api = HttpQuizApi::new(Some(config.domain.clone()))?;
    Ok(Arc::new(api))
}
