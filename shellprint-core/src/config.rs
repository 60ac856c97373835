//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/shellprint/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/shellprint/` (~/.config/shellprint/)
//! - State/Logs: `$XDG_STATE_HOME/shellprint/` (~/.local/state/shellprint/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolve the user's home directory.
///
/// The only fatal failure in an analysis run: without a home directory no
/// shell path can be expanded at all.
pub fn home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .ok_or(Error::Home)
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().map(|h| h.join(".config")).unwrap_or_default())
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            home_dir()
                .map(|h| h.join(".local/state"))
                .unwrap_or_default()
        })
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Command categorization rules
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Installed-tool probing
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Narrative service configuration
    #[serde(default)]
    pub narrative: NarrativeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Prefix rules used to tag commands with categories.
///
/// Each rule set is evaluated independently; a command can match several.
#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// Prefixes that mark a command as development work
    #[serde(default = "default_development_prefixes")]
    pub development_prefixes: Vec<String>,

    /// Prefixes that mark a command as system administration
    #[serde(default = "default_system_prefixes")]
    pub system_prefixes: Vec<String>,

    /// Prefixes that mark a command as file manipulation
    #[serde(default = "default_file_prefixes")]
    pub file_prefixes: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            development_prefixes: default_development_prefixes(),
            system_prefixes: default_system_prefixes(),
            file_prefixes: default_file_prefixes(),
        }
    }
}

fn default_development_prefixes() -> Vec<String> {
    ["git", "docker", "npm", "go", "python"]
        .map(String::from)
        .to_vec()
}

fn default_system_prefixes() -> Vec<String> {
    ["sudo", "systemctl", "ps", "top"].map(String::from).to_vec()
}

fn default_file_prefixes() -> Vec<String> {
    ["ls", "cd", "cp", "mv", "rm"].map(String::from).to_vec()
}

/// Installed-tool probing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ProbeConfig {
    /// Per-probe timeout in seconds; a timed-out probe counts as
    /// "not installed"
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of version probes running at once
    #[serde(default = "default_probe_concurrency")]
    pub concurrency: usize,

    /// How many installed tools are kept as classification candidates
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_probe_timeout(),
            concurrency: default_probe_concurrency(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_probe_timeout() -> u64 {
    3
}

fn default_probe_concurrency() -> usize {
    8
}

fn default_max_candidates() -> usize {
    10
}

/// Narrative service configuration
///
/// The narrative service is an external text-generation API that turns the
/// profile corpus into readable summary sections. It is entirely optional:
/// when it is unreachable or misconfigured the numeric profile is unaffected.
#[derive(Debug, Deserialize, Clone)]
pub struct NarrativeConfig {
    /// API endpoint
    #[serde(default = "default_narrative_endpoint")]
    pub endpoint: String,

    /// API key; `SHELLPRINT_API_KEY` or `GEMINI_API_KEY` env vars are
    /// consulted when unset
    pub api_key: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_narrative_timeout")]
    pub timeout_secs: u64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_narrative_endpoint(),
            api_key: None,
            timeout_secs: default_narrative_timeout(),
        }
    }
}

fn default_narrative_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        .to_string()
}

fn default_narrative_timeout() -> u64 {
    30
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/shellprint/config.toml`
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("shellprint").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/shellprint/`
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("shellprint")
    }

    /// Returns the log file path
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("shellprint.log")
    }
}
