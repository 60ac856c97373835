//! Analysis orchestration
//!
//! Runs the full pipeline: read each shell's history, classify it, probe
//! installed tools, parse configurations, and derive insights. The run is
//! sequential and single-pass; only the tool probes fan out, and their
//! result is cached for the rest of the run.
//!
//! [`Analyzer`] is a builder so tests can pin the home directory and the
//! installed-tool set instead of touching the real host.

use crate::analytics;
use crate::catalog;
use crate::classify;
use crate::config::{self, Config};
use crate::configparse;
use crate::error::Result;
use crate::probe;
use crate::sources;
use crate::types::{Shell, ShellConfig, ShellData};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Orchestrates one analysis run.
pub struct Analyzer {
    config: Config,
    home: Option<PathBuf>,
    installed: Option<BTreeSet<String>>,
}

impl Analyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            home: None,
            installed: None,
        }
    }

    /// Override the home directory (for testing against a synthetic home).
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Inject the installed-tool set, skipping live probing (for testing).
    pub fn with_installed(mut self, installed: BTreeSet<String>) -> Self {
        self.installed = Some(installed);
        self
    }

    /// Run the analysis and return the completed snapshot.
    ///
    /// The only fatal failure is an unresolvable home directory. Shells
    /// whose history file is absent simply do not appear in the result.
    pub async fn run(&self) -> Result<ShellData> {
        let home = match &self.home {
            Some(home) => home.clone(),
            None => config::home_dir()?,
        };

        let mut histories = BTreeMap::new();
        for shell in Shell::ALL {
            let Some(raw) = sources::read_history(shell, &home) else {
                continue;
            };
            let entries = classify::classify(raw, &self.config.classifier);
            tracing::info!(shell = %shell, commands = entries.len(), "analyzed history");
            histories.insert(shell, entries);
        }

        // Configs are read for the shells that showed history
        let mut configs = BTreeMap::new();
        for shell in histories.keys() {
            configs.insert(*shell, self.analyze_shell_config(*shell, &home));
        }

        let installed = match &self.installed {
            Some(installed) => installed.clone(),
            None => probe::detect_installed(catalog::KNOWN_TOOLS, &self.config.probe).await,
        };
        let candidates =
            probe::select_candidates(&installed, &histories, self.config.probe.max_candidates);

        let insights = analytics::build_insights(&histories, &configs, &candidates, &installed);

        Ok(ShellData {
            histories,
            configs,
            insights,
        })
    }

    fn analyze_shell_config(&self, shell: Shell, home: &std::path::Path) -> ShellConfig {
        let mut config = ShellConfig::default();

        for rel_path in shell.config_paths() {
            let Some(info) = sources::read_config_file(rel_path, home) else {
                continue;
            };
            configparse::parse_config_text(&info.content, &mut config);
            config.config_files.insert(rel_path.to_string(), info);
        }

        config.plugins = configparse::detect_plugins(shell, home);
        config
    }
}
