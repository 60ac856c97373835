//! Shell configuration parsing and plugin discovery
//!
//! A deliberately approximate, line-oriented scan, not a shell grammar.
//! `alias name=value` and `export NAME=value` declarations are extracted;
//! anything else is ignored. A single pair of bounding quotes is stripped
//! from values; embedded quotes are left as-is (known limitation of the
//! line-oriented approach).
//!
//! Plugin discovery is filesystem probing of known plugin-manager layouts,
//! not content parsing. A missing plugin directory yields zero plugins.

use crate::sources;
use crate::types::{PluginInfo, Shell, ShellConfig};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Scan config file text for alias and export declarations.
///
/// Later declarations overwrite earlier ones, within a file and across the
/// files of one shell. Unparsable lines are skipped.
pub fn parse_config_text(content: &str, config: &mut ShellConfig) {
    for line in content.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("alias ") {
            if let Some((name, value)) = split_assignment(rest) {
                config.aliases.insert(name, value);
            }
        } else if let Some(rest) = line.strip_prefix("export ") {
            if let Some((name, value)) = split_assignment(rest) {
                config.environment.insert(name, value);
            }
        }
    }
}

/// Split `name=value`, trimming and unquoting the value.
fn split_assignment(decl: &str) -> Option<(String, String)> {
    let (name, value) = decl.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), strip_quotes(value.trim()).to_string()))
}

/// Strip one pair of matching quotes if they bound the whole value.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && (bytes[0] == b'\'' || bytes[0] == b'"') && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Probe the known plugin-manager layouts for one shell.
///
/// The result is sorted by name so the inventory is reproducible.
pub fn detect_plugins(shell: Shell, home: &Path) -> Vec<PluginInfo> {
    let mut plugins = match shell {
        Shell::Bash => detect_bash_plugins(home),
        Shell::Fish => detect_fish_plugins(home),
        Shell::Zsh => detect_zsh_plugins(home),
    };
    plugins.sort_by(|a, b| a.name.cmp(&b.name));
    plugins
}

fn mtime(path: &Path) -> DateTime<Utc> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::from)
        .unwrap_or_else(|_| Utc::now())
}

fn detect_zsh_plugins(home: &Path) -> Vec<PluginInfo> {
    let mut plugins = Vec::new();

    // Oh My Zsh keeps one directory per plugin
    let omz_plugins = sources::expand_path("~/.oh-my-zsh/plugins", home);
    if let Ok(entries) = std::fs::read_dir(&omz_plugins) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    plugins.push(PluginInfo {
                        name: name.to_string(),
                        last_updated: mtime(&path),
                        source: path,
                    });
                }
            }
        }
    }

    // Standalone plugin managers register as a single entry each
    for manager in ["~/.antigen", "~/.zinit", "~/.zplug"] {
        let path = sources::expand_path(manager, home);
        if path.is_dir() {
            plugins.push(PluginInfo {
                name: manager.trim_start_matches("~/.").to_string(),
                last_updated: mtime(&path),
                source: path,
            });
        }
    }

    plugins
}

fn detect_fish_plugins(home: &Path) -> Vec<PluginInfo> {
    let conf_d = sources::expand_path("~/.config/fish/conf.d", home);
    let pattern = conf_d.join("*.fish");

    let Ok(paths) = glob::glob(&pattern.to_string_lossy()) else {
        return Vec::new();
    };

    paths
        .flatten()
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_string();
            Some(PluginInfo {
                name,
                last_updated: mtime(&path),
                source: path,
            })
        })
        .collect()
}

fn detect_bash_plugins(home: &Path) -> Vec<PluginInfo> {
    ["~/.bash_it", "~/.local/share/bash-completion"]
        .iter()
        .filter_map(|rel| {
            let path = sources::expand_path(rel, home);
            if !path.is_dir() {
                return None;
            }
            let name = path.file_name()?.to_str()?.to_string();
            Some(PluginInfo {
                name,
                last_updated: mtime(&path),
                source: path,
            })
        })
        .collect()
}
