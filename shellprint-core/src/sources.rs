//! Source readers for shell history and configuration files
//!
//! Every path is home-relative and tilde-expanded. A missing or unreadable
//! file means the shell is simply absent from the result set; it is never an
//! error at this level. An empty file yields zero entries.
//!
//! ## History formats
//!
//! Each shell family records history differently, and only some formats
//! carry per-command timestamps:
//!
//! - **bash** writes one command per line; with `HISTTIMEFORMAT` set it
//!   precedes each command with a `#<epoch>` marker line.
//! - **zsh** writes either plain lines or, with extended history,
//!   `: <epoch>:<duration>;<command>`.
//! - **fish** writes a YAML-ish list of `- cmd: <command>` entries, each
//!   optionally followed by an indented `when: <epoch>` line.
//!
//! Commands whose format recorded no time are returned with no timestamp;
//! downstream hour-of-day analysis skips them instead of inventing a time.

use crate::types::{ConfigFileInfo, Shell};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// One history line after format normalization, before classification.
#[derive(Debug, Clone)]
pub struct RawCommand {
    /// The invoked command text
    pub command: String,
    /// Recorded execution time, when the format provides one
    pub timestamp: Option<DateTime<Utc>>,
}

/// Expand a leading `~/` against the given home directory.
pub fn expand_path(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Read and normalize one shell's history file.
///
/// Returns `None` when the file is missing or unreadable; the caller treats
/// that shell as absent.
pub fn read_history(shell: Shell, home: &Path) -> Option<Vec<RawCommand>> {
    let path = expand_path(shell.history_path(), home);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(shell = %shell, path = %path.display(), error = %e, "history unavailable");
            return None;
        }
    };

    let commands = match shell {
        Shell::Bash => parse_bash_history(&content),
        Shell::Fish => parse_fish_history(&content),
        Shell::Zsh => parse_zsh_history(&content),
    };

    tracing::debug!(shell = %shell, commands = commands.len(), "history read");
    Some(commands)
}

/// Read one configuration file, capturing content and modification time.
///
/// Returns `None` when the file is missing or unreadable.
pub fn read_config_file(rel_path: &str, home: &Path) -> Option<ConfigFileInfo> {
    let path = expand_path(rel_path, home);
    let metadata = std::fs::metadata(&path).ok()?;
    if !metadata.is_file() {
        return None;
    }
    let content = std::fs::read_to_string(&path).ok()?;
    let modified = metadata
        .modified()
        .ok()
        .map(DateTime::from)
        .unwrap_or_else(Utc::now);

    Some(ConfigFileInfo {
        path,
        modified,
        content,
    })
}

fn epoch_to_utc(raw: &str) -> Option<DateTime<Utc>> {
    let secs: i64 = raw.parse().ok()?;
    DateTime::from_timestamp(secs, 0)
}

/// A history line that is not a command: blank, or a comment that is not a
/// timestamp marker.
fn is_noise(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

fn parse_bash_history(content: &str) -> Vec<RawCommand> {
    let mut commands = Vec::new();
    let mut pending_timestamp = None;

    for line in content.lines() {
        let line = line.trim();

        // HISTTIMEFORMAT marker: stamps the command on the following line
        if let Some(digits) = line.strip_prefix('#') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                pending_timestamp = epoch_to_utc(digits);
                continue;
            }
        }

        if is_noise(line) {
            continue;
        }

        commands.push(RawCommand {
            command: line.to_string(),
            timestamp: pending_timestamp.take(),
        });
    }

    commands
}

fn parse_zsh_history(content: &str) -> Vec<RawCommand> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();

            // Extended history: ": <epoch>:<duration>;<command>"
            if let Some(rest) = line.strip_prefix(": ") {
                if let Some((meta, command)) = rest.split_once(';') {
                    let command = command.trim();
                    if command.is_empty() {
                        return None;
                    }
                    let timestamp = meta.split(':').next().and_then(epoch_to_utc);
                    return Some(RawCommand {
                        command: command.to_string(),
                        timestamp,
                    });
                }
            }

            if is_noise(line) {
                return None;
            }

            Some(RawCommand {
                command: line.to_string(),
                timestamp: None,
            })
        })
        .collect()
}

fn parse_fish_history(content: &str) -> Vec<RawCommand> {
    let mut commands: Vec<RawCommand> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(cmd) = trimmed.strip_prefix("- cmd: ") {
            let cmd = cmd.trim();
            if !cmd.is_empty() {
                commands.push(RawCommand {
                    command: cmd.to_string(),
                    timestamp: None,
                });
            }
            continue;
        }

        // "when:" belongs to the most recent entry
        if let Some(when) = trimmed.strip_prefix("when: ") {
            if let Some(last) = commands.last_mut() {
                if last.timestamp.is_none() {
                    last.timestamp = epoch_to_utc(when.trim());
                }
            }
        }
    }

    commands
}
