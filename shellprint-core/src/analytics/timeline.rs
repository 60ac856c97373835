//! Timeline curation
//!
//! Selects a small, de-duplicated set of notable commands for chronological
//! display. The cap is a hard bound on output size, not an exhaustiveness
//! guarantee: curation stops the moment it is full, even with shells left
//! unscanned. Shells are visited in canonical order so identical input
//! always curates identically.

use crate::types::{CommandEntry, Shell, TimelineEntry};
use std::collections::{BTreeMap, BTreeSet};

/// Maximum number of curated entries.
pub const MAX_ENTRIES: usize = 15;

/// Tools whose commands are always worth showing.
const NOTABLE_TOOLS: &[&str] = &[
    "git",
    "docker",
    "kubectl",
    "terraform",
    "ansible",
    "make",
    "npm",
    "go",
    "python",
    "java",
    "ssh",
    "scp",
    "curl",
    "wget",
    "vim",
    "nvim",
    "emacs",
    "code",
];

/// Frequently mistyped commands; always amusing, therefore notable.
const COMMON_TYPOS: &[&str] = &[
    "sl", "cd..", "pythoon", "gti", "vmi", "nivm", "emasc", "clea", "exot",
];

/// Pipes, redirections, and sequencing operators.
const SHELL_OPERATORS: &[char] = &['|', '>', '<', '&', ';'];

/// Curate at most [`MAX_ENTRIES`] notable commands across all shells.
///
/// The first occurrence of a command text wins; later duplicates are
/// dropped even when they come from a different shell.
pub fn curate(histories: &BTreeMap<Shell, Vec<CommandEntry>>) -> Vec<TimelineEntry> {
    let mut timeline = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for (shell, entries) in histories {
        for entry in entries {
            if seen.contains(entry.command.as_str()) {
                continue;
            }

            if is_interesting(&entry.command) {
                timeline.push(TimelineEntry {
                    timestamp: entry.timestamp,
                    command: entry.command.clone(),
                    shell: *shell,
                });
                seen.insert(entry.command.as_str());
            }

            if timeline.len() >= MAX_ENTRIES {
                return timeline;
            }
        }
    }

    timeline
}

/// Whether a command is worth a timeline slot.
fn is_interesting(command: &str) -> bool {
    if NOTABLE_TOOLS.iter().any(|tool| command.starts_with(tool)) {
        return true;
    }

    let has_shell_operators = command.contains(SHELL_OPERATORS);
    let is_typo = COMMON_TYPOS.contains(&command);

    has_shell_operators || is_typo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(command: &str) -> CommandEntry {
        CommandEntry {
            command: command.to_string(),
            timestamp: None,
            categories: BTreeSet::new(),
        }
    }

    #[test]
    fn test_interesting_commands() {
        assert!(is_interesting("git rebase -i HEAD~3"));
        assert!(is_interesting("cat access.log | grep 500"));
        assert!(is_interesting("gti status"));
        assert!(!is_interesting("pwd"));
    }

    #[test]
    fn test_caps_at_fifteen() {
        let mut histories = BTreeMap::new();
        histories.insert(
            Shell::Bash,
            (0..40).map(|i| entry(&format!("git tag v{}", i))).collect(),
        );

        let timeline = curate(&histories);
        assert_eq!(timeline.len(), MAX_ENTRIES);
    }

    #[test]
    fn test_no_duplicate_commands_across_shells() {
        let mut histories = BTreeMap::new();
        histories.insert(Shell::Bash, vec![entry("git status"), entry("ls")]);
        histories.insert(Shell::Zsh, vec![entry("git status"), entry("docker ps")]);

        let timeline = curate(&histories);
        let commands: Vec<_> = timeline.iter().map(|t| t.command.as_str()).collect();
        assert_eq!(commands, vec!["git status", "docker ps"]);
        // First occurrence wins: the bash entry supplied it
        assert_eq!(timeline[0].shell, Shell::Bash);
    }

    #[test]
    fn test_short_circuit_skips_remaining_shells() {
        let mut histories = BTreeMap::new();
        histories.insert(
            Shell::Bash,
            (0..MAX_ENTRIES).map(|i| entry(&format!("docker run img{}", i))).collect(),
        );
        histories.insert(Shell::Zsh, vec![entry("git status")]);

        let timeline = curate(&histories);
        assert_eq!(timeline.len(), MAX_ENTRIES);
        assert!(timeline.iter().all(|t| t.shell == Shell::Bash));
    }

    #[test]
    fn test_deterministic_across_runs() {
        let mut histories = BTreeMap::new();
        histories.insert(Shell::Fish, vec![entry("make deploy"), entry("pwd")]);
        histories.insert(Shell::Zsh, vec![entry("vim ~/.zshrc")]);

        assert_eq!(curate(&histories).len(), curate(&histories).len());
        let a: Vec<_> = curate(&histories).iter().map(|t| t.command.clone()).collect();
        let b: Vec<_> = curate(&histories).iter().map(|t| t.command.clone()).collect();
        assert_eq!(a, b);
    }
}
