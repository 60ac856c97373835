//! Work-time patterns, productivity metrics, and configuration suggestions

use crate::types::{CommandEntry, Shell, ShellConfig, WorkPatterns};
use chrono::Timelike;
use regex::Regex;
use std::collections::BTreeMap;

/// How many peak hours to report.
const PEAK_HOUR_COUNT: usize = 3;

/// A two-token stem must repeat this often to count as a workflow.
const WORKFLOW_MIN_REPEATS: u32 = 5;

/// How many workflow stems to report.
const WORKFLOW_COUNT: usize = 5;

/// Derive peak hours, productivity metrics, and common workflows.
pub fn build_work_patterns(entries: &[&CommandEntry]) -> WorkPatterns {
    WorkPatterns {
        peak_hours: peak_hours(entries),
        productivity: productivity(entries),
        common_workflows: common_workflows(entries),
    }
}

/// Up to three hours of day ranked by activity count.
///
/// Only entries whose source format recorded a timestamp participate; ties
/// go to the lower hour so repeated runs rank identically.
fn peak_hours(entries: &[&CommandEntry]) -> Vec<u8> {
    let mut buckets: BTreeMap<u8, u32> = BTreeMap::new();
    for entry in entries {
        if let Some(ts) = entry.timestamp {
            *buckets.entry(ts.hour() as u8).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(u8, u32)> = buckets.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(PEAK_HOUR_COUNT)
        .map(|(hour, _)| hour)
        .collect()
}

/// Command variety and workflow complexity, both in [0, 1].
///
/// Empty histories report no metrics at all rather than dividing by zero.
fn productivity(entries: &[&CommandEntry]) -> BTreeMap<String, f64> {
    let mut metrics = BTreeMap::new();
    let total = entries.len();
    if total == 0 {
        return metrics;
    }

    let distinct = entries
        .iter()
        .map(|e| e.command.as_str())
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    metrics.insert(
        "Command Variety".to_string(),
        distinct as f64 / total as f64,
    );

    // Each pattern counts independently: a command that both builds and
    // deploys contributes twice
    let patterns = workflow_patterns();
    let complex: usize = entries
        .iter()
        .map(|e| {
            patterns
                .iter()
                .filter(|(_, re)| re.is_match(&e.command))
                .count()
        })
        .sum();
    metrics.insert(
        "Workflow Complexity".to_string(),
        complex as f64 / total as f64,
    );

    metrics
}

/// Recognized workflow shapes, counted toward workflow complexity.
fn workflow_patterns() -> Vec<(&'static str, Regex)> {
    [
        ("git_workflow", r"git (commit|push|pull|merge)"),
        ("build", r"(make|build|compile)"),
        ("deploy", r"(deploy|kubectl|docker)"),
        ("test", r"test|spec|pytest"),
    ]
    .into_iter()
    .filter_map(|(name, pattern)| Regex::new(pattern).ok().map(|re| (name, re)))
    .collect()
}

/// Frequently repeated two-token command stems, most frequent first.
fn common_workflows(entries: &[&CommandEntry]) -> Vec<String> {
    let mut stems: BTreeMap<String, u32> = BTreeMap::new();
    for entry in entries {
        let mut tokens = entry.command.split_whitespace();
        if let (Some(first), Some(second)) = (tokens.next(), tokens.next()) {
            *stems.entry(format!("{} {}", first, second)).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, u32)> = stems
        .into_iter()
        .filter(|(_, count)| *count >= WORKFLOW_MIN_REPEATS)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(WORKFLOW_COUNT)
        .map(|(stem, _)| stem)
        .collect()
}

/// Configuration suggestions, in canonical shell order.
pub fn recommendations(configs: &BTreeMap<Shell, ShellConfig>) -> Vec<String> {
    let mut suggestions = Vec::new();
    for (shell, config) in configs {
        if config.aliases.len() < 5 {
            suggestions.push(format!(
                "Consider adding more aliases to your {} configuration to improve productivity",
                shell
            ));
        }
        if config.plugins.len() < 3 {
            suggestions.push(format!(
                "Explore popular {} plugins to enhance your shell experience",
                shell
            ));
        }
    }
    suggestions
}
