//! Technology profile and tool-usage aggregation
//!
//! Counts are evaluated once over the union of all shells' histories.
//! Languages are counted by the textual-use rule (identifier substring or
//! package-manager invocation); editors, build tools, and development tools
//! by command prefix. Every counting rule is filtered by the
//! confirmed-installed set.

use crate::catalog::{self, ToolKind, BUILD_TOOLS, DEV_TOOLS, EDITORS};
use crate::classify;
use crate::types::{CommandEntry, TechProfile, ToolUsage};
use std::collections::{BTreeMap, BTreeSet};

/// Build the technology profile and raw usage tallies.
pub fn build_profile(
    entries: &[&CommandEntry],
    candidates: &BTreeSet<String>,
    installed: &BTreeSet<String>,
) -> (TechProfile, ToolUsage) {
    let language_usage = count_language_usage(entries, candidates);
    let dev_tool_usage = count_prefix_usage(entries, DEV_TOOLS, installed);

    // One identifier can be counted by both rules (git is a candidate and a
    // development tool); prefix match implies substring match, so the
    // substring count is never the smaller one. Keep the larger.
    let mut combined = language_usage.clone();
    for (tool, count) in &dev_tool_usage {
        let slot = combined.entry(tool.clone()).or_insert(0);
        *slot = (*slot).max(*count);
    }

    let primary_role = primary_role(&combined);

    let mut tech_stack = BTreeSet::new();
    let mut secondary_skills = BTreeSet::new();
    for (name, count) in &combined {
        if *count == 0 {
            continue;
        }
        match catalog::spec(name).map(|s| s.kind) {
            Some(ToolKind::Language) => {
                tech_stack.insert(name.clone());
            }
            _ => {
                secondary_skills.insert(name.clone());
            }
        }
    }

    let total_commands = entries.len();
    let mut proficiency = BTreeMap::new();
    if total_commands > 0 {
        for (name, count) in &combined {
            if *count > 0 {
                proficiency.insert(name.clone(), *count as f64 / total_commands as f64);
            }
        }
    }

    let tech_profile = TechProfile {
        primary_role,
        tech_stack,
        secondary_skills,
        proficiency,
    };

    let tool_usage = ToolUsage {
        editors: count_prefix_usage(entries, EDITORS, installed),
        languages: language_usage,
        build_tools: count_prefix_usage(entries, BUILD_TOOLS, installed),
    };

    (tech_profile, tool_usage)
}

/// Count textual use of every candidate tool. Only positive counts are kept.
fn count_language_usage(
    entries: &[&CommandEntry],
    candidates: &BTreeSet<String>,
) -> BTreeMap<String, u32> {
    let mut usage = BTreeMap::new();
    for name in candidates {
        let Some(spec) = catalog::spec(name) else {
            continue;
        };
        let count = entries
            .iter()
            .filter(|e| classify::tool_used(&e.command, spec))
            .count() as u32;
        if count > 0 {
            usage.insert(name.clone(), count);
        }
    }
    usage
}

/// Count prefix-matched use of the listed tools, gated on installation.
fn count_prefix_usage(
    entries: &[&CommandEntry],
    tools: &[&str],
    installed: &BTreeSet<String>,
) -> BTreeMap<String, u32> {
    let mut usage = BTreeMap::new();
    for tool in tools {
        if !installed.contains(*tool) {
            continue;
        }
        let count = entries
            .iter()
            .filter(|e| e.command.starts_with(tool))
            .count() as u32;
        if count > 0 {
            usage.insert(tool.to_string(), count);
        }
    }
    usage
}

/// "<Tool> Developer" from the strictly highest usage count.
///
/// Ties go to the lexicographically smaller identifier; no positive count
/// at all yields `None`.
fn primary_role(usage: &BTreeMap<String, u32>) -> Option<String> {
    let mut ranked: Vec<(&String, &u32)> = usage.iter().filter(|(_, c)| **c > 0).collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    ranked
        .first()
        .map(|(name, _)| format!("{} Developer", capitalize(name)))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
