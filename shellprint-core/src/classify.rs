//! Command classification
//!
//! Maps normalized history lines to semantic categories and decides whether
//! a command counts as use of a known tool. Category rules are independent
//! prefix matches evaluated as a set union, so one command can be tagged
//! development and system and file at once, or nothing at all; uncategorized
//! commands still occupy a history slot but feed no tech or tool aggregate.

use crate::catalog::ToolSpec;
use crate::config::ClassifierConfig;
use crate::sources::RawCommand;
use crate::types::{Category, CommandEntry};
use std::collections::BTreeSet;

/// Tag a command with every category whose prefix rules match.
pub fn categorize(command: &str, rules: &ClassifierConfig) -> BTreeSet<Category> {
    let sets = [
        (Category::Development, &rules.development_prefixes),
        (Category::System, &rules.system_prefixes),
        (Category::File, &rules.file_prefixes),
    ];

    let mut categories = BTreeSet::new();
    for (category, prefixes) in sets {
        if prefixes.iter().any(|p| command.starts_with(p.as_str())) {
            categories.insert(category);
        }
    }
    categories
}

/// Whether a command text counts as use of the given tool.
///
/// True when the command contains the tool identifier as a substring, or
/// contains the tool's package-manager invocation. Installation status is
/// the caller's filter; this predicate is purely textual.
pub fn tool_used(command: &str, spec: &ToolSpec) -> bool {
    if command.contains(spec.name) {
        return true;
    }
    spec.package_manager
        .is_some_and(|manager| command.contains(manager))
}

/// Turn normalized history lines into classified entries.
pub fn classify(raw: Vec<RawCommand>, rules: &ClassifierConfig) -> Vec<CommandEntry> {
    raw.into_iter()
        .map(|cmd| {
            let categories = categorize(&cmd.command, rules);
            CommandEntry {
                command: cmd.command,
                timestamp: cmd.timestamp,
                categories,
            }
        })
        .collect()
}
