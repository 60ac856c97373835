//! Analytics for shellprint
//!
//! Folds classified histories and parsed configs into the derived
//! aggregates:
//! - Technology profile and proficiency scoring ([`profile`])
//! - Work-time patterns and productivity metrics ([`patterns`])
//! - Curated command timeline ([`timeline`])
//! - Plain-text corpus for the narrative service ([`corpus`])
//!
//! Everything here is a pure function of already-collected data: no I/O, no
//! clocks, no process spawning. Rankings sort by (count descending,
//! identifier ascending) so output is reproducible across runs.

pub mod corpus;
pub mod patterns;
pub mod profile;
pub mod timeline;

pub use corpus::summarize;
pub use timeline::curate;

use crate::types::{CommandEntry, Insights, Shell, ShellConfig};
use std::collections::{BTreeMap, BTreeSet};

/// Derive all insights from the collected per-shell data.
///
/// `candidates` is the capped set of classification candidates and
/// `installed` the full confirmed-installed set; both come from the probe
/// stage (or a fixed set under test).
pub fn build_insights(
    histories: &BTreeMap<Shell, Vec<CommandEntry>>,
    configs: &BTreeMap<Shell, ShellConfig>,
    candidates: &BTreeSet<String>,
    installed: &BTreeSet<String>,
) -> Insights {
    let entries: Vec<&CommandEntry> = histories.values().flatten().collect();

    let (tech_profile, tool_usage) = profile::build_profile(&entries, candidates, installed);
    let work_patterns = patterns::build_work_patterns(&entries);
    let recommendations = patterns::recommendations(configs);

    Insights {
        tech_profile,
        work_patterns,
        tool_usage,
        recommendations,
    }
}
