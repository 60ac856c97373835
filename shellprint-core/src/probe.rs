//! Installed-tool probing
//!
//! Confirms which catalog tools exist on the host by running each tool's
//! version command once per analysis run. A probe that exits non-zero, fails
//! to spawn, or exceeds its deadline marks the tool absent; probe failures
//! are never surfaced as run-level errors.
//!
//! Probes are independent of each other and run concurrently under a
//! semaphore so large catalogs do not spawn unbounded processes.
//!
//! The result is a plain set of names. Passing that set (rather than a live
//! prober) through the rest of the engine keeps classification and
//! aggregation testable with a hand-built set.

use crate::catalog::{self, ToolSpec};
use crate::classify;
use crate::config::ProbeConfig;
use crate::types::{CommandEntry, Shell};
use std::collections::{BTreeMap, BTreeSet};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Probe every catalog entry and return the names of installed tools.
pub async fn detect_installed(specs: &'static [ToolSpec], config: &ProbeConfig) -> BTreeSet<String> {
    let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let deadline = Duration::from_secs(config.timeout_secs);
    let mut probes = JoinSet::new();

    for spec in specs {
        let semaphore = Arc::clone(&semaphore);
        probes.spawn(async move {
            // Closed only if the semaphore is dropped, which cannot happen here
            let _permit = semaphore.acquire_owned().await.ok()?;
            probe_one(spec, deadline).await.then(|| spec.name.to_string())
        });
    }

    let mut installed = BTreeSet::new();
    while let Some(result) = probes.join_next().await {
        if let Ok(Some(name)) = result {
            installed.insert(name);
        }
    }

    tracing::debug!(installed = installed.len(), probed = specs.len(), "tool probe complete");
    installed
}

/// Run one version probe. Timeout counts as "not installed".
async fn probe_one(spec: &ToolSpec, deadline: Duration) -> bool {
    let child = Command::new("sh")
        .arg("-c")
        .arg(spec.probe)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status();

    match tokio::time::timeout(deadline, child).await {
        Ok(Ok(status)) => status.success(),
        Ok(Err(e)) => {
            tracing::trace!(tool = spec.name, error = %e, "probe spawn failed");
            false
        }
        Err(_) => {
            tracing::trace!(tool = spec.name, "probe timed out");
            false
        }
    }
}

/// Select the classification candidates from the installed set.
///
/// Plausibility is the number of history commands that textually use the
/// tool; candidates are ranked by that count descending, ties broken by name
/// ascending, and capped at `max_candidates`.
pub fn select_candidates(
    installed: &BTreeSet<String>,
    histories: &BTreeMap<Shell, Vec<CommandEntry>>,
    max_candidates: usize,
) -> BTreeSet<String> {
    let mut ranked: Vec<(&str, usize)> = installed
        .iter()
        .filter_map(|name| catalog::spec(name))
        .map(|spec| {
            let uses = histories
                .values()
                .flatten()
                .filter(|entry| classify::tool_used(&entry.command, spec))
                .count();
            (spec.name, uses)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(max_candidates)
        .map(|(name, _)| name.to_string())
        .collect()
}
