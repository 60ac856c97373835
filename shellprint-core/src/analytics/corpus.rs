//! Corpus serialization for the narrative service
//!
//! Renders the analyzed profile into a compact plain-text digest. Pure
//! serialization: no analysis happens here, and section order is fixed so
//! the same profile always produces the same corpus.

use crate::types::ShellData;
use std::fmt::Write;

/// Serialize the profile into the narrative corpus.
pub fn summarize(data: &ShellData) -> String {
    let mut corpus = String::new();

    // Per-shell command counts
    for (shell, history) in &data.histories {
        let _ = writeln!(corpus, "Shell: {}, Commands: {}", shell, history.len());
    }

    let profile = &data.insights.tech_profile;
    if !profile.tech_stack.is_empty() {
        let stack: Vec<&str> = profile.tech_stack.iter().map(String::as_str).collect();
        let _ = writeln!(corpus, "Tech Stack: {}", stack.join(", "));
    }

    let patterns = &data.insights.work_patterns;
    if !patterns.peak_hours.is_empty() {
        corpus.push_str("Peak Hours: ");
        for hour in &patterns.peak_hours {
            let _ = write!(corpus, "{:02}:00 ", hour);
        }
        corpus.push('\n');
    }

    if !patterns.productivity.is_empty() {
        corpus.push_str("Productivity Metrics:\n");
        for (metric, value) in &patterns.productivity {
            let _ = writeln!(corpus, "- {}: {:.1}%", metric, value * 100.0);
        }
    }

    let editors = &data.insights.tool_usage.editors;
    if !editors.is_empty() {
        corpus.push_str("Editors:\n");
        for (editor, count) in editors {
            let _ = writeln!(corpus, "- {}: {} uses", editor, count);
        }
    }

    corpus
}
