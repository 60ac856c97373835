//! shellprint - profile your shell usage
//!
//! Reads shell histories and configurations, derives a behavioral profile,
//! and prints it. Optionally asks the narrative service to turn the profile
//! into readable summary sections.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use shellprint_core::analytics;
use shellprint_core::narrative::{Narrative, NarrativeClient};
use shellprint_core::{Analyzer, Config, Shell, ShellData, TimelineEntry};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "shellprint")]
#[command(about = "Profile your shell usage from history and config files")]
#[command(version)]
struct Args {
    /// Emit the full profile as JSON instead of the rendered report
    #[arg(long)]
    json: bool,

    /// Skip the narrative service and print only the numeric profile
    #[arg(long)]
    no_narrative: bool,

    /// Path to a config file (default: ~/.config/shellprint/config.toml)
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path).context("failed to load configuration")?,
        None => Config::load().context("failed to load configuration")?,
    };
    let _log_guard = shellprint_core::logging::init(&config.logging).ok();

    let spinner = start_spinner("Analyzing shell history...");
    let narrative_config = config.narrative.clone();
    let data = Analyzer::new(config)
        .run()
        .await
        .context("analysis failed")?;
    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    let timeline = analytics::curate(&data.histories);
    print_report(&data, &timeline);

    if !args.no_narrative {
        match fetch_narrative(&narrative_config, &data).await {
            Ok(narrative) => print_narrative(&narrative),
            Err(e) => {
                tracing::warn!(error = %e, "narrative generation failed");
                println!("  (narrative unavailable: {})", e);
                println!();
            }
        }
    }

    Ok(())
}

fn start_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn fetch_narrative(
    config: &shellprint_core::config::NarrativeConfig,
    data: &ShellData,
) -> shellprint_core::Result<Narrative> {
    let client = NarrativeClient::new(config)?;
    let corpus = analytics::summarize(data);
    client.generate(&corpus).await
}

fn print_report(data: &ShellData, timeline: &[TimelineEntry]) {
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", "SHELLPRINT - YOUR SHELL, PROFILED");
    println!("╰{}╯", "─".repeat(60));
    println!();

    // Overview
    println!("OVERVIEW");
    if data.histories.is_empty() {
        println!("   No shell history found.");
        println!();
        return;
    }
    for shell in Shell::ALL {
        let Some(history) = data.histories.get(&shell) else {
            continue;
        };
        let (aliases, plugins) = data
            .configs
            .get(&shell)
            .map(|c| (c.aliases.len(), c.plugins.len()))
            .unwrap_or((0, 0));
        println!(
            "   {:<6} {:>6} commands   {:>3} aliases   {:>3} plugins",
            shell, history.len(), aliases, plugins
        );
    }
    println!();

    // Tech profile
    let profile = &data.insights.tech_profile;
    println!("TECH PROFILE");
    match &profile.primary_role {
        Some(role) => println!("   Primary role: {}", role),
        None => println!("   Primary role: not enough data"),
    }
    if !profile.tech_stack.is_empty() {
        let stack: Vec<&str> = profile.tech_stack.iter().map(String::as_str).collect();
        println!("   Tech stack:   {}", stack.join(", "));
    }
    if !profile.secondary_skills.is_empty() {
        let skills: Vec<&str> = profile.secondary_skills.iter().map(String::as_str).collect();
        println!("   Also uses:    {}", skills.join(", "));
    }
    for (tool, score) in &profile.proficiency {
        println!("   {:<12} {:>5.1}%", tool, score * 100.0);
    }
    println!();

    // Work patterns
    let patterns = &data.insights.work_patterns;
    println!("WORK PATTERNS");
    if patterns.peak_hours.is_empty() {
        println!("   Peak hours: no timestamped history");
    } else {
        let hours: Vec<String> = patterns
            .peak_hours
            .iter()
            .map(|h| format!("{:02}:00", h))
            .collect();
        println!("   Peak hours: {}", hours.join(", "));
    }
    for (metric, value) in &patterns.productivity {
        println!("   {:<20} {:>5.1}%", metric, value * 100.0);
    }
    if !patterns.common_workflows.is_empty() {
        println!("   Frequent workflows: {}", patterns.common_workflows.join(", "));
    }
    println!();

    // Tool usage
    let usage = &data.insights.tool_usage;
    println!("TOOL USAGE");
    print_tally("Editors", &usage.editors);
    print_tally("Languages", &usage.languages);
    print_tally("Build tools", &usage.build_tools);
    println!();

    // Timeline
    if !timeline.is_empty() {
        println!("TIMELINE");
        for entry in timeline {
            println!(
                "   {}  [{}]  {}",
                format_timestamp(entry.timestamp),
                entry.shell,
                entry.command
            );
        }
        println!();
    }

    // Recommendations
    if !data.insights.recommendations.is_empty() {
        println!("SUGGESTIONS");
        for suggestion in &data.insights.recommendations {
            println!("   - {}", suggestion);
        }
        println!();
    }
}

fn print_tally(label: &str, tally: &std::collections::BTreeMap<String, u32>) {
    if tally.is_empty() {
        return;
    }
    let parts: Vec<String> = tally.iter().map(|(name, n)| format!("{} ({})", name, n)).collect();
    println!("   {:<12} {}", label, parts.join(", "));
}

fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.with_timezone(&Local).format("%b %d %H:%M").to_string(),
        None => "           ".to_string(),
    }
}

fn print_narrative(narrative: &Narrative) {
    for (i, section) in narrative.sections.iter().enumerate() {
        println!("── {} ({}/{})", section.title, i + 1, narrative.sections.len());
        println!("   {}", section.description);
        for quote in &section.quotes {
            println!("   \"{}\"", quote);
        }
        println!();
    }
}
