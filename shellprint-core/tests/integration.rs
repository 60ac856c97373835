//! Integration tests for the shellprint analysis pipeline
//!
//! These tests build a synthetic home directory with tempfile and run the
//! full analyzer against it, with a fixed installed-tool set so no real
//! processes are probed.

use shellprint_core::analytics;
use shellprint_core::{Analyzer, Category, Config, Shell};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn installed(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn write_home_file(home: &Path, rel: &str, content: &str) {
    let path = home.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

async fn analyze(home: &Path, tools: &[&str]) -> shellprint_core::ShellData {
    Analyzer::new(Config::default())
        .with_home(home)
        .with_installed(installed(tools))
        .run()
        .await
        .unwrap()
}

// ============================================
// Empty and missing sources
// ============================================

#[tokio::test]
async fn test_no_history_files_at_all() {
    let dir = TempDir::new().unwrap();
    let data = analyze(dir.path(), &["git"]).await;

    assert!(data.histories.is_empty());
    let insights = &data.insights;
    assert!(insights.tech_profile.primary_role.is_none());
    assert!(insights.tech_profile.tech_stack.is_empty());
    assert!(insights.tech_profile.proficiency.is_empty());
    assert!(insights.work_patterns.peak_hours.is_empty());
    assert!(insights.work_patterns.productivity.is_empty());
    assert!(insights.tool_usage.languages.is_empty());
    assert!(analytics::curate(&data.histories).is_empty());
    assert!(analytics::summarize(&data).is_empty());
}

#[tokio::test]
async fn test_empty_history_file() {
    let dir = TempDir::new().unwrap();
    write_home_file(dir.path(), ".bash_history", "");

    let data = analyze(dir.path(), &["git"]).await;
    assert_eq!(data.histories.get(&Shell::Bash).map(Vec::len), Some(0));
    // Zero commands must not produce NaN metrics, just no metrics
    assert!(data.insights.work_patterns.productivity.is_empty());
}

// ============================================
// Classification and profile
// ============================================

#[tokio::test]
async fn test_git_heavy_bash_history() {
    let dir = TempDir::new().unwrap();
    write_home_file(
        dir.path(),
        ".bash_history",
        "git commit -m \"x\"\ngit commit -m \"y\"\nls -la\n",
    );

    let data = analyze(dir.path(), &["git"]).await;

    let history = data.histories.get(&Shell::Bash).unwrap();
    assert_eq!(history.len(), 3);
    assert!(history[0].categories.contains(&Category::Development));
    assert!(history[2].categories.contains(&Category::File));

    assert_eq!(data.insights.tool_usage.languages.get("git"), Some(&2));
    assert_eq!(
        data.insights.tech_profile.primary_role.as_deref(),
        Some("Git Developer")
    );
}

#[tokio::test]
async fn test_uninstalled_tools_do_not_count() {
    let dir = TempDir::new().unwrap();
    write_home_file(dir.path(), ".bash_history", "docker ps\ndocker images\n");

    let data = analyze(dir.path(), &[]).await;
    assert!(data.insights.tool_usage.languages.is_empty());
    assert!(data.insights.tech_profile.primary_role.is_none());
}

#[tokio::test]
async fn test_command_variety_metric() {
    let dir = TempDir::new().unwrap();
    let mut lines = String::new();
    for _ in 0..4 {
        for cmd in ["git status", "docker ps", "npm run dev", "ls", "cd .."] {
            lines.push_str(cmd);
            lines.push('\n');
        }
    }
    write_home_file(dir.path(), ".bash_history", &lines);

    let data = analyze(dir.path(), &["git", "docker", "npm"]).await;
    let variety = data
        .insights
        .work_patterns
        .productivity
        .get("Command Variety")
        .copied()
        .unwrap();
    assert!((variety - 0.25).abs() < 1e-9);
}

// ============================================
// Timestamps and peak hours
// ============================================

#[tokio::test]
async fn test_peak_hours_from_zsh_extended_history() {
    let dir = TempDir::new().unwrap();
    // 1700000000 = 22:13 UTC; 1700040000 = 09:20 UTC next day
    let history = "\
: 1700000000:0;git status\n\
: 1700000001:0;git diff\n\
: 1700000002:0;git push\n\
: 1700040000:0;ls\n\
";
    write_home_file(dir.path(), ".zsh_history", history);

    let data = analyze(dir.path(), &["git"]).await;
    let hours = &data.insights.work_patterns.peak_hours;
    assert_eq!(hours.first(), Some(&22));
    assert_eq!(hours.len(), 2);
}

#[tokio::test]
async fn test_plain_history_excluded_from_peak_hours() {
    let dir = TempDir::new().unwrap();
    write_home_file(dir.path(), ".bash_history", "git status\nls\npwd\n");

    let data = analyze(dir.path(), &["git"]).await;
    assert!(data.insights.work_patterns.peak_hours.is_empty());
}

// ============================================
// Config parsing
// ============================================

#[tokio::test]
async fn test_aliases_and_environment_from_bashrc() {
    let dir = TempDir::new().unwrap();
    write_home_file(dir.path(), ".bash_history", "ls\n");
    write_home_file(
        dir.path(),
        ".bashrc",
        "alias ll='ls -la'\nexport EDITOR=\"vim\"\nsource /etc/bashrc\n",
    );
    write_home_file(dir.path(), ".bash_aliases", "alias ll='ls -lah'\n");

    let data = analyze(dir.path(), &[]).await;
    let config = data.configs.get(&Shell::Bash).unwrap();

    // Later files win on duplicate names
    assert_eq!(config.aliases.get("ll").map(String::as_str), Some("ls -lah"));
    assert_eq!(
        config.environment.get("EDITOR").map(String::as_str),
        Some("vim")
    );
    assert_eq!(config.config_files.len(), 2);
}

#[tokio::test]
async fn test_zsh_plugin_discovery() {
    let dir = TempDir::new().unwrap();
    write_home_file(dir.path(), ".zsh_history", "ls\n");
    fs::create_dir_all(dir.path().join(".oh-my-zsh/plugins/git")).unwrap();
    fs::create_dir_all(dir.path().join(".oh-my-zsh/plugins/fzf")).unwrap();

    let data = analyze(dir.path(), &[]).await;
    let plugins = &data.configs.get(&Shell::Zsh).unwrap().plugins;
    let names: Vec<&str> = plugins.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["fzf", "git"]);
}

// ============================================
// Cross-shell aggregation, timeline, corpus
// ============================================

#[tokio::test]
async fn test_multi_shell_aggregation_and_corpus() {
    let dir = TempDir::new().unwrap();
    let bash: String = std::iter::repeat("git status\n").take(10).collect();
    write_home_file(dir.path(), ".bash_history", &bash);
    let fish: String = (0..5).map(|i| format!("- cmd: vim file{}.rs\n", i)).collect();
    write_home_file(dir.path(), ".local/share/fish/fish_history", &fish);

    let data = analyze(dir.path(), &["git", "vim"]).await;

    assert_eq!(data.total_commands(), 15);

    let corpus = analytics::summarize(&data);
    let shell_lines: Vec<&str> = corpus
        .lines()
        .filter(|l| l.starts_with("Shell: "))
        .collect();
    assert_eq!(
        shell_lines,
        vec!["Shell: bash, Commands: 10", "Shell: fish, Commands: 5"]
    );
    assert!(corpus.contains("Editors:\n- vim: 5 uses\n"));
}

#[tokio::test]
async fn test_timeline_dedupes_across_shells() {
    let dir = TempDir::new().unwrap();
    write_home_file(dir.path(), ".bash_history", "git status\ngti\npwd\n");
    write_home_file(dir.path(), ".zsh_history", "git status\ndocker ps\n");

    let data = analyze(dir.path(), &["git", "docker"]).await;
    let timeline = analytics::curate(&data.histories);

    let commands: Vec<&str> = timeline.iter().map(|t| t.command.as_str()).collect();
    // "gti" is a known typo, "pwd" is noise, the zsh "git status" is a dup
    assert_eq!(commands, vec!["git status", "gti", "docker ps"]);
    assert!(timeline.len() <= analytics::timeline::MAX_ENTRIES);
    // bash is scanned before zsh, so it owns the duplicate
    assert_eq!(timeline[0].shell, Shell::Bash);
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    write_home_file(
        dir.path(),
        ".zsh_history",
        ": 1700000000:0;git status\n: 1700003600:0;docker ps\n: 1700007200:0;make test\n",
    );

    let tools = &["docker", "git", "make"];
    let first = analyze(dir.path(), tools).await;
    let second = analyze(dir.path(), tools).await;

    assert_eq!(
        first.insights.work_patterns.peak_hours,
        second.insights.work_patterns.peak_hours
    );
    assert_eq!(
        serde_json::to_string(&first.insights).unwrap(),
        serde_json::to_string(&second.insights).unwrap()
    );
    assert_eq!(analytics::summarize(&first), analytics::summarize(&second));
}
