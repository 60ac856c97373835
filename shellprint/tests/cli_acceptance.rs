//! CLI acceptance tests for the shellprint binary
//!
//! Runs the real binary against a synthetic home directory. The narrative
//! service is always skipped (`--no-narrative`) so tests never touch the
//! network; tool probes run against whatever the build host has, which is
//! fine because these tests only assert on structure, not on tallies.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&home).expect("failed to create HOME");
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    fn seed_bash_history(&self, content: &str) {
        fs::write(self.home.join(".bash_history"), content).expect("failed to seed history");
    }

    fn run(&self, args: &[&str]) -> Output {
        let bin = PathBuf::from(assert_cmd::cargo::cargo_bin!("shellprint"));
        Command::new(bin)
            .args(args)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("XDG_STATE_HOME", self.home.join(".local/state"))
            .env_remove("SHELLPRINT_API_KEY")
            .env_remove("GEMINI_API_KEY")
            .output()
            .expect("failed to run shellprint")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn config_with_short_probe(home: &Path) {
    // Probing the full catalog on CI hosts is slow; cap the per-probe
    // timeout and widen concurrency via config
    let config_dir = home.join(".config/shellprint");
    fs::create_dir_all(&config_dir).expect("failed to create config dir");
    fs::write(
        config_dir.join("config.toml"),
        "[probe]\ntimeout_secs = 1\nconcurrency = 16\n",
    )
    .expect("failed to write config");
}

#[test]
fn test_help_runs() {
    let env = CliTestEnv::new();
    let output = env.run(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Profile your shell usage"));
}

#[test]
fn test_empty_home_reports_no_history() {
    let env = CliTestEnv::new();
    config_with_short_probe(&env.home);

    let output = env.run(&["--no-narrative"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No shell history found."));
}

#[test]
fn test_report_structure_with_history() {
    let env = CliTestEnv::new();
    config_with_short_probe(&env.home);
    env.seed_bash_history("git status\ngit push\nls -la\n");

    let output = env.run(&["--no-narrative"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("OVERVIEW"));
    assert!(text.contains("bash"));
    assert!(text.contains("3 commands"));
    assert!(text.contains("TECH PROFILE"));
    assert!(text.contains("WORK PATTERNS"));
}

#[test]
fn test_json_export_is_valid() {
    let env = CliTestEnv::new();
    config_with_short_probe(&env.home);
    env.seed_bash_history("git status\n");

    let output = env.run(&["--json", "--no-narrative"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("JSON export should parse");
    assert!(value.get("histories").is_some());
    assert!(value.get("insights").is_some());
}
