//! Core domain types for shellprint
//!
//! These types form the canonical data model that every stage of an analysis
//! run reads and writes:
//!
//! | Term | Definition |
//! |------|------------|
//! | **Shell** | A shell family we know how to read (bash, fish, zsh) |
//! | **CommandEntry** | One command from a shell's history file |
//! | **ShellConfig** | Parsed configuration state for one shell |
//! | **Insights** | Everything derived from histories and configs |
//! | **ShellData** | The aggregate root for one analysis run |
//!
//! All cross-shell and per-identifier collections are `BTreeMap`/`BTreeSet`
//! so that iteration order, and therefore every derived ranking, is
//! reproducible across runs on identical input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

// ============================================
// Shells
// ============================================

/// Shell families with known history and configuration locations.
///
/// Variants are declared in alphabetical order; [`Shell::ALL`] is the
/// canonical iteration order for every cross-shell operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Shell {
    Bash,
    Fish,
    Zsh,
}

impl Shell {
    /// Canonical iteration order for all supported shells.
    pub const ALL: [Shell; 3] = [Shell::Bash, Shell::Fish, Shell::Zsh];

    /// Returns the identifier used in output and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Fish => "fish",
            Shell::Zsh => "zsh",
        }
    }

    /// Home-relative path of this shell's history file
    pub fn history_path(&self) -> &'static str {
        match self {
            Shell::Bash => "~/.bash_history",
            Shell::Fish => "~/.local/share/fish/fish_history",
            Shell::Zsh => "~/.zsh_history",
        }
    }

    /// Home-relative paths of this shell's configuration files
    pub fn config_paths(&self) -> &'static [&'static str] {
        match self {
            Shell::Bash => &["~/.bashrc", "~/.bash_profile", "~/.bash_aliases"],
            Shell::Fish => &["~/.config/fish/config.fish"],
            Shell::Zsh => &["~/.zshrc", "~/.zsh_plugins", "~/.zprofile"],
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Shell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Shell::Bash),
            "fish" => Ok(Shell::Fish),
            "zsh" => Ok(Shell::Zsh),
            _ => Err(format!("unknown shell: {}", s)),
        }
    }
}

// ============================================
// Commands
// ============================================

/// Semantic category assigned to a command by prefix rules.
///
/// A command may carry zero, one, or several categories; the rules are
/// independent and all of them are evaluated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Development,
    System,
    File,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Development => "development",
            Category::System => "system",
            Category::File => "file",
        }
    }
}

/// One command parsed from a shell history file.
///
/// Created once per history line and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEntry {
    /// The invoked command text, normalized from the history format
    pub command: String,
    /// When the command ran. `None` when the source format records no
    /// per-line time; such entries are excluded from hour-of-day analysis
    /// rather than stamped with a fabricated time.
    pub timestamp: Option<DateTime<Utc>>,
    /// Categories matched by the classifier
    pub categories: BTreeSet<Category>,
}

// ============================================
// Configuration state
// ============================================

/// A configuration file that was found and read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFileInfo {
    /// Resolved (tilde-expanded) path
    pub path: PathBuf,
    /// Last modification time
    pub modified: DateTime<Utc>,
    /// Raw file content
    pub content: String,
}

/// A shell plugin discovered by probing known plugin-manager layouts.
///
/// The inventory is best-effort: only the conventions we know about are
/// probed, so it is not guaranteed complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin name (directory or file stem)
    pub name: String,
    /// Where the plugin lives on disk
    pub source: PathBuf,
    /// Modification time of the plugin's own directory or file
    pub last_updated: DateTime<Utc>,
}

/// Parsed configuration state for one shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Config files that were present, keyed by their home-relative path
    pub config_files: BTreeMap<String, ConfigFileInfo>,
    /// Alias name → replacement text, last write wins
    pub aliases: BTreeMap<String, String>,
    /// Exported variable name → value, last write wins
    pub environment: BTreeMap<String, String>,
    /// Discovered plugins, sorted by name
    pub plugins: Vec<PluginInfo>,
}

// ============================================
// Derived insights
// ============================================

/// Technology profile derived from command usage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechProfile {
    /// "<Tool> Developer", from the most-used identifier. `None` when no
    /// identifier has a positive count; consumers must render an explicit
    /// "not enough data" state instead of an empty string.
    pub primary_role: Option<String>,
    /// Installed languages with at least one observed use
    pub tech_stack: BTreeSet<String>,
    /// Non-language identifiers with at least one observed use
    pub secondary_skills: BTreeSet<String>,
    /// Identifier → usage share of total commands, in [0, 1]
    pub proficiency: BTreeMap<String, f64>,
}

/// Work-time patterns derived from command timestamps and texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkPatterns {
    /// Up to 3 hours of day (0-23), ranked by activity count descending;
    /// ties go to the lower hour
    pub peak_hours: Vec<u8>,
    /// Metric name → score in [0, 1]
    pub productivity: BTreeMap<String, f64>,
    /// Frequently repeated command stems, most frequent first
    pub common_workflows: Vec<String>,
}

/// Raw usage tallies for editors, languages, and build tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolUsage {
    pub editors: BTreeMap<String, u32>,
    pub languages: BTreeMap<String, u32>,
    pub build_tools: BTreeMap<String, u32>,
}

/// Everything derived from the collected histories and configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Insights {
    pub tech_profile: TechProfile,
    pub work_patterns: WorkPatterns,
    pub tool_usage: ToolUsage,
    /// Configuration suggestions (more aliases, plugins worth exploring)
    pub recommendations: Vec<String>,
}

// ============================================
// Timeline
// ============================================

/// One curated entry for chronological display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Timestamp of the command, when the source format recorded one
    pub timestamp: Option<DateTime<Utc>>,
    /// The command text
    pub command: String,
    /// Which shell's history it came from
    pub shell: Shell,
}

// ============================================
// Aggregate root
// ============================================

/// Everything one analysis run produced.
///
/// Built once by the analyzer; all derivation writes happen before any
/// consumer reads it, so consumers treat it as an immutable snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellData {
    /// Per-shell histories, file order preserved
    pub histories: BTreeMap<Shell, Vec<CommandEntry>>,
    /// Per-shell configuration state
    pub configs: BTreeMap<Shell, ShellConfig>,
    /// Derived aggregates
    pub insights: Insights,
}

impl ShellData {
    /// Total number of commands across all shells.
    pub fn total_commands(&self) -> usize {
        self.histories.values().map(Vec::len).sum()
    }

    /// All entries across all shells, in canonical shell order.
    pub fn all_entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.histories.values().flatten()
    }
}
