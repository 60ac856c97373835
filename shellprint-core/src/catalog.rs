//! The known-tool catalog
//!
//! Every tool and language the classifier can attribute usage to, together
//! with the shell command that confirms it is installed on the host. The
//! catalog is data only; probing lives in [`crate::probe`].

use serde::{Deserialize, Serialize};

/// Broad grouping for a catalog entry.
///
/// Languages feed the tech stack; everything else that sees use lands in
/// secondary skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Language,
    BuildTool,
    DevOps,
    VersionControl,
    Database,
    WebTool,
    Editor,
    Shell,
}

/// One entry in the known-tool catalog.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    /// Identifier matched against command text
    pub name: &'static str,
    /// Version command whose successful exit confirms installation
    pub probe: &'static str,
    /// Broad grouping
    pub kind: ToolKind,
    /// Package-manager invocation that also counts as use of this tool
    pub package_manager: Option<&'static str>,
}

/// Every tool shellprint knows how to recognize.
pub const KNOWN_TOOLS: &[ToolSpec] = &[
    // Programming languages
    tool("python", "python --version", ToolKind::Language, Some("pip")),
    tool("python3", "python3 --version", ToolKind::Language, Some("pip")),
    tool("node", "node --version", ToolKind::Language, Some("npm")),
    tool("go", "go version", ToolKind::Language, Some("go get")),
    tool("java", "java -version", ToolKind::Language, None),
    tool("ruby", "ruby --version", ToolKind::Language, Some("gem")),
    tool("php", "php --version", ToolKind::Language, Some("composer")),
    tool("rust", "rustc --version", ToolKind::Language, Some("cargo")),
    tool("perl", "perl --version", ToolKind::Language, None),
    tool("scala", "scala -version", ToolKind::Language, None),
    tool("kotlin", "kotlin -version", ToolKind::Language, None),
    tool("swift", "swift --version", ToolKind::Language, None),
    tool("julia", "julia --version", ToolKind::Language, None),
    tool("haskell", "ghc --version", ToolKind::Language, None),
    tool("elixir", "elixir --version", ToolKind::Language, None),
    tool("erlang", "erl -version", ToolKind::Language, None),
    tool("clang", "clang --version", ToolKind::Language, None),
    tool("gcc", "gcc --version", ToolKind::Language, None),
    tool("dotnet", "dotnet --version", ToolKind::Language, None),
    tool("lua", "lua -v", ToolKind::Language, None),
    tool("ocaml", "ocaml -version", ToolKind::Language, None),
    tool("dart", "dart --version", ToolKind::Language, None),
    tool("zig", "zig version", ToolKind::Language, None),
    tool("nim", "nim --version", ToolKind::Language, None),
    // Build tools & package managers
    tool("maven", "mvn --version", ToolKind::BuildTool, None),
    tool("gradle", "gradle --version", ToolKind::BuildTool, None),
    tool("npm", "npm --version", ToolKind::BuildTool, None),
    tool("yarn", "yarn --version", ToolKind::BuildTool, None),
    tool("pnpm", "pnpm --version", ToolKind::BuildTool, None),
    tool("pip", "pip --version", ToolKind::BuildTool, None),
    tool("cargo", "cargo --version", ToolKind::BuildTool, None),
    tool("composer", "composer --version", ToolKind::BuildTool, None),
    tool("bundler", "bundle --version", ToolKind::BuildTool, None),
    tool("make", "make --version", ToolKind::BuildTool, None),
    // DevOps & cloud
    tool("docker", "docker --version", ToolKind::DevOps, None),
    tool("kubectl", "kubectl version --client", ToolKind::DevOps, None),
    tool("terraform", "terraform version", ToolKind::DevOps, None),
    tool("ansible", "ansible --version", ToolKind::DevOps, None),
    tool("vagrant", "vagrant --version", ToolKind::DevOps, None),
    tool("helm", "helm version", ToolKind::DevOps, None),
    tool("aws", "aws --version", ToolKind::DevOps, None),
    tool("gcloud", "gcloud --version", ToolKind::DevOps, None),
    tool("azure", "az --version", ToolKind::DevOps, None),
    // Version control
    tool("git", "git --version", ToolKind::VersionControl, None),
    tool("svn", "svn --version", ToolKind::VersionControl, None),
    tool("mercurial", "hg --version", ToolKind::VersionControl, None),
    // Databases
    tool("mysql", "mysql --version", ToolKind::Database, None),
    tool("psql", "psql --version", ToolKind::Database, None),
    tool("mongodb", "mongod --version", ToolKind::Database, None),
    tool("redis", "redis-cli --version", ToolKind::Database, None),
    // Web servers & tools
    tool("nginx", "nginx -v", ToolKind::WebTool, None),
    tool("curl", "curl --version", ToolKind::WebTool, None),
    tool("wget", "wget --version", ToolKind::WebTool, None),
    // Editors
    tool("vim", "vim --version", ToolKind::Editor, None),
    tool("nvim", "nvim --version", ToolKind::Editor, None),
    tool("emacs", "emacs --version", ToolKind::Editor, None),
    tool("code", "code --version", ToolKind::Editor, None),
    tool("nano", "nano --version", ToolKind::Editor, None),
    // Shells & terminal tools
    tool("zsh", "zsh --version", ToolKind::Shell, None),
    tool("bash", "bash --version", ToolKind::Shell, None),
    tool("fish", "fish --version", ToolKind::Shell, None),
    tool("tmux", "tmux -V", ToolKind::Shell, None),
];

const fn tool(
    name: &'static str,
    probe: &'static str,
    kind: ToolKind,
    package_manager: Option<&'static str>,
) -> ToolSpec {
    ToolSpec {
        name,
        probe,
        kind,
        package_manager,
    }
}

/// Look up a catalog entry by identifier.
pub fn spec(name: &str) -> Option<&'static ToolSpec> {
    KNOWN_TOOLS.iter().find(|t| t.name == name)
}

/// Editors counted in the tool-usage tally.
pub const EDITORS: &[&str] = &["vim", "nvim", "emacs", "code", "nano"];

/// Build tools counted in the tool-usage tally.
pub const BUILD_TOOLS: &[&str] = &[
    "make", "maven", "gradle", "npm", "yarn", "pip", "cargo", "composer", "bundler",
];

/// Development tools counted toward proficiency alongside languages.
pub const DEV_TOOLS: &[&str] = &["git", "docker", "kubectl", "terraform", "ansible", "make"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<_> = KNOWN_TOOLS.iter().map(|t| t.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), KNOWN_TOOLS.len());
    }

    #[test]
    fn test_spec_lookup() {
        let git = spec("git").unwrap();
        assert_eq!(git.kind, ToolKind::VersionControl);
        assert!(spec("cobol").is_none());
    }

    #[test]
    fn test_tally_lists_are_in_catalog() {
        for name in EDITORS.iter().chain(BUILD_TOOLS).chain(DEV_TOOLS) {
            assert!(spec(name).is_some(), "{} missing from catalog", name);
        }
    }
}
