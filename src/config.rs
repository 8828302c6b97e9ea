//! Declared configuration of a template, read from its `scaffold.json`.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::name::ProjectName;

pub const DEFAULT_PLACEHOLDER: &str = "NAME";

/// How a path segment named exactly like the placeholder is renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathRule {
    /// Hyphens become underscores, for namespace and module directories.
    Normalize,
    #[default]
    Verbatim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostInstall {
    #[default]
    None,
    /// Run the install command inside the generated project.
    Inline,
    /// Only tell the user to run the install command.
    ManualInstruction,
}

/// A fixed rename applied to the copied tree before placeholder substitution,
/// e.g. `gitignore` to `.gitignore`. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HiddenRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    pub description: String,
    pub placeholder: String,
    pub hidden_renames: Vec<HiddenRename>,
    pub path_rule: PathRule,
    /// Naming of the destination directory itself.
    pub directory_rule: PathRule,
    pub post_install: PostInstall,
    pub install_command: Vec<String>,
    pub run_command: String,
    /// File to point the user at afterwards, written in template terms.
    pub entry_point: Option<PathBuf>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            hidden_renames: Vec::new(),
            path_rule: PathRule::Verbatim,
            directory_rule: PathRule::Verbatim,
            post_install: PostInstall::None,
            install_command: vec!["npm".to_string(), "install".to_string()],
            run_command: "npm run serve".to_string(),
            entry_point: None,
        }
    }
}

impl TemplateConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Replacement for a path segment that is exactly the placeholder.
    pub fn segment_name(&self, name: &ProjectName) -> String {
        rule_name(self.path_rule, name)
    }

    /// Name of the directory the project is generated into.
    pub fn directory_name(&self, name: &ProjectName) -> String {
        rule_name(self.directory_rule, name)
    }

    /// Where a template-relative path ends up inside the generated project.
    pub fn map_relative_path(&self, rel: &Path, name: &ProjectName) -> PathBuf {
        let mut rel = rel.to_path_buf();
        if let Some(rule) = self.hidden_renames.iter().find(|r| r.from == rel) {
            rel.clone_from(&rule.to);
        }

        let mut mapped = PathBuf::new();
        for c in rel.components() {
            match c {
                Component::Normal(seg) => match seg.to_str() {
                    Some(seg) if seg == self.placeholder => mapped.push(self.segment_name(name)),
                    Some(seg) => mapped.push(seg.replace(&self.placeholder, name.verbatim())),
                    None => mapped.push(seg),
                },
                other => mapped.push(other),
            }
        }
        mapped
    }

    pub fn install_display(&self) -> String {
        self.install_command.join(" ")
    }
}

fn rule_name(rule: PathRule, name: &ProjectName) -> String {
    match rule {
        PathRule::Normalize => name.normalized(),
        PathRule::Verbatim => name.verbatim().to_string(),
    }
}
