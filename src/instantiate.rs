use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, ScaffoldError};
use crate::fsops::{self, ReplaceStats};
use crate::name::ProjectName;
use crate::templates::Template;

/// A freshly generated project.
#[derive(Debug)]
pub struct Generated {
    pub root: PathBuf,
    pub files: usize,
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub stats: ReplaceStats,
}

/// Generate a project from `template` inside `parent`.
///
/// Copies the content tree, applies the template's fixed renames, renames
/// paths named exactly like the placeholder according to its path rule, then
/// substitutes the verbatim name for the placeholder in all remaining path
/// names and file contents. Nothing is rolled back on failure.
pub fn instantiate(template: &Template, name: &ProjectName, parent: &Path) -> Result<Generated> {
    let config = &template.config;
    let token = config.placeholder.as_str();

    let segment = config.segment_name(name);
    if forms_placeholder(name.verbatim(), token) || forms_placeholder(&segment, token) {
        return Err(ScaffoldError::NameContainsPlaceholder {
            name: name.to_string(),
            placeholder: token.to_string(),
        });
    }

    let root = parent.join(config.directory_name(name));
    if root.symlink_metadata().is_ok() {
        return Err(ScaffoldError::DestinationExists { path: root });
    }

    info!("instantiating {:?} into {}", template.source, root.display());
    let files = template.materialize(&root)?;

    let mut renamed = Vec::new();
    for rule in &config.hidden_renames {
        let (from, to) = (root.join(&rule.from), root.join(&rule.to));
        fsops::move_path(&from, &to)?;
        renamed.push((from, to));
    }

    let mut stats = ReplaceStats::default();
    if !token.is_empty() {
        renamed.extend(fsops::rename_paths(&root, |n| (n == token).then(|| segment.clone()))?);
        renamed.extend(fsops::rename_paths(&root, |n| {
            n.contains(token).then(|| n.replace(token, name.verbatim()))
        })?);
        stats = fsops::replace_in_files(&root, token, name.verbatim())?;
    }

    info!(
        "generated {} ({files} files, {} renames, {} substitutions)",
        root.display(),
        renamed.len(),
        stats.matches
    );
    Ok(Generated { root, files, renamed, stats })
}

/// Whether substituting `name` for `token` could leave a token behind: the
/// name contains it, sits inside it, or completes it with adjacent text.
fn forms_placeholder(name: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    if name.contains(token) || token.contains(name) {
        return true;
    }

    token
        .char_indices()
        .skip(1)
        .any(|(k, _)| name.ends_with(&token[..k]) || name.starts_with(&token[k..]))
}
