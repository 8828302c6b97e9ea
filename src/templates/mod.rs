//! Templates: the bundled variants compiled into the binary, and the same
//! layout read from disk.
//!
//! A template directory holds `scaffold.json` next to a `template/` tree:
//!
//! ```text
//! nbb/
//!   scaffold.json
//!   template/
//!     gitignore
//!     server.cljs
//! ```
//!
//! Bundled trees only carry files, so a bundled template must not contain
//! empty directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use rust_embed::RustEmbed;

use crate::config::TemplateConfig;
use crate::error::{Result, ScaffoldError};
use crate::fsops;

pub const DEFAULT_VARIANT: &str = "nbb";

const MANIFEST: &str = "scaffold.json";
const CONTENT_DIR: &str = "template";

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Bundled;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A variant embedded in the binary, by name.
    Bundled(String),
    /// A content tree on disk.
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Template {
    pub source: TemplateSource,
    pub config: TemplateConfig,
}

impl Template {
    pub fn bundled(name: &str) -> Result<Self> {
        let manifest = format!("{name}/{MANIFEST}");
        let Some(file) = Bundled::get(&manifest) else {
            return Err(ScaffoldError::UnknownTemplate {
                name: name.to_string(),
                available: variant_names().join(", "),
            });
        };

        let config = serde_json::from_slice(&file.data)
            .map_err(|source| ScaffoldError::Manifest { path: PathBuf::from(&manifest), source })?;

        Ok(Self { source: TemplateSource::Bundled(name.to_string()), config })
    }

    /// Load `dir/scaffold.json` and use `dir/template` as the content tree.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let manifest = dir.join(MANIFEST);
        let json = fs::read_to_string(&manifest)
            .map_err(|source| ScaffoldError::TemplateRead { path: manifest.clone(), source })?;
        let config = TemplateConfig::from_json(&json)
            .map_err(|source| ScaffoldError::Manifest { path: manifest, source })?;

        Ok(Self::from_dir(dir.join(CONTENT_DIR), config))
    }

    pub fn from_dir(root: impl Into<PathBuf>, config: TemplateConfig) -> Self {
        Self { source: TemplateSource::Directory(root.into()), config }
    }

    /// Write the template's content tree, untouched, into `dst`.
    pub fn materialize(&self, dst: &Path) -> Result<usize> {
        match &self.source {
            TemplateSource::Directory(root) => fsops::copy_tree(root, dst),
            TemplateSource::Bundled(name) => materialize_bundled(name, dst),
        }
    }
}

fn materialize_bundled(name: &str, dst: &Path) -> Result<usize> {
    let prefix = format!("{name}/{CONTENT_DIR}/");
    let mut paths: Vec<String> =
        Bundled::iter().filter(|p| p.starts_with(&prefix)).map(String::from).collect();
    paths.sort();

    if paths.is_empty() {
        return Err(ScaffoldError::TemplateRead {
            path: PathBuf::from(prefix),
            source: io::Error::new(io::ErrorKind::NotFound, "bundled template has no files"),
        });
    }

    fs::create_dir_all(dst).map_err(|e| ScaffoldError::write(dst, e))?;
    for path in &paths {
        let file = Bundled::get(path).ok_or_else(|| ScaffoldError::TemplateRead {
            path: PathBuf::from(path),
            source: io::Error::from(io::ErrorKind::NotFound),
        })?;
        fsops::write_file(&dst.join(&path[prefix.len()..]), &file.data)?;
    }

    debug!("materialized {} bundled files of '{name}' into {}", paths.len(), dst.display());
    Ok(paths.len())
}

/// Names of the bundled variants, sorted.
pub fn variant_names() -> Vec<String> {
    let mut names: Vec<String> = Bundled::iter()
        .filter_map(|p| p.strip_suffix(&format!("/{MANIFEST}")).map(String::from))
        .filter(|n| !n.contains('/'))
        .collect();
    names.sort();
    names
}
