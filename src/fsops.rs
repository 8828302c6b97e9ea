//! Filesystem primitives used by instantiation: tree copy, single-path move
//! and bulk placeholder replacement.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceStats {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub matches: usize,
}

/// Copy every file and directory under `src` into `dst`, creating `dst` and
/// any missing parents. Symlinks are rejected. Returns the number of files
/// copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let meta = fs::metadata(src)
        .map_err(|source| ScaffoldError::TemplateRead { path: src.to_path_buf(), source })?;
    if !meta.is_dir() {
        return Err(ScaffoldError::TemplateRead {
            path: src.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "template root is not a directory"),
        });
    }

    let mut files = 0usize;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|e| ScaffoldError::TemplateRead {
            path: e.path().unwrap_or(src).to_path_buf(),
            source: e.into(),
        })?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);

        if entry.depth() > 0 && entry.path_is_symlink() {
            return Err(ScaffoldError::TemplateRead {
                path: entry.path().to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "templates may not contain symlinks",
                ),
            });
        }

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| ScaffoldError::write(&target, e))?;
        } else {
            trace!("copy {} -> {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(|e| ScaffoldError::write(&target, e))?;
            files += 1;
        }
    }

    debug!("copied {files} files from {} to {}", src.display(), dst.display());
    Ok(files)
}

/// Write one file, creating its parent directories.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::write(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| ScaffoldError::write(path, e))
}

/// Rename a single file or directory. Never overwrites an existing `dst`.
pub fn move_path(src: &Path, dst: &Path) -> Result<()> {
    if dst.symlink_metadata().is_ok() {
        return Err(ScaffoldError::DestinationExists { path: dst.to_path_buf() });
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::write(parent, e))?;
    }

    debug!("move {} -> {}", src.display(), dst.display());
    fs::rename(src, dst).map_err(|e| ScaffoldError::write(src, e))
}

/// Rename every file and directory below `root` whose name `rename` maps to a
/// new name. Children are renamed before their parents. Names that are not
/// UTF-8 are left alone unless `rename` would change them, which is an error.
pub fn rename_paths<F>(root: &Path, rename: F) -> Result<Vec<(PathBuf, PathBuf)>>
where
    F: Fn(&str) -> Option<String>,
{
    let entries: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name()
        .into_iter()
        .map(|e| e.map(walkdir::DirEntry::into_path))
        .collect::<std::result::Result<Vec<_>, walkdir::Error>>()
        .map_err(|e| ScaffoldError::write(root, e.into()))?;

    let mut renamed = Vec::new();
    for path in entries {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let new_name = match file_name.to_str() {
            Some(n) => rename(n),
            // Never rename lossily: a non-UTF-8 name that would change is an error.
            None if rename(&*file_name.to_string_lossy()).is_some() => {
                return Err(ScaffoldError::write(
                    &path,
                    io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
                ));
            }
            None => None,
        };
        let Some(new_name) = new_name else {
            continue;
        };
        let target = path.with_file_name(new_name);
        move_path(&path, &target)?;
        renamed.push((path, target));
    }

    Ok(renamed)
}

/// Replace every occurrence of `from` with `to` in the content of every file
/// below `root`. Files that are not UTF-8 are left alone unless they contain
/// `from`, which is an error.
pub fn replace_in_files(root: &Path, from: &str, to: &str) -> Result<ReplaceStats> {
    let mut stats = ReplaceStats::default();
    if from.is_empty() {
        return Ok(stats);
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            ScaffoldError::substitution(e.path().unwrap_or(root).to_path_buf(), e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        stats.files_scanned += 1;
        let bytes = fs::read(path).map_err(|e| ScaffoldError::substitution(path, e))?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) if contains_bytes(err.as_bytes(), from.as_bytes()) => {
                return Err(ScaffoldError::substitution(
                    path,
                    io::Error::new(io::ErrorKind::InvalidData, "file is not valid UTF-8"),
                ));
            }
            Err(_) => continue,
        };

        let count = text.matches(from).count();
        if count == 0 {
            continue;
        }

        trace!("{count} matches in {}", path.display());
        fs::write(path, text.replace(from, to)).map_err(|e| ScaffoldError::substitution(path, e))?;
        stats.files_changed += 1;
        stats.matches += count;
    }

    debug!(
        "replaced {} occurrences of '{from}' in {} of {} files",
        stats.matches, stats.files_changed, stats.files_scanned
    );
    Ok(stats)
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}
