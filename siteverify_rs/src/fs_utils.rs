use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::config::VerifyConfig;
use crate::error::VerifyError;
use crate::types::App;

/// Enumerate apps under `apps_root`: every subdirectory except reserved ones,
/// sorted by name.
pub fn discover_apps(apps_root: &Path, config: &VerifyConfig) -> Result<Vec<App>, VerifyError> {
    let entries = fs::read_dir(apps_root).map_err(|source| VerifyError::AppsDir {
        path: apps_root.to_path_buf(),
        source,
    })?;

    let mut apps: Vec<App> = skip_unreadable(apps_root, entries)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            if config.is_reserved(&name) {
                return None;
            }
            Some(App {
                public_dir: entry.path().join(&config.apps.public_dir),
                role: config.role_of(&name),
                name,
            })
        })
        .collect();

    apps.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(apps)
}

/// Drop entries that could not be read, logging each one.
fn skip_unreadable<T>(
    dir: &Path,
    entries: impl Iterator<Item = io::Result<T>>,
) -> impl Iterator<Item = T> {
    entries.filter_map(move |entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), "skipping unreadable entry: {e}");
            None
        }
    })
}

/// Depth-first, name-ordered walk over every file below `root`, pruning
/// directories named in `skip_dirs` at any depth. Symlinks are followed, so
/// dangling links and loops come back as `Err`.
pub fn site_files<'a>(
    root: &Path,
    skip_dirs: &'a [String],
) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> + 'a {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !skip_dirs.iter().any(|skip| *skip == name)
        })
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_dir() => None,
            Ok(e) => Some(Ok(e.into_path())),
            Err(err) => Some(Err(err)),
        })
}

pub fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions.iter().any(|want| *want == ext)
        })
        .unwrap_or(false)
}

/// Resolve `.` and `..` without touching the filesystem, so `a/../b` exists
/// whenever `b` does, even if `a` does not.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
