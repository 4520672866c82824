//! File system walker with ignore-pattern filtering.
//!
//! Traverses directory trees and decides for every entry whether to
//! prune the subtree, skip just the entry, or include it. User ignore
//! patterns are checked before the built-in policy tables. Handles
//! errors gracefully (permission denied, broken links) without
//! stopping the walk.

use glob::Pattern;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{MemexError, Result};
use crate::core::policy;

/// A normalized user ignore rule
#[derive(Debug, Clone)]
pub enum IgnorePattern {
    /// Skips this path and everything below it
    Path(PathBuf),

    /// Matched against an entry's base name only
    Glob(Pattern),
}

impl IgnorePattern {
    /// Normalize a raw pattern
    ///
    /// `~/` is expanded to the home directory, then the pattern is
    /// cleaned lexically. Absolute results are path rules, anything
    /// else is a glob.
    pub fn parse(raw: &str) -> Result<Self> {
        let expanded = match raw.strip_prefix("~/") {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => PathBuf::from(raw),
            },
            None => PathBuf::from(raw),
        };
        let cleaned = clean_path(&expanded);

        if cleaned.is_absolute() {
            return Ok(IgnorePattern::Path(cleaned));
        }

        let glob = cleaned.to_string_lossy();
        Pattern::new(&glob)
            .map(IgnorePattern::Glob)
            .map_err(|e| MemexError::ConfigError(format!("Invalid ignore pattern '{raw}': {e}")))
    }

    /// Whether this rule covers `path` (whose base name is `name`)
    pub fn matches(&self, path: &Path, name: &str) -> bool {
        match self {
            // Component-wise, so `/a/b` does not cover `/a/bc`
            IgnorePattern::Path(prefix) => path.starts_with(prefix),
            IgnorePattern::Glob(glob) => glob.matches(name),
        }
    }
}

/// Outcome of filtering one walk entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Directory: do not descend
    SkipSubtree,
    /// Do not index this entry, keep walking
    SkipEntry,
    Include,
}

/// Per-entry filter combining ignore patterns and policy tables
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    patterns: Vec<IgnorePattern>,
}

impl PathFilter {
    /// Create a filter from raw ignore patterns, in caller order
    pub fn new(ignore_patterns: &[String]) -> Result<Self> {
        let patterns = ignore_patterns
            .iter()
            .map(|p| IgnorePattern::parse(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    /// Decide what to do with one entry
    ///
    /// Precedence: ignore patterns, ignored directory names, hidden
    /// directories, then the extension allow-list for files.
    pub fn decide(&self, path: &Path, is_dir: bool) -> FilterDecision {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let skip = if is_dir {
            FilterDecision::SkipSubtree
        } else {
            FilterDecision::SkipEntry
        };

        if self.patterns.iter().any(|p| p.matches(path, &name)) {
            return skip;
        }

        if is_dir {
            if policy::should_ignore_directory(&name) || name.starts_with('.') {
                return FilterDecision::SkipSubtree;
            }
            return FilterDecision::Include;
        }

        if !policy::is_allowed_extension(&extension_of(&name)) {
            return FilterDecision::SkipEntry;
        }

        FilterDecision::Include
    }
}

/// File system walker driven by a [`PathFilter`]
pub struct FileWalker {
    filter: PathFilter,
}

impl FileWalker {
    pub fn new(filter: PathFilter) -> Self {
        Self { filter }
    }

    /// Collect all files under `root` that the filter includes
    ///
    /// The root itself is never filtered. Entries that cannot be read
    /// are logged and skipped.
    pub fn collect_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut walker = WalkDir::new(root).follow_links(false).into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", walk_error_path(&e, root), e);
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let is_dir = entry.file_type().is_dir();
            match self.filter.decide(entry.path(), is_dir) {
                FilterDecision::SkipSubtree => {
                    tracing::debug!("Skipping directory: {:?}", entry.path());
                    walker.skip_current_dir();
                }
                FilterDecision::SkipEntry => {}
                FilterDecision::Include if is_dir => {}
                FilterDecision::Include => files.push(entry.into_path()),
            }
        }

        files
    }
}

/// Extension of a base name including the leading dot
///
/// Everything from the last `.`, so `archive.tar.gz` gives `.gz` and a
/// dotfile such as `.bashrc` is its own extension. Empty if there is
/// no dot.
pub fn extension_of(name: &str) -> String {
    name.rfind('.')
        .map(|i| name[i..].to_string())
        .unwrap_or_default()
}

/// Lexically normalize a path: drop `.`, fold `..`, strip trailing separators
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(cleaned.components().next_back(), Some(Component::Normal(_)))
                    && cleaned.pop();
                if !popped && !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Make a path absolute against the working directory, then clean it
///
/// Symlinks are left as written, so the result is the same form the
/// walker produces below it and that absolute ignore patterns use.
pub fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    Ok(clean_path(&std::path::absolute(path)?))
}

fn walk_error_path(err: &walkdir::Error, root: &Path) -> String {
    err.path().unwrap_or(root).display().to_string()
}
