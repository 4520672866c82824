//! Built-in indexing policy.
//!
//! Three immutable lookup tables decide which directories are never
//! entered, which extensions are indexed at all, and which indexed
//! extensions are metadata-only. Extensions carry their leading dot.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Dependency, build output, cache and OS directories
const IGNORED_DIRECTORIES: &[&str] = &[
    // macOS system directories
    "Library",
    "Applications",
    "System",
    "__MACOSX",
    // JavaScript/Node
    "node_modules",
    // Python
    "__pycache__",
    "venv",
    "env",
    "site-packages",
    // Go
    "vendor",
    // Rust
    "target",
    // .NET/C#
    "bin",
    "obj",
    "packages",
    // Build outputs
    "build",
    "dist",
    "out",
    "_build",
    "cache",
    // Test/Coverage
    "coverage",
    "htmlcov",
    "logs",
    "tmp",
    "temp",
    // iOS/macOS development
    "Pods",
    "Carthage",
    "DerivedData",
    // Elixir
    "deps",
    "_deps",
];

/// Extensions whose body is read and indexed
const TEXT_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".rtf", // plain text
    ".js", ".jsx", ".ts", ".tsx", // JavaScript/TypeScript
    ".py", ".go", ".java", ".kt", ".c", ".cpp", ".h", ".rb", ".php", ".swift", ".rs",
    ".sh", ".bash", // shell
    ".html", ".css", ".scss", // web
    ".json", ".yaml", ".yml", ".xml", // config
    ".sql",
];

/// Extensions indexed for metadata only
const METADATA_ONLY_EXTENSIONS: &[&str] = &[
    // Documents
    ".pdf", ".docx", ".xlsx", ".pptx", ".doc", ".xls", ".ppt",
    // Data files
    ".csv",
    // Logs
    ".log",
    // Media
    ".mp4", ".mov", ".avi", ".mp3", ".wav", ".flac",
    // Images
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp",
];

static IGNORED_DIRECTORY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| IGNORED_DIRECTORIES.iter().copied().collect());

static ALLOWED_EXTENSION_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    TEXT_EXTENSIONS
        .iter()
        .chain(METADATA_ONLY_EXTENSIONS)
        .copied()
        .collect()
});

static METADATA_ONLY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| METADATA_ONLY_EXTENSIONS.iter().copied().collect());

/// Directory names that are never descended into
pub fn should_ignore_directory(name: &str) -> bool {
    IGNORED_DIRECTORY_SET.contains(name)
}

/// Extensions eligible for indexing (leading dot included)
pub fn is_allowed_extension(ext: &str) -> bool {
    ALLOWED_EXTENSION_SET.contains(ext)
}

/// Extensions whose content is not read during directory indexing
pub fn should_ignore_content(ext: &str) -> bool {
    METADATA_ONLY_SET.contains(ext)
}

/// Sorted allow-list, for display
pub fn allowed_extensions() -> Vec<&'static str> {
    let mut exts: Vec<_> = ALLOWED_EXTENSION_SET.iter().copied().collect();
    exts.sort_unstable();
    exts
}

/// Sorted metadata-only extensions, for display
pub fn metadata_only_extensions() -> Vec<&'static str> {
    let mut exts: Vec<_> = METADATA_ONLY_SET.iter().copied().collect();
    exts.sort_unstable();
    exts
}

/// Sorted ignored directory names, for display
pub fn ignored_directories() -> Vec<&'static str> {
    let mut dirs: Vec<_> = IGNORED_DIRECTORY_SET.iter().copied().collect();
    dirs.sort_unstable();
    dirs
}
