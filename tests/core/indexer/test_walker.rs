// Walker behavior on realistic trees

use crate::common::TestRepo;
use memex::core::indexer::{FileWalker, PathFilter};
use std::path::PathBuf;

fn walk(repo: &TestRepo, patterns: &[String]) -> Vec<String> {
    let root = repo.path();
    let walker = FileWalker::new(PathFilter::new(patterns).unwrap());
    let mut files: Vec<String> = walker
        .collect_files(root)
        .into_iter()
        .map(|p: PathBuf| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_default_policy_on_small_repo() {
    let repo = TestRepo::small();

    assert_eq!(
        walk(&repo, &[]),
        vec![
            "README.md",
            "data/table.csv",
            "main.go",
            "server.log",
            "src/lib.rs"
        ]
    );
}

#[test]
fn test_glob_patterns_match_base_names() {
    let repo = TestRepo::small();
    let patterns = vec!["*.log".to_string(), "src".to_string()];

    assert_eq!(
        walk(&repo, &patterns),
        vec!["README.md", "data/table.csv", "main.go"]
    );
}

#[test]
fn test_absolute_pattern_prunes_one_subtree() {
    let repo = TestRepo::with_files(&[
        ("a/b/keep.md", "keep"),
        ("a/bc/keep.md", "also kept"),
        ("other/b/keep.md", "same name elsewhere"),
    ]);
    let patterns = vec![repo.abs("a/b")];

    assert_eq!(
        walk(&repo, &patterns),
        vec!["a/bc/keep.md", "other/b/keep.md"]
    );
}

#[test]
fn test_pattern_with_dot_segments_is_cleaned() {
    let repo = TestRepo::with_files(&[("x/secret.md", "s"), ("y/open.md", "o")]);
    let patterns = vec![format!("{}/./y/../x/", repo.abs(""))];

    assert_eq!(walk(&repo, &patterns), vec!["y/open.md"]);
}

#[test]
fn test_ignored_directory_names_apply_at_any_depth() {
    let repo = TestRepo::with_files(&[
        ("deep/er/node_modules/pkg.js", "x"),
        ("deep/er/__pycache__/m.py", "x"),
        ("deep/er/.cache/c.json", "{}"),
        ("deep/er/real.py", "print(1)"),
    ]);

    assert_eq!(walk(&repo, &[]), vec!["deep/er/real.py"]);
}

#[test]
fn test_hidden_files_follow_extension_rule() {
    // A dotfile's extension is its whole name, which is not allow-listed
    let repo = TestRepo::with_files(&[(".env", "KEY=1"), (".hidden.md", "# hi")]);

    assert_eq!(walk(&repo, &[]), vec![".hidden.md"]);
}

#[test]
fn test_invalid_glob_is_rejected() {
    let err = PathFilter::new(&["[".to_string()]).unwrap_err();
    assert!(err.to_string().contains("Invalid ignore pattern"));
}

#[cfg(unix)]
#[test]
fn test_path_pattern_through_linked_root() {
    let repo = TestRepo::with_files(&[("real/ok.md", "ok"), ("real/secret/key.md", "key")]);
    let link = repo.path().join("link");
    std::os::unix::fs::symlink(repo.path().join("real"), &link).unwrap();

    let walker = FileWalker::new(PathFilter::new(&[repo.abs("link/secret")]).unwrap());
    let files = walker.collect_files(&link);

    assert_eq!(files, vec![link.join("ok.md")]);
}
