use std::fs;
use std::path::{Path, PathBuf};

const MAX_FILE_LENGTH: usize = 4000;

/// Recursively collect files with the given extensions, skipping build/VCS noise
/// and the read-only reference pack under `examples/`.
fn find_source_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();

            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    if name == "target" || name.starts_with('.') || name == "examples" {
                        continue;
                    }
                }
                files.extend(find_source_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }

    files
}

fn count_lines(path: &Path) -> std::io::Result<usize> {
    Ok(fs::read_to_string(path)?.lines().count())
}

#[test]
fn test_source_files_under_line_limit() {
    let root = std::env::current_dir().unwrap();
    let files = find_source_files(&root);
    assert!(!files.is_empty(), "expected to find Rust source files");

    let over_limit: Vec<_> = files
        .into_iter()
        .filter_map(|path| {
            let lines = count_lines(&path).unwrap();
            (lines > MAX_FILE_LENGTH).then_some((path, lines))
        })
        .collect();

    assert!(
        over_limit.is_empty(),
        "files exceeding the {}-line limit: {:?}",
        MAX_FILE_LENGTH,
        over_limit
    );
}

#[test]
fn test_project_layout() {
    let root = std::env::current_dir().unwrap();
    for dir in ["src", "tests", "benches"] {
        let path = root.join(dir);
        assert!(path.is_dir(), "expected directory {} to exist", dir);
    }
    assert!(root.join("Cargo.toml").is_file());
}
