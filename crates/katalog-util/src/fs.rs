use std::path::{Path, PathBuf};

/// Collect build-declaration files named `file_name` under `root`.
///
/// Matches a root-level file plus the direct children of each
/// first-level subdirectory. The scan deliberately does not recurse
/// further: nested module layouts are the host build system's concern.
/// Results are sorted so downstream output is stable across platforms.
pub fn collect_build_files(root: &Path, file_name: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_file() {
            if path.file_name().is_some_and(|n| n == file_name) {
                files.push(path);
            }
        } else if path.is_dir() {
            for sub in std::fs::read_dir(&path)? {
                let sub_path = sub?.path();
                if sub_path.is_file() && sub_path.file_name().is_some_and(|n| n == file_name) {
                    files.push(sub_path);
                }
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Read and concatenate the contents of the given files.
pub fn concat_files(files: &[PathBuf]) -> std::io::Result<String> {
    let mut all = String::new();
    for file in files {
        all.push_str(&std::fs::read_to_string(file)?);
    }
    Ok(all)
}

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
