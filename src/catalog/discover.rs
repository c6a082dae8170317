use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

pub const CATALOG_EXTENSION: &str = "xcstrings";

/// Directories that never contain source catalogs worth editing.
const SKIPPED_DIRS: &[&str] = &["build", "DerivedData", "Pods", "Carthage", "node_modules"];

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

/// Find `.xcstrings` files below `root`, sorted by path.
pub fn discover_catalogs(root: &Path, verbose: bool) -> Vec<PathBuf> {
    let mut catalogs = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == CATALOG_EXTENSION)
        {
            catalogs.push(path.to_path_buf());
        }
    }

    catalogs.sort();
    catalogs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discovers_nested_catalogs() {
        let dir = tempdir().unwrap();
        let app = dir.path().join("App").join("Resources");
        fs::create_dir_all(&app).unwrap();
        fs::write(app.join("Localizable.xcstrings"), "{}").unwrap();
        fs::write(app.join("InfoPlist.xcstrings"), "{}").unwrap();
        fs::write(app.join("notes.txt"), "").unwrap();

        let found = discover_catalogs(dir.path(), false);
        assert_eq!(
            found,
            vec![
                app.join("InfoPlist.xcstrings"),
                app.join("Localizable.xcstrings")
            ]
        );
    }

    #[test]
    fn test_skips_hidden_and_build_dirs() {
        let dir = tempdir().unwrap();
        for sub in [".git", "build", "DerivedData/App"] {
            let path = dir.path().join(sub);
            fs::create_dir_all(&path).unwrap();
            fs::write(path.join("Localizable.xcstrings"), "{}").unwrap();
        }

        assert!(discover_catalogs(dir.path(), false).is_empty());
    }
}
