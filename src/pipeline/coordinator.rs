//! Input discovery for batch classification.

use crate::error::Result;
use crate::vision::is_supported_image;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Collect input images from paths (files and directories).
///
/// Directories are walked recursively. Files with other extensions are
/// skipped; missing paths are logged and skipped.
pub fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_supported_image(path) {
                files.push(path.clone());
            } else {
                warn!("Skipping unsupported file: {}", path.display());
            }
        } else if path.is_dir() {
            collect_images_recursive(path, &mut files)?;
        } else {
            warn!("Skipping non-existent path: {}", path.display());
        }
    }

    Ok(files)
}

fn collect_images_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_images_recursive(&path, files)?;
        } else if is_supported_image(&path) {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_walks_directories_recursively() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("farm_a").join("pen_2");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("b.jpg"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        std::fs::write(nested.join("a.PNG"), b"").unwrap();

        let files = collect_input_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("a.PNG")));
        assert!(files.iter().all(|f| !f.ends_with("notes.txt")));
    }

    #[test]
    fn test_collect_skips_missing_paths() {
        let dir = TempDir::new().unwrap();
        let files = collect_input_files(&[dir.path().join("nope.jpg")]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_keeps_explicit_image_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cow.jpeg");
        std::fs::write(&file, b"").unwrap();
        let files = collect_input_files(std::slice::from_ref(&file)).unwrap();
        assert_eq!(files, vec![file]);
    }
}
