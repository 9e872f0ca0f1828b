// src/output/writer.rs
//! The only place exported documents touch the filesystem.

use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Writes a UTF-8 document in one go, creating the parent directory first.
///
/// An existing file at `path` is overwritten.
pub fn write_document(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_directory(parent)?;
    }

    log::debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content)?;
    log::info!("Saved {}", path.display());
    Ok(())
}

/// Creates a directory and its parents if missing.
pub fn create_directory(path: &Path) -> Result<(), AppError> {
    log::trace!("Ensuring directory {}", path.display());
    fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("Doc.md");

        write_document(&path, "# Doc\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Doc\n");

        write_document(&path, "# Doc v2\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Doc v2\n");
    }
}
