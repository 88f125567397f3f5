use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::StorageError;

pub fn read_import_file(path: &Path) -> Result<String, StorageError> {
    fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the archive into `output_dir`, creating the directory if needed.
/// An existing file with the same name is replaced.
pub fn save_archive(output_dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
    ensure_dir(output_dir)?;
    let file = output_dir.join(file_name);
    fs::write(&file, bytes).map_err(|source| StorageError::Write {
        path: file.clone(),
        source,
    })?;
    info!(path = %file.display(), size_bytes = bytes.len(), "archive saved");
    Ok(file)
}

fn ensure_dir(path: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(path).map_err(|source| StorageError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_into_nested_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("exports").join("today");

        let saved = save_archive(&output, "tests.zip", b"PK").unwrap();

        assert_eq!(saved, output.join("tests.zip"));
        assert_eq!(fs::read(&saved).unwrap(), b"PK");
    }

    #[test]
    fn overwrites_existing_archive() {
        let dir = tempfile::tempdir().unwrap();
        save_archive(dir.path(), "tests.zip", b"old").unwrap();
        let saved = save_archive(dir.path(), "tests.zip", b"new").unwrap();
        assert_eq!(fs::read(saved).unwrap(), b"new");
    }

    #[test]
    fn missing_import_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = read_import_file(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn reads_import_file_text() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tests.json");
        fs::write(&file, "[]").unwrap();
        assert_eq!(read_import_file(&file).unwrap(), "[]");
    }
}
