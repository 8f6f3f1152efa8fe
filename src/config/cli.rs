use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem-backed storage. Paths are used as given; the output path is
/// always derived from the input path, so no base directory is involved.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.jsonl");
        let path = path.to_str().unwrap();

        let storage = LocalStorage::new();
        storage.write_file(path, b"{\"a\":\"1\"}\n").unwrap();
        assert_eq!(storage.read_file(path).unwrap(), b"{\"a\":\"1\"}\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.jsonl");
        let path = path.to_str().unwrap();

        let storage = LocalStorage::new();
        storage.write_file(path, b"old contents").unwrap();
        storage.write_file(path, b"new").unwrap();
        assert_eq!(storage.read_file(path).unwrap(), b"new");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let storage = LocalStorage::new();
        assert!(storage.read_file("/no/such/file.csv").is_err());
    }
}
