use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn exists(&self, name: &str) -> Result<bool> {
        let full_path = self.base_path.join(name);
        Ok(full_path.try_exists()?)
    }

    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_exists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert!(!storage.exists("generated_imeis_1.txt").unwrap());
        let path = storage
            .write_file("generated_imeis_1.txt", b"123456780000002\n")
            .unwrap();

        assert_eq!(path, temp_dir.path().join("generated_imeis_1.txt"));
        assert!(storage.exists("generated_imeis_1.txt").unwrap());
        assert_eq!(fs::read_to_string(path).unwrap(), "123456780000002\n");
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested").join("out"));

        let path = storage.write_file("generated_imeis_1.txt", b"x\n").unwrap();
        assert!(path.exists());
    }
}
