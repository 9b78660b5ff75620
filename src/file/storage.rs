//! Physical file storage for corkboard uploads.
//!
//! Uploads are written under an injected base directory with UUID-based
//! names, sharded by the first 2 characters of the name:
//!
//! ```text
//! {base_path}/
//! ├── ab/
//! │   └── ab12cd34-....txt
//! └── cd/
//!     └── cd90ab12-....bin
//! ```
//!
//! UUID naming makes destination paths unique per upload, so concurrent
//! writes never collide.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{CorkboardError, Result};

/// File storage rooted at a configured directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Base directory for stored files.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new FileStorage with the given base path.
    ///
    /// The base directory is created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Get the base path of this storage.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Save content under a new UUID-based name, keeping the original
    /// extension.
    ///
    /// Returns the stored name.
    pub fn save(&self, content: &[u8], original_name: &str) -> Result<String> {
        let uuid = Uuid::new_v4();
        let ext = Self::extract_extension(original_name);
        let stored_name = format!("{uuid}.{ext}");

        let file_path = self.resolve(&stored_name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;

        Ok(stored_name)
    }

    /// Load the content of a stored file.
    pub fn load(&self, stored_name: &str) -> Result<Vec<u8>> {
        let file_path = self.resolve(stored_name);
        match fs::read(&file_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(CorkboardError::NotFound(format!("file {stored_name}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a stored file.
    ///
    /// Returns `true` if the file was deleted, `false` if it didn't exist.
    pub fn delete(&self, stored_name: &str) -> Result<bool> {
        let file_path = self.resolve(stored_name);
        match fs::remove_file(&file_path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a stored file exists.
    pub fn exists(&self, stored_name: &str) -> bool {
        self.resolve(stored_name).exists()
    }

    /// Get the size of a stored file.
    pub fn file_size(&self, stored_name: &str) -> Result<u64> {
        let file_path = self.resolve(stored_name);
        match fs::metadata(&file_path) {
            Ok(m) => Ok(m.len()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(CorkboardError::NotFound(format!("file {stored_name}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Full path for a stored name: {base_path}/{shard}/{stored_name}.
    pub fn resolve(&self, stored_name: &str) -> PathBuf {
        let shard = Self::shard(stored_name);
        self.base_path.join(shard).join(stored_name)
    }

    /// Shard directory for a stored name (first 2 characters).
    fn shard(stored_name: &str) -> &str {
        if stored_name.len() >= 2 {
            &stored_name[..2]
        } else {
            stored_name
        }
    }

    /// Extract the file extension, defaulting to "bin".
    fn extract_extension(filename: &str) -> &str {
        Path::new(filename)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("bin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_storage() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage_path = temp_dir.path().join("uploads");
        assert!(!storage_path.exists());

        let storage = FileStorage::new(&storage_path).unwrap();
        assert!(storage_path.exists());
        assert_eq!(storage.base_path(), storage_path);
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, storage) = setup_storage();
        let content = b"Hello, corkboard!";

        let stored_name = storage.save(content, "notes.txt").unwrap();
        assert!(stored_name.ends_with(".txt"));

        let loaded = storage.load(&stored_name).unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn test_save_extension_handling() {
        let (_temp_dir, storage) = setup_storage();

        let name = storage.save(b"data", "report.pdf").unwrap();
        assert!(name.ends_with(".pdf"));

        let name = storage.save(b"data", "no_extension").unwrap();
        assert!(name.ends_with(".bin"));
    }

    #[test]
    fn test_save_creates_shard_directory() {
        let (_temp_dir, storage) = setup_storage();

        let stored_name = storage.save(b"data", "a.txt").unwrap();
        let shard_dir = storage.base_path().join(&stored_name[..2]);
        assert!(shard_dir.is_dir());
    }

    #[test]
    fn test_unique_names_per_save() {
        let (_temp_dir, storage) = setup_storage();

        let a = storage.save(b"same", "dup.txt").unwrap();
        let b = storage.save(b"same", "dup.txt").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_load_not_found() {
        let (_temp_dir, storage) = setup_storage();
        let result = storage.load("nonexistent.txt");
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = setup_storage();

        let stored_name = storage.save(b"temp", "temp.txt").unwrap();
        assert!(storage.exists(&stored_name));

        assert!(storage.delete(&stored_name).unwrap());
        assert!(!storage.exists(&stored_name));
        assert!(!storage.delete(&stored_name).unwrap());
    }

    #[test]
    fn test_file_size() {
        let (_temp_dir, storage) = setup_storage();
        let content = b"12345";

        let stored_name = storage.save(content, "five.txt").unwrap();
        assert_eq!(storage.file_size(&stored_name).unwrap(), 5);

        let result = storage.file_size("missing.txt");
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));
    }

    #[test]
    fn test_resolve_path_layout() {
        let (_temp_dir, storage) = setup_storage();
        let stored_name = "ab12cd34-5678-90ab-cdef-123456789012.txt";
        let path = storage.resolve(stored_name);
        assert_eq!(path, storage.base_path().join("ab").join(stored_name));
    }

    #[test]
    fn test_binary_content_roundtrip() {
        let (_temp_dir, storage) = setup_storage();
        let content: Vec<u8> = (0..=255).collect();

        let stored_name = storage.save(&content, "binary.bin").unwrap();
        assert_eq!(storage.load(&stored_name).unwrap(), content);
    }
}
