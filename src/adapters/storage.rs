use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Filesystem storage rooted at the image directory.
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
    async fn prepare(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_prepare_creates_nested_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("a").join("images");
        let storage = LocalStorage::new(&root);

        storage.prepare().await.unwrap();

        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_write_keeps_raw_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let data = [0u8, 0xFF, 0xD8, 0x10, 0x0A];

        storage.write_file("75026967.jpg", &data).await.unwrap();

        assert_eq!(std::fs::read(temp_dir.path().join("75026967.jpg")).unwrap(), data);
    }

    #[tokio::test]
    async fn test_prepare_fails_when_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("images");
        std::fs::write(&blocker, b"not a dir").unwrap();

        let storage = LocalStorage::new(&blocker);
        assert!(storage.prepare().await.is_err());
    }
}
