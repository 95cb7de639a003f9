use crate::core::Storage;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::is_contained_path;
use std::path::PathBuf;

/// File system storage rooted at a base directory.
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

    /// 只允許留在 base_path 底下的相對路徑
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        if !is_contained_path(path) {
            return Err(SiteError::InvalidConfigValueError {
                field: "storage.path".to_string(),
                value: path.to_string(),
                reason: format!("Path escapes {}", self.base_path.display()),
            });
        }
        Ok(self.base_path.join(path))
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path)?;
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}
