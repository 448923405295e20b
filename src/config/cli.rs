use crate::core::Storage;
use crate::utils::error::{PlannerError, Result};
use std::fs;
use std::path::Path;

/// Reads catalog files from the local filesystem.
///
/// Relative names resolve against `base_path`; absolute paths are used as-is.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|source| PlannerError::FileOpen {
            path: path.to_string(),
            source,
        })
    }
}
