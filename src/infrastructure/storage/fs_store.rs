use crate::domain::storage::Storage;
use crate::domain::Manifest;
use crate::error::{ManifestError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone)]
pub struct FileSystemStore {
    manifest_path: PathBuf,
}

impl FileSystemStore {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
        }
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| ManifestError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        let content = serde_json::to_string_pretty(data)?;
        fs::write(path, content).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote {} bytes to {:?}", path.metadata().map(|m| m.len()).unwrap_or(0), path);
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn save_manifest(&self, manifest: &Manifest) -> Result<PathBuf> {
        self.write_json_file(&self.manifest_path, manifest)?;
        Ok(self.manifest_path.clone())
    }
}
