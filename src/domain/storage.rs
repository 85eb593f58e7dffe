use super::Manifest;
use crate::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// Replaces the stored manifest with `manifest` and returns where it went.
    fn save_manifest(&self, manifest: &Manifest) -> Result<PathBuf>;
}
