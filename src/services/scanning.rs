use crate::domain::{GameMetadata, ManifestEntry};
use crate::error::{ManifestError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

pub const INDEX_FILE: &str = "index.html";
pub const METADATA_FILE: &str = "game.json";
const HTML_SUFFIX: &str = ".html";

pub struct ScanningService {
    games_dir: PathBuf,
    entry_prefix: String,
}

impl ScanningService {
    pub fn new(games_dir: impl Into<PathBuf>, entry_prefix: impl Into<String>) -> Self {
        Self {
            games_dir: games_dir.into(),
            entry_prefix: entry_prefix.into(),
        }
    }

    /// Builds one entry per game folder that has an HTML entry file, in
    /// folder name order.
    pub fn scan(&self) -> Result<Vec<ManifestEntry>> {
        info!("Scanning games in {:?}", self.games_dir);

        let mut entries = Vec::new();
        for (name, folder) in self.game_folders()? {
            let Some(entry_file) = self.select_entry_file(&folder) else {
                debug!("Skipping {:?}: no HTML entry file", folder);
                continue;
            };

            let metadata = self.load_metadata(&folder);
            let entry = self.entry_path(&name, &entry_file);
            entries.push(ManifestEntry::new(name, entry, metadata));
        }

        info!("Found {} games", entries.len());
        Ok(entries)
    }

    /// Immediate subdirectories of the games root, sorted by name.
    fn game_folders(&self) -> Result<Vec<(String, PathBuf)>> {
        let games_dir_error = |source| ManifestError::GamesDir {
            path: self.games_dir.clone(),
            source,
        };

        let mut folders = Vec::new();
        for dir_entry in fs::read_dir(&self.games_dir).map_err(games_dir_error)? {
            let path = dir_entry.map_err(games_dir_error)?.path();
            if !path.is_dir() {
                trace!("Ignoring non-directory {:?}", path);
                continue;
            }

            match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => folders.push((name.to_string(), path.clone())),
                None => warn!("Skipping {:?}: folder name is not valid UTF-8", path),
            }
        }

        folders.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(folders)
    }

    /// `index.html` when present, otherwise the first `.html` file by name.
    fn select_entry_file(&self, folder: &Path) -> Option<String> {
        if folder.join(INDEX_FILE).exists() {
            return Some(INDEX_FILE.to_string());
        }

        let read_dir = match fs::read_dir(folder) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Cannot list {:?}: {}", folder, e);
                return None;
            }
        };

        read_dir
            .filter_map(|dir_entry| dir_entry.ok())
            .map(|dir_entry| dir_entry.path())
            .filter(|path| path.is_file())
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .filter(|name| name.ends_with(HTML_SUFFIX))
            .min()
    }

    fn load_metadata(&self, folder: &Path) -> GameMetadata {
        let path = folder.join(METADATA_FILE);
        if !path.exists() {
            return GameMetadata::default();
        }

        let parsed = fs::read_to_string(&path)
            .map_err(ManifestError::from)
            .and_then(|content| GameMetadata::from_json(&content));

        match parsed {
            Ok(metadata) => {
                for key in &metadata.invalid_keys {
                    warn!("Ignoring {:?} in {:?}: unexpected type", key, path);
                }
                metadata
            }
            Err(e) => {
                warn!("Ignoring metadata in {:?}: {}", path, e);
                GameMetadata::default()
            }
        }
    }

    fn entry_path(&self, folder: &str, file: &str) -> String {
        if self.entry_prefix.is_empty() {
            format!("{}/{}", folder, file)
        } else {
            format!("{}/{}/{}", self.entry_prefix, folder, file)
        }
    }
}
