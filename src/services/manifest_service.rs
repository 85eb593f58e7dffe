use crate::domain::storage::Storage;
use crate::domain::Manifest;
use crate::error::Result;
use crate::services::scanning::ScanningService;
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of one manifest build, used for the completion message.
#[derive(Debug, PartialEq)]
pub struct BuildReport {
    pub path: PathBuf,
    pub entries: usize,
}

pub struct ManifestService {
    store: Box<dyn Storage>,
    scanning: ScanningService,
}

impl ManifestService {
    pub fn new(store: Box<dyn Storage>, scanning: ScanningService) -> Self {
        Self { store, scanning }
    }

    /// Rebuilds the manifest from scratch and replaces the stored one.
    pub fn process(&self) -> Result<BuildReport> {
        let entries = self.scanning.scan()?;
        let manifest = Manifest::new(entries);
        if manifest.is_empty() {
            info!("No games found, writing an empty manifest");
        }
        for entry in manifest.entries() {
            debug!("{} -> {}", entry.id, entry.entry);
        }

        let path = self.store.save_manifest(&manifest)?;
        info!("Saved manifest to {:?}", path);

        Ok(BuildReport {
            path,
            entries: manifest.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemStore;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn service(root: &TempDir) -> ManifestService {
        ManifestService::new(
            Box::new(FileSystemStore::new(root.path().join("manifest.json"))),
            ScanningService::new(root.path().join("games"), "games"),
        )
    }

    fn write(root: &TempDir, relative: &str, content: &str) {
        let path = root.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_builds_example_manifest() {
        let root = TempDir::new().unwrap();
        write(&root, "games/zelda-like/index.html", "<html></html>");
        write(
            &root,
            "games/zelda-like/game.json",
            r#"{"title": "Zelda Like", "system": "NES", "year": 1988, "tags": ["action"], "author": "Jane"}"#,
        );
        write(&root, "games/a-game/play.html", "<html></html>");

        let report = service(&root).process().unwrap();
        assert_eq!(report.entries, 2);
        assert_eq!(report.path, root.path().join("manifest.json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report.path).unwrap()).unwrap();
        assert_eq!(
            written,
            json!([
                {
                    "id": "a-game",
                    "title": "A Game",
                    "entry": "games/a-game/play.html",
                    "system": "",
                    "year": "",
                    "tags": [],
                    "author": ""
                },
                {
                    "id": "zelda-like",
                    "title": "Zelda Like",
                    "entry": "games/zelda-like/index.html",
                    "system": "NES",
                    "year": 1988,
                    "tags": ["action"],
                    "author": "Jane"
                }
            ])
        );
    }

    #[test]
    fn test_rerun_is_identical() {
        let root = TempDir::new().unwrap();
        write(&root, "games/pacman/index.html", "");
        write(&root, "games/galaga/galaga.html", "");
        write(&root, "games/galaga/game.json", r#"{"tags": ["shooter", "arcade"]}"#);

        let service = service(&root);
        let first = service.process().unwrap();
        let first_content = fs::read(&first.path).unwrap();
        let second = service.process().unwrap();

        assert_eq!(first, second);
        assert_eq!(first_content, fs::read(&second.path).unwrap());
    }

    #[test]
    fn test_removed_game_dropped_on_rebuild() {
        let root = TempDir::new().unwrap();
        write(&root, "games/pacman/index.html", "");
        write(&root, "games/frogger/index.html", "");

        let service = service(&root);
        assert_eq!(service.process().unwrap().entries, 2);

        fs::remove_dir_all(root.path().join("games/frogger")).unwrap();
        let report = service.process().unwrap();
        assert_eq!(report.entries, 1);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report.path).unwrap()).unwrap();
        assert_eq!(written[0]["id"], "pacman");
    }

    #[test]
    fn test_empty_games_dir_writes_empty_array() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("games")).unwrap();

        let report = service(&root).process().unwrap();
        assert_eq!(report.entries, 0);
        assert_eq!(fs::read_to_string(&report.path).unwrap(), "[]");
    }

    #[test]
    fn test_missing_games_dir_fails_without_writing() {
        let root = TempDir::new().unwrap();

        assert!(service(&root).process().is_err());
        assert!(!root.path().join("manifest.json").exists());
    }
}
