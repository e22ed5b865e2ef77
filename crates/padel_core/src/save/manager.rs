use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, TrackerSave};

use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Default snapshot file name inside the app's data directory.
pub const SAVE_FILE_NAME: &str = "padel_tracker.save";

/// File-backed persistence for the tracker snapshot.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-save leaves the previous snapshot intact.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self { save_path: save_path.into() }
    }

    /// Manager for the default file name inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SAVE_FILE_NAME))
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Persist a snapshot.
    pub fn save(&self, save: &TrackerSave) -> Result<(), SaveError> {
        let bytes = serialize_and_compress(save)?;

        let tmp_path = self.save_path.with_extension("tmp");
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        rename(&tmp_path, &self.save_path)?;

        log::debug!("Saved tracker state to {}", self.save_path.display());
        Ok(())
    }

    /// Persist a snapshot, swallowing failures with a warning. Callers of
    /// the core operations do not await or depend on this.
    pub fn save_best_effort(&self, save: &TrackerSave) {
        if let Err(err) = self.save(save) {
            log::warn!("Best-effort save to {} failed: {}", self.save_path.display(), err);
        }
    }

    /// Load the snapshot from disk.
    pub fn load(&self) -> Result<TrackerSave, SaveError> {
        if !self.save_path.exists() {
            return Err(SaveError::FileNotFound { path: self.save_path.display().to_string() });
        }

        let mut bytes = Vec::new();
        File::open(&self.save_path)?.read_to_end(&mut bytes)?;
        let save = decompress_and_deserialize(&bytes)?;

        log::info!("Loaded tracker state from {}", self.save_path.display());
        Ok(save)
    }

    pub fn exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn delete(&self) -> Result<(), SaveError> {
        if self.save_path.exists() {
            remove_file(&self.save_path)?;
            log::info!("Deleted save file {}", self.save_path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{Player, Team};
    use crate::state::MatchStore;

    fn store_with_match() -> MatchStore {
        let mut store = MatchStore::new();
        store
            .create_match(
                [
                    Team::new("t1", [Player::new("p1", "Ana"), Player::new("p2", "Bea")]),
                    Team::new("t2", [Player::new("p3", "Carla"), Player::new("p4", "Dora")]),
                ],
                "Court 1",
                "Friendly",
            )
            .unwrap();
        store
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::in_dir(dir.path());

        let store = store_with_match();
        manager.save(&store.to_save()).unwrap();
        assert!(manager.exists());

        let loaded = manager.load().unwrap();
        let restored = MatchStore::from_save(&loaded);
        assert_eq!(restored.current_match(), store.current_match());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::in_dir(dir.path());

        let result = manager.load();
        assert!(matches!(result, Err(SaveError::FileNotFound { .. })));
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::in_dir(dir.path());

        manager.save(&TrackerSave::new()).unwrap();

        let store = store_with_match();
        manager.save(&store.to_save()).unwrap();

        let loaded = manager.load().unwrap();
        assert!(loaded.current_match.is_some());
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::in_dir(dir.path());

        manager.save(&TrackerSave::new()).unwrap();
        assert!(manager.exists());

        manager.delete().unwrap();
        assert!(!manager.exists());

        // Deleting again is fine.
        manager.delete().unwrap();
    }

    #[test]
    fn test_best_effort_save_never_panics() {
        let manager = SaveManager::new("/nonexistent-dir/padel.save");
        manager.save_best_effort(&TrackerSave::new());
    }
}
