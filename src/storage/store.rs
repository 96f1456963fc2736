//! The settings store: sole owner of the process-wide settings record.
//!
//! All reads and writes go through [`SettingsStore`].  Opening a store is
//! total: whatever is (or is not) on disk, the caller always gets a fully
//! populated, in-bounds record, and a valid document exists at the path
//! afterwards.  Every edit is an immediate durability point: the whole
//! record is rewritten synchronously on each [`SettingsStore::set`], so a
//! crash right after an edit never loses it.  There is deliberately no
//! batching or dirty-flag machinery; the record is a handful of scalars and
//! the rewrite is one small file.
//!
//! The store takes `&mut self` for writes and holds no interior locking:
//! access is expected to happen on the host's single logical UI thread.
//! Callers that need to share it across threads wrap it in a mutex, the
//! same way the host wraps its other session state.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::domain::schema::{SettingId, SettingValue};
use crate::domain::settings::OverlaySettings;
use crate::storage::document::{self, DeserializeError, PersistError};

/// Owns the settings record and the path it persists to.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: OverlaySettings,
}

impl SettingsStore {
    /// Opens the store at `path`, loading the persisted record or falling
    /// back to defaults.
    ///
    /// Never fails:
    /// - no file → defaults, persisted immediately (first run);
    /// - unreadable or malformed file → defaults, the file is overwritten
    ///   with a valid defaulted document;
    /// - out-of-range values in a well-formed file → clamped into range and
    ///   the normalized document re-persisted.
    ///
    /// A persist failure here is logged and swallowed; the in-memory record
    /// is complete and usable regardless.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let settings = match document::read_file(&path) {
            Ok(loaded) => {
                let sanitized = loaded.clone().sanitize();
                if sanitized != loaded {
                    warn!(
                        "settings at {} contained out-of-range values; clamped into range",
                        path.display()
                    );
                    persist_or_log(&path, &sanitized);
                } else {
                    info!("loaded settings from {}", path.display());
                }
                sanitized
            }
            Err(DeserializeError::NotFound { .. }) => {
                info!("no settings file at {}; writing defaults", path.display());
                let defaults = OverlaySettings::default();
                persist_or_log(&path, &defaults);
                defaults
            }
            Err(e) => {
                warn!("failed to load settings: {e}; falling back to defaults");
                let defaults = OverlaySettings::default();
                persist_or_log(&path, &defaults);
                defaults
            }
        };

        Self { path, settings }
    }

    /// The path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Typed read access to the whole record.
    ///
    /// Feature gates read directly off the returned reference
    /// (`store.settings().enable_weapons` etc.).
    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    /// Returns the current value of one field.  Total: an initialized store
    /// always holds a complete record.
    pub fn get(&self, id: SettingId) -> SettingValue {
        id.read(&self.settings)
    }

    /// Updates one field and synchronously persists the whole record.
    ///
    /// Out-of-range numeric values are clamped into the field's declared
    /// bounds, not rejected; the editor should already constrain input, but
    /// the store is the final bounds authority.  A value whose kind does not
    /// match the field is logged and ignored entirely.
    ///
    /// # Errors
    ///
    /// [`PersistError`] when the write to disk fails.  The in-memory record
    /// keeps the new value even then: the edit stays visible to every
    /// subsequent [`get`](Self::get) in this process, and only durability
    /// across restarts is at risk.
    pub fn set(&mut self, id: SettingId, value: SettingValue) -> Result<(), PersistError> {
        let value = match &id.spec().bounds {
            Some(bounds) => bounds.clamp(value),
            None => value,
        };

        if !id.write(&mut self.settings, value) {
            warn!(
                "ignoring {:?} edit: {} value does not match the field's kind",
                id,
                value.kind()
            );
            return Ok(());
        }

        document::write_file(&self.path, &self.settings).map_err(|e| {
            error!("failed to persist settings after {id:?} edit: {e}");
            e
        })
    }
}

fn persist_or_log(path: &Path, settings: &OverlaySettings) {
    if let Err(e) = document::write_file(path, settings) {
        error!("failed to persist settings: {e}");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("overlay_settings_test_{}", Uuid::new_v4()))
            .join("settings.json")
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_open_on_missing_path_yields_defaults_and_creates_file() {
        // Arrange
        let path = temp_path();

        // Act
        let store = SettingsStore::open(&path);

        // Assert
        assert_eq!(*store.settings(), OverlaySettings::default());
        assert!(path.exists(), "open must leave a valid document on disk");

        cleanup(&path);
    }

    #[test]
    fn test_set_clamps_and_get_reflects_the_clamped_value() {
        // Arrange
        let path = temp_path();
        let mut store = SettingsStore::open(&path);

        // Act
        store.set(SettingId::Scale, SettingValue::Float(5.0)).unwrap();
        store.set(SettingId::XOffset, SettingValue::Int(-9999)).unwrap();

        // Assert
        assert_eq!(store.get(SettingId::Scale), SettingValue::Float(1.0));
        assert_eq!(store.get(SettingId::XOffset), SettingValue::Int(-500));

        cleanup(&path);
    }

    #[test]
    fn test_set_with_mismatched_kind_is_ignored() {
        let path = temp_path();
        let mut store = SettingsStore::open(&path);

        store.set(SettingId::Scale, SettingValue::Bool(false)).unwrap();

        assert_eq!(store.get(SettingId::Scale), SettingValue::Float(0.4));

        cleanup(&path);
    }

    #[test]
    fn test_set_persist_failure_keeps_in_memory_value() {
        // Arrange: the parent "directory" is a plain file, so every write fails
        let dir = std::env::temp_dir().join(format!("overlay_settings_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let path = blocker.join("settings.json");

        let mut store = SettingsStore::open(&path);

        // Act
        let result = store.set(SettingId::Enabled, SettingValue::Bool(false));

        // Assert: the write failed but the edit is still visible in-process
        assert!(result.is_err());
        assert_eq!(store.get(SettingId::Enabled), SettingValue::Bool(false));

        std::fs::remove_dir_all(&dir).ok();
    }
}
