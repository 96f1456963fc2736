//! JSON document round-trip for the settings record.
//!
//! The durable representation is one pretty-printed JSON object per store,
//! keyed by the camelCase field identifiers:
//!
//! ```json
//! {
//!   "enabled": true,
//!   "scale": 0.4,
//!   "horizontalAlignment": "RIGHT",
//!   "xOffset": 0,
//!   ...
//! }
//! ```
//!
//! Deserialization is all-or-nothing: any parse or shape error discards the
//! whole document and the store falls back to a fully-defaulted record.
//! There is no partial recovery of individual fields from a corrupt file.
//! Missing keys in a *well-formed* object are not an error, though; serde
//! fills those from the declared defaults.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::settings::OverlaySettings;

/// Error reading or parsing a persisted settings document.
///
/// Always recovered internally by the store (fall back to defaults); never
/// surfaced to the user.
#[derive(Debug, Error)]
pub enum DeserializeError {
    /// No document exists at the path (expected on first run).
    #[error("no settings file at {path}")]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("I/O error reading settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid settings document.
    #[error("malformed settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error persisting the settings record.
///
/// Non-fatal: the in-memory record keeps the new value regardless, so the
/// worst case is edits that do not survive a restart.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The document or its parent directory could not be written.
    #[error("I/O error writing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be serialized.  Unreachable for a well-formed
    /// in-memory record; kept so the serializer plumbing stays total.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Parses a settings document from JSON text.
pub fn from_json(text: &str) -> Result<OverlaySettings, DeserializeError> {
    Ok(serde_json::from_str(text)?)
}

/// Renders the record as pretty-printed JSON.
pub fn to_json(settings: &OverlaySettings) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(settings)?)
}

/// Reads and parses the document at `path`.
///
/// # Errors
///
/// [`DeserializeError::NotFound`] when no file exists (distinguished so the
/// store can log first-run quietly), [`DeserializeError::Io`] for other
/// read failures, [`DeserializeError::Parse`] for malformed content.
pub fn read_file(path: &Path) -> Result<OverlaySettings, DeserializeError> {
    match std::fs::read_to_string(path) {
        Ok(text) => from_json(&text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DeserializeError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(DeserializeError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Writes the record to `path` as a complete document.
///
/// Creates the parent directory chain if it does not exist yet.
///
/// # Errors
///
/// [`PersistError::Io`] for file-system failures,
/// [`PersistError::Serialize`] if serialization fails.
pub fn write_file(path: &Path, settings: &OverlaySettings) -> Result<(), PersistError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| PersistError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = to_json(settings)?;
    std::fs::write(path, content).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::HorizontalAlignment;

    #[test]
    fn test_round_trip_preserves_every_field() {
        // Arrange
        let settings = OverlaySettings {
            enabled: false,
            scale: 0.9,
            horizontal_alignment: HorizontalAlignment::Center,
            x_offset: -120,
            y_offset: 333,
            show_toggle_message: false,
            enable_weapons: false,
            enable_armor: true,
            enable_accessories: true,
            enable_unidentified: true,
            enable_corkian_amplifiers: true,
        };

        // Act
        let text = to_json(&settings).expect("serialize");
        let restored = from_json(&text).expect("deserialize");

        // Assert
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_document_uses_camel_case_keys() {
        let text = to_json(&OverlaySettings::default()).expect("serialize");
        assert!(text.contains("\"xOffset\""));
        assert!(text.contains("\"horizontalAlignment\""));
        assert!(text.contains("\"enableCorkianAmplifiers\""));
        assert!(text.contains("\"RIGHT\""));
    }

    #[test]
    fn test_partial_document_fills_missing_keys_with_defaults() {
        // Arrange: only two keys present
        let text = r#"{ "enabled": false, "xOffset": 250 }"#;

        // Act
        let settings = from_json(text).expect("partial document must parse");

        // Assert
        assert!(!settings.enabled);
        assert_eq!(settings.x_offset, 250);
        assert_eq!(settings.scale, 0.4);
        assert!(settings.enable_weapons);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let text = r#"{ "enabled": true, "someFutureKnob": 17 }"#;
        let settings = from_json(text).expect("unknown keys must not fail the parse");
        assert!(settings.enabled);
    }

    #[test]
    fn test_malformed_text_is_a_parse_error() {
        let result = from_json("{{{ not json");
        assert!(matches!(result, Err(DeserializeError::Parse(_))));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        // A JSON array is valid JSON but not a settings document
        let result = from_json("[1, 2, 3]");
        assert!(matches!(result, Err(DeserializeError::Parse(_))));
    }

    #[test]
    fn test_absent_file_is_not_found() {
        let result = read_file(Path::new("/nonexistent/overlay/settings.json"));
        assert!(matches!(result, Err(DeserializeError::NotFound { .. })));
    }

    #[test]
    fn test_invalid_alignment_variant_is_a_parse_error() {
        let text = r#"{ "horizontalAlignment": "DIAGONAL" }"#;
        let result = from_json(text);
        assert!(matches!(result, Err(DeserializeError::Parse(_))));
    }
}
