//! Editor bridge: projects the schema into UI-agnostic field descriptors.
//!
//! This is the only coupling point between the settings crate and whatever
//! renders the settings screen.  The host asks for
//! [`field_descriptors`] when the editor opens, renders one control per
//! descriptor based on its [`Control`] kind, and routes every user edit back
//! through [`apply_edit`] with the descriptor's `id`.  Neither this module
//! nor the store ever references the host's rendering machinery.
//!
//! Descriptors are plain serializable data, so a host on the far side of an
//! IPC or command bridge can consume them as JSON the same way an in-process
//! host consumes them as structs.
//!
//! The projection is stateless and recomputed on request.  `current` is a
//! snapshot: hosts should re-read values through
//! [`SettingsStore::get`](crate::storage::store::SettingsStore::get) after
//! an edit rather than caching descriptor values.

use serde::Serialize;

use crate::domain::schema::{Bounds, FieldSpec, SettingId, SettingValue, FIELDS};
use crate::domain::settings::HorizontalAlignment;
use crate::storage::document::PersistError;
use crate::storage::store::SettingsStore;

/// How the host should render one editable field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Control {
    /// Boolean on/off switch.
    Toggle,
    /// Bounded floating-point input (slider or spinner).
    FloatRange { min: f32, max: f32 },
    /// Bounded integer input.
    IntRange { min: i32, max: i32 },
    /// Fixed-variant dropdown; `variants` lists the display spellings.
    Select { variants: Vec<&'static str> },
}

/// One editable field, described without reference to any UI toolkit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field identity; the host passes this back to [`apply_edit`].
    pub id: SettingId,
    /// Opaque translation key for the control's label.
    pub label_key: &'static str,
    /// Which control kind to render, with its bounds metadata.
    pub control: Control,
    /// Value at the time the descriptor list was built.
    pub current: SettingValue,
    /// Declared default, for a "reset" affordance.
    pub default: SettingValue,
}

/// Builds the ordered descriptor list for every settings field.
///
/// One descriptor per schema entry, in schema order.
pub fn field_descriptors(store: &SettingsStore) -> Vec<FieldDescriptor> {
    FIELDS
        .iter()
        .map(|field| FieldDescriptor {
            id: field.id,
            label_key: field.label_key,
            control: control_for(field),
            current: store.get(field.id),
            default: field.default,
        })
        .collect()
}

/// The single generic change callback: routes a host edit into the store.
///
/// Replaces one bespoke closure per field: the descriptor's `id` is the
/// only per-field state an edit needs.  Clamping and persistence happen in
/// [`SettingsStore::set`]; by the time this returns `Ok`, the edit is on
/// disk and visible to every in-process read.
///
/// # Errors
///
/// Propagates the store's [`PersistError`]; the edit is still applied
/// in memory. Hosts typically surface this as a non-blocking warning.
pub fn apply_edit(
    store: &mut SettingsStore,
    id: SettingId,
    value: SettingValue,
) -> Result<(), PersistError> {
    store.set(id, value)
}

fn control_for(field: &FieldSpec) -> Control {
    match (field.default, field.bounds) {
        (SettingValue::Bool(_), _) => Control::Toggle,
        (SettingValue::Alignment(_), _) => Control::Select {
            variants: HorizontalAlignment::ALL.iter().map(|a| a.name()).collect(),
        },
        (SettingValue::Float(_), Some(Bounds::Float { min, max })) => {
            Control::FloatRange { min, max }
        }
        (SettingValue::Int(_), Some(Bounds::Int { min, max })) => Control::IntRange { min, max },
        // Unreachable for the registered schema: every numeric field
        // declares bounds of its own kind (pinned by a registry test).  A
        // future field that omits them renders as an unconstrained input.
        (SettingValue::Float(_), _) => Control::FloatRange {
            min: f32::MIN,
            max: f32::MAX,
        },
        (SettingValue::Int(_), _) => Control::IntRange {
            min: i32::MIN,
            max: i32::MAX,
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_store() -> (SettingsStore, PathBuf) {
        let path = std::env::temp_dir()
            .join(format!("overlay_settings_test_{}", Uuid::new_v4()))
            .join("settings.json");
        (SettingsStore::open(&path), path)
    }

    fn cleanup(path: &PathBuf) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_descriptor_list_covers_the_schema_in_order() {
        // Arrange
        let (store, path) = temp_store();

        // Act
        let descriptors = field_descriptors(&store);

        // Assert
        assert_eq!(descriptors.len(), FIELDS.len());
        for (descriptor, field) in descriptors.iter().zip(FIELDS) {
            assert_eq!(descriptor.id, field.id);
            assert_eq!(descriptor.label_key, field.label_key);
            assert_eq!(descriptor.default, field.default);
        }

        cleanup(&path);
    }

    #[test]
    fn test_controls_carry_declared_bounds() {
        let (store, path) = temp_store();
        let descriptors = field_descriptors(&store);

        let scale = descriptors
            .iter()
            .find(|d| d.id == SettingId::Scale)
            .unwrap();
        assert_eq!(scale.control, Control::FloatRange { min: 0.1, max: 1.0 });

        let x_offset = descriptors
            .iter()
            .find(|d| d.id == SettingId::XOffset)
            .unwrap();
        assert_eq!(x_offset.control, Control::IntRange { min: -500, max: 500 });

        let alignment = descriptors
            .iter()
            .find(|d| d.id == SettingId::HorizontalAlignment)
            .unwrap();
        assert_eq!(
            alignment.control,
            Control::Select {
                variants: vec!["LEFT", "CENTER", "RIGHT"]
            }
        );

        cleanup(&path);
    }

    #[test]
    fn test_toggle_fields_render_as_toggles() {
        let (store, path) = temp_store();
        let toggles = field_descriptors(&store)
            .into_iter()
            .filter(|d| d.control == Control::Toggle)
            .count();
        // enabled, showToggleMessage, and the five category switches
        assert_eq!(toggles, 7);
        cleanup(&path);
    }

    #[test]
    fn test_apply_edit_clamps_and_is_visible_through_get() {
        // Arrange
        let (mut store, path) = temp_store();

        // Act
        apply_edit(&mut store, SettingId::Scale, SettingValue::Float(5.0)).unwrap();

        // Assert: clamped, and a rebuilt descriptor list observes the edit
        assert_eq!(store.get(SettingId::Scale), SettingValue::Float(1.0));
        let descriptors = field_descriptors(&store);
        let scale = descriptors
            .iter()
            .find(|d| d.id == SettingId::Scale)
            .unwrap();
        assert_eq!(scale.current, SettingValue::Float(1.0));

        cleanup(&path);
    }

    #[test]
    fn test_descriptors_serialize_for_bridged_hosts() {
        let (store, path) = temp_store();
        let descriptors = field_descriptors(&store);

        let json = serde_json::to_string(&descriptors).expect("descriptors must serialize");
        assert!(json.contains("\"id\":\"xOffset\""));
        assert!(json.contains("\"kind\":\"toggle\""));
        assert!(json.contains("\"labelKey\":\"option.scale\""));

        cleanup(&path);
    }
}
