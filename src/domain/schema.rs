//! Static schema of the settings record: field identities, defaults, bounds.
//!
//! This is the one place a new setting is registered.  [`FIELDS`] is a
//! stable, ordered table of field descriptors; both the settings editor (to
//! generate its controls) and the record's own sanitizer (to clamp bounded
//! fields) walk it instead of hard-coding field lists.  Adding a field means
//! adding the struct field, a [`SettingId`] variant with its two dispatch
//! arms, and one [`FIELDS`] entry; serialization and the store pick it up
//! with no changes of their own.

use serde::{Deserialize, Serialize};

use super::settings::{HorizontalAlignment, OverlaySettings};

/// Identifies one field of [`OverlaySettings`].
///
/// Serialized as the camelCase field key, the same spelling used in the
/// persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingId {
    Enabled,
    Scale,
    HorizontalAlignment,
    XOffset,
    YOffset,
    ShowToggleMessage,
    EnableWeapons,
    EnableArmor,
    EnableAccessories,
    EnableUnidentified,
    EnableCorkianAmplifiers,
}

/// A dynamically-typed field value.
///
/// Untagged on the wire: a bare `true`, `120`, `0.4`, or `"RIGHT"` in JSON.
/// Variant order matters for deserialization: integers must be tried before
/// floats so a bare `120` stays an `Int`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Alignment(HorizontalAlignment),
}

impl SettingValue {
    /// Short kind label for log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::Float(_) => "float",
            SettingValue::Alignment(_) => "alignment",
        }
    }
}

/// Valid range for a bounded numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Bounds {
    Float { min: f32, max: f32 },
    Int { min: i32, max: i32 },
}

impl Bounds {
    /// Clamps a value of the matching numeric kind into range; any other
    /// kind passes through unchanged.
    ///
    /// Every float that comes out of here is finite and in range.  NaN maps
    /// to the lower bound: `f32::clamp` would pass it through, and a NaN in
    /// the record serializes as `null`, which poisons the whole document on
    /// the next load.
    pub fn clamp(&self, value: SettingValue) -> SettingValue {
        match (self, value) {
            (Bounds::Float { min, max }, SettingValue::Float(v)) => {
                let v = if v.is_nan() { *min } else { v };
                SettingValue::Float(v.clamp(*min, *max))
            }
            (Bounds::Int { min, max }, SettingValue::Int(v)) => {
                SettingValue::Int(v.clamp(*min, *max))
            }
            (_, other) => other,
        }
    }
}

/// One entry of the schema registry.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field identity, used for dispatch and as the editor callback key.
    pub id: SettingId,
    /// Opaque translation key for the editor label.  This crate never
    /// resolves it; the host's localization layer does.
    pub label_key: &'static str,
    /// Declared default, applied on first run and on missing document keys.
    pub default: SettingValue,
    /// Valid range for bounded numeric fields.
    pub bounds: Option<Bounds>,
}

/// The ordered schema of every settings field.
///
/// Order here is the order the editor surface presents fields in.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: SettingId::Enabled,
        label_key: "option.enabled",
        default: SettingValue::Bool(true),
        bounds: None,
    },
    FieldSpec {
        id: SettingId::Scale,
        label_key: "option.scale",
        default: SettingValue::Float(0.4),
        bounds: Some(Bounds::Float { min: 0.1, max: 1.0 }),
    },
    FieldSpec {
        id: SettingId::HorizontalAlignment,
        label_key: "option.alignment",
        default: SettingValue::Alignment(HorizontalAlignment::Right),
        bounds: None,
    },
    FieldSpec {
        id: SettingId::XOffset,
        label_key: "option.x_offset",
        default: SettingValue::Int(0),
        bounds: Some(Bounds::Int { min: -500, max: 500 }),
    },
    FieldSpec {
        id: SettingId::YOffset,
        label_key: "option.y_offset",
        default: SettingValue::Int(0),
        bounds: Some(Bounds::Int { min: -500, max: 500 }),
    },
    FieldSpec {
        id: SettingId::ShowToggleMessage,
        label_key: "option.show_toggle_message",
        default: SettingValue::Bool(true),
        bounds: None,
    },
    FieldSpec {
        id: SettingId::EnableWeapons,
        label_key: "option.enable_weapons",
        default: SettingValue::Bool(true),
        bounds: None,
    },
    FieldSpec {
        id: SettingId::EnableArmor,
        label_key: "option.enable_armor",
        default: SettingValue::Bool(false),
        bounds: None,
    },
    FieldSpec {
        id: SettingId::EnableAccessories,
        label_key: "option.enable_accessories",
        default: SettingValue::Bool(false),
        bounds: None,
    },
    FieldSpec {
        id: SettingId::EnableUnidentified,
        label_key: "option.enable_unidentified",
        default: SettingValue::Bool(false),
        bounds: None,
    },
    FieldSpec {
        id: SettingId::EnableCorkianAmplifiers,
        label_key: "option.enable_corkian_amplifiers",
        default: SettingValue::Bool(false),
        bounds: None,
    },
];

impl SettingId {
    /// Looks up this field's registry entry.
    ///
    /// Every variant has exactly one [`FIELDS`] entry; the registry test
    /// below keeps the two in sync.
    pub fn spec(self) -> &'static FieldSpec {
        FIELDS
            .iter()
            .find(|f| f.id == self)
            .expect("every SettingId is registered in FIELDS")
    }

    /// Reads this field's current value out of the record.
    pub fn read(self, settings: &OverlaySettings) -> SettingValue {
        match self {
            SettingId::Enabled => SettingValue::Bool(settings.enabled),
            SettingId::Scale => SettingValue::Float(settings.scale),
            SettingId::HorizontalAlignment => {
                SettingValue::Alignment(settings.horizontal_alignment)
            }
            SettingId::XOffset => SettingValue::Int(settings.x_offset),
            SettingId::YOffset => SettingValue::Int(settings.y_offset),
            SettingId::ShowToggleMessage => SettingValue::Bool(settings.show_toggle_message),
            SettingId::EnableWeapons => SettingValue::Bool(settings.enable_weapons),
            SettingId::EnableArmor => SettingValue::Bool(settings.enable_armor),
            SettingId::EnableAccessories => SettingValue::Bool(settings.enable_accessories),
            SettingId::EnableUnidentified => SettingValue::Bool(settings.enable_unidentified),
            SettingId::EnableCorkianAmplifiers => {
                SettingValue::Bool(settings.enable_corkian_amplifiers)
            }
        }
    }

    /// Writes `value` into this field of the record.
    ///
    /// Returns `false` without mutating anything when the value's kind does
    /// not match the field (e.g. a bool aimed at `scale`).  Edits routed
    /// through descriptors built by this crate always match.
    pub fn write(self, settings: &mut OverlaySettings, value: SettingValue) -> bool {
        match (self, value) {
            (SettingId::Enabled, SettingValue::Bool(v)) => settings.enabled = v,
            (SettingId::Scale, SettingValue::Float(v)) => settings.scale = v,
            (SettingId::HorizontalAlignment, SettingValue::Alignment(v)) => {
                settings.horizontal_alignment = v
            }
            (SettingId::XOffset, SettingValue::Int(v)) => settings.x_offset = v,
            (SettingId::YOffset, SettingValue::Int(v)) => settings.y_offset = v,
            (SettingId::ShowToggleMessage, SettingValue::Bool(v)) => {
                settings.show_toggle_message = v
            }
            (SettingId::EnableWeapons, SettingValue::Bool(v)) => settings.enable_weapons = v,
            (SettingId::EnableArmor, SettingValue::Bool(v)) => settings.enable_armor = v,
            (SettingId::EnableAccessories, SettingValue::Bool(v)) => {
                settings.enable_accessories = v
            }
            (SettingId::EnableUnidentified, SettingValue::Bool(v)) => {
                settings.enable_unidentified = v
            }
            (SettingId::EnableCorkianAmplifiers, SettingValue::Bool(v)) => {
                settings.enable_corkian_amplifiers = v
            }
            _ => return false,
        }
        true
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
