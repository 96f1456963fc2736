//! The persisted settings record and its value-level invariants.
//!
//! `OverlaySettings` is the single aggregate of every user-configurable
//! preference for the preview overlay.  It is a plain serde struct: the
//! document format on disk is derived entirely from these field definitions,
//! and the `#[serde(default = ...)]` annotations make a partially-populated
//! document load cleanly: any key missing from the file takes its declared
//! default instead of failing the whole parse.  This is what keeps old config
//! files working when a newer version adds fields.
//!
//! The record itself performs no I/O.  Loading, saving, and edit routing live
//! in [`crate::storage`] and [`crate::ui_bridge`].

use serde::{Deserialize, Serialize};

use super::schema::FIELDS;

/// Horizontal anchor for the overlay panel on screen.
///
/// Persisted as the upper-case variant name (`"LEFT"`, `"CENTER"`,
/// `"RIGHT"`), matching the historical on-disk spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HorizontalAlignment {
    Left,
    Center,
    #[default]
    Right,
}

impl HorizontalAlignment {
    /// Every variant, in display order.
    pub const ALL: [HorizontalAlignment; 3] = [
        HorizontalAlignment::Left,
        HorizontalAlignment::Center,
        HorizontalAlignment::Right,
    ];

    /// The persisted / display spelling of this variant.
    pub fn name(self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "LEFT",
            HorizontalAlignment::Center => "CENTER",
            HorizontalAlignment::Right => "RIGHT",
        }
    }
}

/// The complete set of user preferences for the preview overlay.
///
/// Field keys in the persisted JSON document are the camelCase renames
/// (`xOffset`, `enableCorkianAmplifiers`, ...).  Unknown keys in a document
/// are ignored on load, so a hand-edited or newer-version file never trips
/// the defaults fallback just for carrying extra data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySettings {
    /// Master switch for the overlay.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Render scale of the overlay panel, clamped to `[0.1, 1.0]`.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Which side of the screen the panel anchors to.
    #[serde(default)]
    pub horizontal_alignment: HorizontalAlignment,
    /// Horizontal pixel offset from the anchor, clamped to `[-500, 500]`.
    #[serde(default)]
    pub x_offset: i32,
    /// Vertical pixel offset from the anchor, clamped to `[-500, 500]`.
    #[serde(default)]
    pub y_offset: i32,
    /// Show a chat message when the overlay is toggled with the hotkey.
    #[serde(default = "default_true")]
    pub show_toggle_message: bool,
    /// Preview weapons.
    #[serde(default = "default_true")]
    pub enable_weapons: bool,
    /// Preview armor pieces.
    #[serde(default)]
    pub enable_armor: bool,
    /// Preview accessories (rings, bracelets, necklaces).
    #[serde(default)]
    pub enable_accessories: bool,
    /// Preview unidentified items.
    #[serde(default)]
    pub enable_unidentified: bool,
    /// Preview Corkian amplifiers.
    #[serde(default)]
    pub enable_corkian_amplifiers: bool,
}

fn default_true() -> bool {
    true
}
fn default_scale() -> f32 {
    0.4
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            scale: default_scale(),
            horizontal_alignment: HorizontalAlignment::default(),
            x_offset: 0,
            y_offset: 0,
            show_toggle_message: default_true(),
            enable_weapons: default_true(),
            enable_armor: false,
            enable_accessories: false,
            enable_unidentified: false,
            enable_corkian_amplifiers: false,
        }
    }
}

impl OverlaySettings {
    /// Clamps every bounded field into its declared range.
    ///
    /// Walks the schema registry rather than naming fields, so a new bounded
    /// field is covered as soon as it is registered in
    /// [`FIELDS`](crate::domain::schema::FIELDS).  Applied uniformly at load
    /// time and (via the store) at write time; out-of-range values are a
    /// silently-corrected condition, never an error.
    #[must_use]
    pub fn sanitize(mut self) -> Self {
        for field in FIELDS {
            if let Some(bounds) = &field.bounds {
                let current = field.id.read(&self);
                let clamped = bounds.clamp(current);
                if clamped != current {
                    field.id.write(&mut self, clamped);
                }
            }
        }
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
