//! # overlay-settings
//!
//! Persisted user preferences for the item preview overlay, plus a
//! schema-driven bridge that lets the host generate its settings editor
//! instead of hand-building one control per field.
//!
//! The crate has three layers:
//!
//! - **`domain`** – The typed settings record and its static schema: field
//!   identities, defaults, and bounds.  Pure data, no I/O, no UI.
//!
//! - **`storage`** – The JSON document round-trip and the [`SettingsStore`],
//!   which owns the one process-wide record.  Opening a store always
//!   succeeds: a missing or corrupt file falls back to defaults and a valid
//!   document is written back immediately.  Every edit synchronously
//!   rewrites the whole document, so the last edit is always on disk.
//!
//! - **`ui_bridge`** – The editor surface contract: an ordered list of
//!   [`FieldDescriptor`]s the host renders by control kind, and a single
//!   [`apply_edit`] callback that routes edits back into the store.
//!
//! # Typical host wiring
//!
//! ```no_run
//! use overlay_settings::{
//!     apply_edit, field_descriptors, SettingId, SettingValue, SettingsStore,
//! };
//!
//! let mut store = SettingsStore::open("config/preview_overlay.json");
//!
//! // Feature gates read straight off the record.
//! if store.settings().enabled && store.settings().enable_weapons {
//!     // render the weapon preview...
//! }
//!
//! // The settings screen renders one control per descriptor and routes
//! // every user interaction back through the single change callback.
//! for descriptor in field_descriptors(&store) {
//!     println!("{}: {:?}", descriptor.label_key, descriptor.control);
//! }
//! let _ = apply_edit(&mut store, SettingId::Scale, SettingValue::Float(0.8));
//! ```

pub mod domain;
pub mod storage;
pub mod ui_bridge;

// Re-export the most-used types at the crate root so callers can write
// `overlay_settings::SettingsStore` instead of the full module path.
pub use domain::schema::{Bounds, FieldSpec, SettingId, SettingValue, FIELDS};
pub use domain::settings::{HorizontalAlignment, OverlaySettings};
pub use storage::document::{DeserializeError, PersistError};
pub use storage::store::SettingsStore;
pub use ui_bridge::{apply_edit, field_descriptors, Control, FieldDescriptor};
