//! Pure domain types: the settings record and its static schema.
//!
//! Nothing in this module touches the file system or knows about any UI
//! toolkit.  The schema registry in [`schema`] is the shared vocabulary the
//! storage and editor layers are built on.

pub mod schema;
pub mod settings;
