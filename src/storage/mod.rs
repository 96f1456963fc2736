//! Storage infrastructure: settings document persistence.
//!
//! This module is the only part of the crate that touches the file system.
//! The `document` sub-module handles the JSON round-trip; `store` owns the
//! in-memory record and decides when the document is (re)written:
//!
//! - Loading the document from the host-provided path at startup.
//! - Providing defaults when the file does not exist yet (first run) or is
//!   corrupt.
//! - Rewriting the whole document synchronously after every edit.
//!
//! Everything above this module deals in the typed record only; the file
//! format could change without touching the schema or the editor bridge.

pub mod document;
pub mod store;
