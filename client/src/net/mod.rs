//! Data sources for the front-end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client makes no network calls. `fixtures` bundles the static JSON data sets
//! into the WASM binary and `types` defines their record shapes. Pages read
//! these once and keep edits in memory.

pub mod fixtures;
pub mod types;
