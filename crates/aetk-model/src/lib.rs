//! Logic layer for the AETK entity model.
//!
//! Everything here operates on the records from `aetk-types` without
//! touching the filesystem. It sits between the data types and the
//! `aetk` command-line tool.
//!
//! # Modules
//!
//! - [`codec`] -- Record encoding and decoding for items, inventories, and characters
//! - [`error`] -- Error types for record decoding ([`ModelError`])
//! - [`params`] -- Plugin parameter descriptions and the [`PluginConfig`] registry
//! - [`vitals`] -- Saturating health and stamina mutation

pub mod codec;
pub mod error;
pub mod params;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use codec::Record;
pub use error::ModelError;
pub use params::{ParamError, Parameter, ParameterKind, PluginConfig};
