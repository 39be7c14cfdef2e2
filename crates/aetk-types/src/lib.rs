//! Shared data types for the AETK toolkit.
//!
//! This crate holds the plain records of the entity model: items, the
//! inventory that collects them, and the characters that own an inventory.
//! It performs no I/O and no serialization; the record codec lives in
//! `aetk-model`.
//!
//! # Modules
//!
//! - [`enums`] -- Enumeration types ([`NpcState`])
//! - [`item`] -- Items and their closed set of kinds ([`Item`], [`ItemKind`])
//! - [`inventory`] -- Ordered item collection ([`Inventory`])
//! - [`character`] -- Characters with clamped vitals ([`Character`], [`CharacterKind`])

pub mod character;
pub mod enums;
pub mod inventory;
pub mod item;

// Re-export all public types at crate root for convenience.
pub use character::{Character, CharacterKind};
pub use enums::NpcState;
pub use inventory::Inventory;
pub use item::{Item, ItemKind};
