//! Error types for the aetk-model crate.
//!
//! Decoding a record is the only fallible model operation. Every failure
//! names the offending field so the caller can report it without
//! re-inspecting the record.

/// Errors that can occur while decoding a record into an entity.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A required key is absent from the record.
    #[error("missing field: {field}")]
    MissingField {
        /// Name of the absent key.
        field: String,
    },

    /// An NPC state ordinal does not name a known state.
    #[error("invalid NPC state ordinal: {ordinal}")]
    InvalidState {
        /// The ordinal found in the record.
        ordinal: i64,
    },

    /// A key holds a value of the wrong type or out of range.
    #[error("field {field} has the wrong type: expected {expected}")]
    WrongType {
        /// Name of the offending key.
        field: String,
        /// Description of the accepted values.
        expected: &'static str,
    },

    /// The `kind` tag names no known variant.
    #[error("unknown {entity} kind: {kind}")]
    UnknownKind {
        /// Which entity was being decoded (`item`, `character`, or `record`).
        entity: &'static str,
        /// The tag found in the record.
        kind: String,
    },

    /// A value that should be a mapping is some other JSON value.
    #[error("expected a mapping for {context}")]
    NotAMapping {
        /// What was being decoded.
        context: &'static str,
    },

    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
