//! Record description for the `describe` subcommand.

use std::path::Path;

use aetk_model::{ModelError, Record, codec};
use serde_json::Value;

use crate::error::ToolsError;

/// Item tags.
const ITEM_KINDS: [&str; 3] = ["item", "tradeable", "untradeable"];

/// Character tags.
const CHARACTER_KINDS: [&str; 3] = ["character", "npc", "player"];

/// Which decoder a record goes to.
enum Entity {
    Item,
    Character,
}

/// Decode an item or character record and return its description.
///
/// Tagged records are routed by their `kind`. An untagged record is a
/// character when it carries `health`, otherwise an item.
///
/// # Errors
///
/// Returns [`ToolsError::Json`] for malformed JSON and
/// [`ToolsError::Model`] when the record does not decode or its `kind`
/// names neither an item nor a character.
pub fn describe_record(text: &str) -> Result<String, ToolsError> {
    let Value::Object(record) = serde_json::from_str::<Value>(text)? else {
        return Err(ModelError::NotAMapping { context: "record" }.into());
    };

    match entity(&record)? {
        Entity::Item => Ok(codec::decode_item(&record)?.describe()),
        Entity::Character => Ok(codec::decode_character(&record)?.describe()),
    }
}

/// Read a record file and describe it.
///
/// # Errors
///
/// Returns [`ToolsError::Io`] if the file cannot be read, otherwise
/// whatever [`describe_record`] returns.
pub fn describe_file(path: &Path) -> Result<String, ToolsError> {
    let text = std::fs::read_to_string(path).map_err(|e| ToolsError::io(path, e))?;
    describe_record(&text)
}

fn entity(record: &Record) -> Result<Entity, ModelError> {
    match record.get(codec::KIND_KEY) {
        None => Ok(if record.contains_key("health") {
            Entity::Character
        } else {
            Entity::Item
        }),
        Some(Value::String(kind)) if ITEM_KINDS.contains(&kind.as_str()) => Ok(Entity::Item),
        Some(Value::String(kind)) if CHARACTER_KINDS.contains(&kind.as_str()) => {
            Ok(Entity::Character)
        }
        Some(other) => Err(ModelError::UnknownKind {
            entity: "record",
            kind: other.as_str().map_or_else(|| other.to_string(), str::to_owned),
        }),
    }
}
