//! Record encoding and decoding for items, inventories, and characters.
//!
//! A record is a JSON object ([`Record`]). Each entity has one encoder and
//! one decoder, and each decoder switches over the `kind` tag written by
//! its encoder:
//!
//! | Entity    | Tags                                  | Kind-specific keys |
//! |-----------|---------------------------------------|--------------------|
//! | item      | `item`, `tradeable`, `untradeable`    | `price`, `rarity`  |
//! | character | `character`, `npc`, `player`          | `state`, `level`   |
//!
//! Records without a `kind` tag are decoded with the legacy field-presence
//! rules: an item with `price` is tradeable and any other item is
//! untradeable; a character with `state` is an NPC, one with `level` is a
//! player, and any other is a basic character.

use aetk_types::{Character, CharacterKind, Inventory, Item, ItemKind, NpcState};
use serde_json::{Map, Value};

use crate::error::ModelError;

/// A serialized entity: string keys mapped to JSON values.
pub type Record = Map<String, Value>;

/// Key holding the variant tag.
pub const KIND_KEY: &str = "kind";

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Encode an item as a record.
///
/// The base keys are `kind`, `name`, and `description`; tradeable items add
/// `price` and untradeable items add `rarity`.
pub fn encode_item(item: &Item) -> Record {
    let mut record = Record::new();
    record.insert(KIND_KEY.into(), Value::from(item.kind.tag()));
    record.insert("name".into(), Value::from(item.name.as_str()));
    record.insert("description".into(), Value::from(item.description.as_str()));
    match item.kind {
        ItemKind::Basic => {}
        ItemKind::Tradeable { price } => {
            record.insert("price".into(), Value::from(price));
        }
        ItemKind::Untradeable { rarity } => {
            record.insert("rarity".into(), Value::from(rarity));
        }
    }
    record
}

/// Decode an item from a record.
///
/// # Errors
///
/// Returns [`ModelError::MissingField`] when `name`, `description`, or the
/// kind-specific key is absent, [`ModelError::WrongType`] when a value has
/// the wrong type, and [`ModelError::UnknownKind`] for an unrecognized tag.
pub fn decode_item(record: &Record) -> Result<Item, ModelError> {
    let name = string_field(record, "name")?;
    let description = string_field(record, "description")?;

    let kind = match optional_string_field(record, KIND_KEY)? {
        Some("item") => ItemKind::Basic,
        Some("tradeable") => ItemKind::Tradeable {
            price: u32_field(record, "price")?,
        },
        Some("untradeable") => ItemKind::Untradeable {
            rarity: i32_field(record, "rarity")?,
        },
        Some(other) => {
            return Err(ModelError::UnknownKind {
                entity: "item",
                kind: other.to_owned(),
            });
        }
        None => legacy_item_kind(record)?,
    };

    Ok(Item {
        name,
        description,
        kind,
    })
}

/// Pick an item kind by field presence: `price` means tradeable.
fn legacy_item_kind(record: &Record) -> Result<ItemKind, ModelError> {
    if record.contains_key("price") {
        tracing::debug!("untagged item record with price, decoding as tradeable");
        Ok(ItemKind::Tradeable {
            price: u32_field(record, "price")?,
        })
    } else {
        tracing::debug!("untagged item record without price, decoding as untradeable");
        Ok(ItemKind::Untradeable {
            rarity: i32_field(record, "rarity")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// Encode an inventory as `{"items": [...]}`, preserving order.
pub fn encode_inventory(inventory: &Inventory) -> Record {
    let items = inventory
        .iter()
        .map(|item| Value::Object(encode_item(item)))
        .collect();
    let mut record = Record::new();
    record.insert("items".into(), Value::Array(items));
    record
}

/// Decode an inventory, dispatching each entry through [`decode_item`].
///
/// # Errors
///
/// Returns [`ModelError::MissingField`] when `items` is absent or any entry
/// lacks a required key, and [`ModelError::NotAMapping`] when an entry is
/// not an object.
pub fn decode_inventory(record: &Record) -> Result<Inventory, ModelError> {
    let entries = field(record, "items")?
        .as_array()
        .ok_or_else(|| wrong_type("items", "array of item records"))?;

    let mut inventory = Inventory::new();
    for entry in entries {
        let item_record = entry
            .as_object()
            .ok_or(ModelError::NotAMapping { context: "item" })?;
        inventory.add(decode_item(item_record)?);
    }
    Ok(inventory)
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// Encode a character as a record.
///
/// The base keys are `kind`, `name`, `health`, `max_health`, `stamina`,
/// `max_stamina`, and `inventory`. NPCs add `state` as its ordinal; players
/// add `level`.
pub fn encode_character(character: &Character) -> Record {
    let mut record = Record::new();
    record.insert(KIND_KEY.into(), Value::from(character.kind.tag()));
    record.insert("name".into(), Value::from(character.name.as_str()));
    record.insert("health".into(), Value::from(character.health()));
    record.insert("max_health".into(), Value::from(character.max_health()));
    record.insert("stamina".into(), Value::from(character.stamina()));
    record.insert("max_stamina".into(), Value::from(character.max_stamina()));
    record.insert(
        "inventory".into(),
        Value::Object(encode_inventory(&character.inventory)),
    );
    match character.kind {
        CharacterKind::Basic => {}
        CharacterKind::Npc { state } => {
            record.insert("state".into(), Value::from(state.ordinal()));
        }
        CharacterKind::Player { level } => {
            record.insert("level".into(), Value::from(level));
        }
    }
    record
}

/// Decode a character from a record.
///
/// A current stat above its maximum is clamped down and logged.
///
/// # Errors
///
/// Returns [`ModelError::MissingField`] for an absent key,
/// [`ModelError::InvalidState`] for an NPC state ordinal outside `1..=3`,
/// [`ModelError::WrongType`] for a mistyped value, and
/// [`ModelError::UnknownKind`] for an unrecognized tag.
pub fn decode_character(record: &Record) -> Result<Character, ModelError> {
    let name = string_field(record, "name")?;
    let health = u32_field(record, "health")?;
    let max_health = u32_field(record, "max_health")?;
    let stamina = u32_field(record, "stamina")?;
    let max_stamina = u32_field(record, "max_stamina")?;
    let inventory_record = field(record, "inventory")?
        .as_object()
        .ok_or(ModelError::NotAMapping {
            context: "inventory",
        })?;
    let inventory = decode_inventory(inventory_record)?;

    let kind = match optional_string_field(record, KIND_KEY)? {
        Some("character") => CharacterKind::Basic,
        Some("npc") => CharacterKind::Npc {
            state: state_field(record)?,
        },
        Some("player") => CharacterKind::Player {
            level: u32_field(record, "level")?,
        },
        Some(other) => {
            return Err(ModelError::UnknownKind {
                entity: "character",
                kind: other.to_owned(),
            });
        }
        None => legacy_character_kind(record)?,
    };

    if health > max_health || stamina > max_stamina {
        tracing::warn!(
            character = name.as_str(),
            health,
            max_health,
            stamina,
            max_stamina,
            "character record exceeds its maximums, clamping"
        );
    }

    Ok(Character::new(name, health, max_health, stamina, max_stamina, inventory).with_kind(kind))
}

/// Pick a character kind by field presence: `state` means NPC, `level`
/// means player.
fn legacy_character_kind(record: &Record) -> Result<CharacterKind, ModelError> {
    if record.contains_key("state") {
        Ok(CharacterKind::Npc {
            state: state_field(record)?,
        })
    } else if record.contains_key("level") {
        Ok(CharacterKind::Player {
            level: u32_field(record, "level")?,
        })
    } else {
        Ok(CharacterKind::Basic)
    }
}

/// Read the NPC `state` ordinal and map it to an [`NpcState`].
fn state_field(record: &Record) -> Result<NpcState, ModelError> {
    let ordinal = field(record, "state")?
        .as_i64()
        .ok_or_else(|| wrong_type("state", "integer state ordinal"))?;
    NpcState::from_ordinal(ordinal).ok_or(ModelError::InvalidState { ordinal })
}

// ---------------------------------------------------------------------------
// JSON text and values
// ---------------------------------------------------------------------------

/// Decode a character from a JSON value that must be an object.
///
/// # Errors
///
/// Returns [`ModelError::NotAMapping`] for a non-object value, otherwise
/// whatever [`decode_character`] returns.
pub fn decode_character_value(value: &Value) -> Result<Character, ModelError> {
    let record = value.as_object().ok_or(ModelError::NotAMapping {
        context: "character",
    })?;
    decode_character(record)
}

/// Parse JSON text and decode the character it holds.
///
/// # Errors
///
/// Returns [`ModelError::Json`] for malformed text, otherwise whatever
/// [`decode_character_value`] returns.
pub fn character_from_json(text: &str) -> Result<Character, ModelError> {
    let value: Value = serde_json::from_str(text)?;
    decode_character_value(&value)
}

/// Encode a character as pretty-printed JSON text.
///
/// # Errors
///
/// Returns [`ModelError::Json`] if serialization fails.
pub fn character_to_json(character: &Character) -> Result<String, ModelError> {
    Ok(serde_json::to_string_pretty(&encode_character(character))?)
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn field<'a>(record: &'a Record, name: &str) -> Result<&'a Value, ModelError> {
    record.get(name).ok_or_else(|| ModelError::MissingField {
        field: name.to_owned(),
    })
}

fn wrong_type(name: &str, expected: &'static str) -> ModelError {
    ModelError::WrongType {
        field: name.to_owned(),
        expected,
    }
}

fn string_field(record: &Record, name: &str) -> Result<String, ModelError> {
    field(record, name)?
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| wrong_type(name, "string"))
}

fn optional_string_field<'a>(record: &'a Record, name: &str) -> Result<Option<&'a str>, ModelError> {
    match record.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| wrong_type(name, "string")),
    }
}

fn u32_field(record: &Record, name: &str) -> Result<u32, ModelError> {
    field(record, name)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| wrong_type(name, "unsigned 32-bit integer"))
}

fn i32_field(record: &Record, name: &str) -> Result<i32, ModelError> {
    field(record, name)?
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| wrong_type(name, "signed 32-bit integer"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn encode_tradeable_extends_base_keys() {
        let rec = encode_item(&Item::tradeable("Sword", "Sharp", 10));
        assert_eq!(
            Value::Object(rec),
            json!({"kind": "tradeable", "name": "Sword", "description": "Sharp", "price": 10})
        );
    }

    #[test]
    fn encode_basic_item_has_no_extra_keys() {
        let rec = encode_item(&Item::new("Rock", "A rock"));
        assert_eq!(rec.len(), 3);
        assert_eq!(rec.get("kind"), Some(&json!("item")));
    }

    #[test]
    fn tag_wins_over_field_presence() {
        // A tagged untradeable item that also carries a stray price key.
        let rec = record(json!({
            "kind": "untradeable", "name": "Amulet", "description": "Old",
            "rarity": 3, "price": 99
        }));
        let item = decode_item(&rec).unwrap();
        assert_eq!(item.kind, ItemKind::Untradeable { rarity: 3 });
    }

    #[test]
    fn tagged_tradeable_with_zero_price() {
        let rec = record(json!({"kind": "tradeable", "name": "Pebble", "description": "Free", "price": 0}));
        assert_eq!(decode_item(&rec).unwrap().price(), Some(0));
    }

    #[test]
    fn legacy_price_means_tradeable() {
        let rec = record(json!({"name": "Sword", "description": "Sharp", "price": 10}));
        assert_eq!(decode_item(&rec).unwrap().kind, ItemKind::Tradeable { price: 10 });
    }

    #[test]
    fn legacy_rarity_means_untradeable() {
        let rec = record(json!({"name": "Amulet", "description": "Old", "rarity": 3}));
        assert_eq!(decode_item(&rec).unwrap().kind, ItemKind::Untradeable { rarity: 3 });
    }

    #[test]
    fn legacy_record_without_either_key_needs_rarity() {
        let rec = record(json!({"name": "Rock", "description": "A rock"}));
        assert!(matches!(
            decode_item(&rec),
            Err(ModelError::MissingField { field }) if field == "rarity"
        ));
    }

    #[test]
    fn missing_name_is_reported() {
        let rec = record(json!({"kind": "item", "description": "nameless"}));
        assert!(matches!(
            decode_item(&rec),
            Err(ModelError::MissingField { field }) if field == "name"
        ));
    }

    #[test]
    fn unknown_item_kind_rejected() {
        let rec = record(json!({"kind": "quest", "name": "Map", "description": "Torn"}));
        assert!(matches!(
            decode_item(&rec),
            Err(ModelError::UnknownKind { entity: "item", .. })
        ));
    }

    #[test]
    fn negative_price_is_wrong_type() {
        let rec = record(json!({"kind": "tradeable", "name": "Debt", "description": "Owed", "price": -5}));
        assert!(matches!(decode_item(&rec), Err(ModelError::WrongType { .. })));
    }

    #[test]
    fn inventory_requires_items_key() {
        let rec = record(json!({}));
        assert!(matches!(
            decode_inventory(&rec),
            Err(ModelError::MissingField { field }) if field == "items"
        ));
    }

    #[test]
    fn inventory_entry_must_be_mapping() {
        let rec = record(json!({"items": [42]}));
        assert!(matches!(
            decode_inventory(&rec),
            Err(ModelError::NotAMapping { context: "item" })
        ));
    }

    #[test]
    fn npc_state_stored_as_ordinal() {
        let npc = Character::new("Goblin", 10, 10, 5, 5, Inventory::new()).with_kind(
            CharacterKind::Npc {
                state: NpcState::Hostile,
            },
        );
        let rec = encode_character(&npc);
        assert_eq!(rec.get("state"), Some(&json!(1)));
        assert_eq!(rec.get("kind"), Some(&json!("npc")));
    }

    #[test]
    fn unknown_state_ordinal_rejected() {
        let rec = record(json!({
            "kind": "npc", "name": "Ghost", "health": 1, "max_health": 1,
            "stamina": 1, "max_stamina": 1, "inventory": {"items": []}, "state": 7
        }));
        assert!(matches!(
            decode_character(&rec),
            Err(ModelError::InvalidState { ordinal: 7 })
        ));
    }

    #[test]
    fn legacy_character_kinds() {
        let base = json!({
            "name": "X", "health": 1, "max_health": 2, "stamina": 1, "max_stamina": 2,
            "inventory": {"items": []}
        });

        let mut npc = record(base.clone());
        npc.insert("state".into(), json!(3));
        assert_eq!(decode_character(&npc).unwrap().state(), Some(NpcState::Friendly));

        let mut player = record(base.clone());
        player.insert("level".into(), json!(4));
        assert_eq!(decode_character(&player).unwrap().level(), Some(4));

        assert_eq!(decode_character(&record(base)).unwrap().kind, CharacterKind::Basic);
    }

    #[test]
    fn decode_clamps_stats_above_maximum() {
        let rec = record(json!({
            "kind": "character", "name": "Overfull", "health": 120, "max_health": 100,
            "stamina": 3, "max_stamina": 30, "inventory": {"items": []}
        }));
        let c = decode_character(&rec).unwrap();
        assert_eq!(c.health(), 100);
        assert_eq!(c.stamina(), 3);
    }

    #[test]
    fn inventory_must_be_mapping() {
        let rec = record(json!({
            "kind": "character", "name": "X", "health": 1, "max_health": 1,
            "stamina": 1, "max_stamina": 1, "inventory": []
        }));
        assert!(matches!(
            decode_character(&rec),
            Err(ModelError::NotAMapping { context: "inventory" })
        ));
    }

    #[test]
    fn json_text_round_trip() {
        let player = Character::new("Hero", 5, 10, 5, 10, Inventory::new())
            .with_kind(CharacterKind::Player { level: 2 });
        let text = character_to_json(&player).unwrap();
        assert_eq!(character_from_json(&text).unwrap(), player);
    }

    #[test]
    fn malformed_json_text() {
        assert!(matches!(character_from_json("{not json"), Err(ModelError::Json(_))));
        assert!(matches!(
            character_from_json("[1, 2]"),
            Err(ModelError::NotAMapping { context: "character" })
        ));
    }
}
