//! Items and their closed set of kinds.
//!
//! Every item shares a name and a description. What distinguishes a
//! tradeable item from an untradeable one is carried by an explicit
//! [`ItemKind`] rather than by which optional fields happen to be present.

use core::fmt;

/// The kind of an item, with the fields specific to that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A plain item with no market data.
    Basic,
    /// An item that can be bought and sold.
    Tradeable {
        /// Market price. Never negative.
        price: u32,
    },
    /// An item that cannot change hands.
    Untradeable {
        /// Rarity tier.
        rarity: i32,
    },
}

impl ItemKind {
    /// The persisted tag naming this kind.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Basic => "item",
            Self::Tradeable { .. } => "tradeable",
            Self::Untradeable { .. } => "untradeable",
        }
    }
}

/// A named item that can sit in an [`Inventory`](crate::Inventory).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Kind-specific data.
    pub kind: ItemKind,
}

impl Item {
    /// Create a plain item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Basic,
        }
    }

    /// Create a tradeable item with the given price.
    pub fn tradeable(name: impl Into<String>, description: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Tradeable { price },
        }
    }

    /// Create an untradeable item with the given rarity tier.
    pub fn untradeable(
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Untradeable { rarity },
        }
    }

    /// The price, if this item is tradeable.
    pub const fn price(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Tradeable { price } => Some(price),
            _ => None,
        }
    }

    /// The rarity tier, if this item is untradeable.
    pub const fn rarity(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Untradeable { rarity } => Some(rarity),
            _ => None,
        }
    }

    /// One-line human-readable rendering.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)?;
        match self.kind {
            ItemKind::Basic => Ok(()),
            ItemKind::Tradeable { price } => write!(f, " - {price}"),
            ItemKind::Untradeable { rarity } => write!(f, " - {rarity}"),
        }
    }
}
