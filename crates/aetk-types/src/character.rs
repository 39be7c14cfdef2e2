//! Characters and their vitals.
//!
//! A [`Character`] carries health and stamina, each bounded above by a
//! maximum. The current values are private so that `0 <= health <=
//! max_health` and `0 <= stamina <= max_stamina` hold after every
//! operation: construction and the setters clamp, and unsigned storage
//! provides the floor.

use core::fmt;

use crate::enums::NpcState;
use crate::inventory::Inventory;

/// The kind of a character, with the fields specific to that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    /// A character with no role-specific data.
    Basic,
    /// A non-player character.
    Npc {
        /// Disposition toward the player.
        state: NpcState,
    },
    /// The player character.
    Player {
        /// Experience level.
        level: u32,
    },
}

impl CharacterKind {
    /// The persisted tag naming this kind.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Basic => "character",
            Self::Npc { .. } => "npc",
            Self::Player { .. } => "player",
        }
    }
}

/// A character with vitals and an exclusively owned inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Character {
    /// Display name.
    pub name: String,
    health: u32,
    max_health: u32,
    stamina: u32,
    max_stamina: u32,
    /// Items carried by this character.
    pub inventory: Inventory,
    /// Kind-specific data.
    pub kind: CharacterKind,
}

impl Character {
    /// Create a basic character.
    ///
    /// `health` and `stamina` are clamped to their maximums.
    pub fn new(
        name: impl Into<String>,
        health: u32,
        max_health: u32,
        stamina: u32,
        max_stamina: u32,
        inventory: Inventory,
    ) -> Self {
        Self {
            name: name.into(),
            health: health.min(max_health),
            max_health,
            stamina: stamina.min(max_stamina),
            max_stamina,
            inventory,
            kind: CharacterKind::Basic,
        }
    }

    /// Replace the kind, keeping everything else.
    #[must_use]
    pub const fn with_kind(mut self, kind: CharacterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Current health.
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health.
    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Current stamina.
    pub const fn stamina(&self) -> u32 {
        self.stamina
    }

    /// Maximum stamina.
    pub const fn max_stamina(&self) -> u32 {
        self.max_stamina
    }

    /// Set health, clamped to `max_health`. Returns the stored value.
    pub fn set_health(&mut self, value: u32) -> u32 {
        self.health = value.min(self.max_health);
        self.health
    }

    /// Set stamina, clamped to `max_stamina`. Returns the stored value.
    pub fn set_stamina(&mut self, value: u32) -> u32 {
        self.stamina = value.min(self.max_stamina);
        self.stamina
    }

    /// Change the health ceiling, pulling current health down if needed.
    pub fn set_max_health(&mut self, max_health: u32) {
        self.max_health = max_health;
        self.health = self.health.min(max_health);
    }

    /// Change the stamina ceiling, pulling current stamina down if needed.
    pub fn set_max_stamina(&mut self, max_stamina: u32) {
        self.max_stamina = max_stamina;
        self.stamina = self.stamina.min(max_stamina);
    }

    /// Whether health has reached zero.
    pub const fn is_depleted(&self) -> bool {
        self.health == 0
    }

    /// NPC disposition, if this character is an NPC.
    pub const fn state(&self) -> Option<NpcState> {
        match self.kind {
            CharacterKind::Npc { state } => Some(state),
            _ => None,
        }
    }

    /// Player level, if this character is the player.
    pub const fn level(&self) -> Option<u32> {
        match self.kind {
            CharacterKind::Player { level } => Some(level),
            _ => None,
        }
    }

    /// Multi-line summary including the inventory.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{}HP, {}/{}STAMINA\n{}",
            self.name,
            self.health,
            self.max_health,
            self.stamina,
            self.max_stamina,
            self.inventory
        )?;
        match self.kind {
            CharacterKind::Basic => Ok(()),
            CharacterKind::Npc { state } => write!(f, "\nState: {state}"),
            CharacterKind::Player { level } => write!(f, "\nLevel: {level}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn hero() -> Character {
        Character::new("Hero", 50, 100, 20, 30, Inventory::new())
    }

    #[test]
    fn construction_clamps_to_maximums() {
        let c = Character::new("Over", 150, 100, 40, 30, Inventory::new());
        assert_eq!(c.health(), 100);
        assert_eq!(c.stamina(), 30);
    }

    #[test]
    fn setters_clamp() {
        let mut c = hero();
        assert_eq!(c.set_health(500), 100);
        assert_eq!(c.set_stamina(5), 5);
    }

    #[test]
    fn lowering_maximum_pulls_current_down() {
        let mut c = hero();
        c.set_max_health(10);
        assert_eq!(c.health(), 10);
        c.set_max_stamina(100);
        assert_eq!(c.stamina(), 20);
    }

    #[test]
    fn depleted_at_zero_health() {
        let mut c = hero();
        assert!(!c.is_depleted());
        c.set_health(0);
        assert!(c.is_depleted());
    }

    #[test]
    fn describe_basic() {
        let mut c = hero();
        c.inventory.add(Item::tradeable("Sword", "Sharp", 10));
        assert_eq!(c.describe(), "Hero: 50/100HP, 20/30STAMINA\nSword: Sharp - 10");
    }

    #[test]
    fn describe_npc_and_player() {
        let npc = hero().with_kind(CharacterKind::Npc {
            state: NpcState::Hostile,
        });
        assert_eq!(npc.describe(), "Hero: 50/100HP, 20/30STAMINA\n\nState: HOSTILE");
        assert_eq!(npc.state(), Some(NpcState::Hostile));
        assert_eq!(npc.level(), None);

        let player = hero().with_kind(CharacterKind::Player { level: 7 });
        assert_eq!(player.describe(), "Hero: 50/100HP, 20/30STAMINA\n\nLevel: 7");
        assert_eq!(player.level(), Some(7));
    }
}
