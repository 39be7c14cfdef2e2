//! Enumeration types for the AETK entity model.

use core::fmt;

// ---------------------------------------------------------------------------
// NPC disposition
// ---------------------------------------------------------------------------

/// Disposition of a non-player character toward the player.
///
/// Persisted as a 1-based ordinal. The mapping is total and injective in
/// both directions: every variant has exactly one ordinal, and
/// [`NpcState::from_ordinal`] rejects anything outside `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NpcState {
    /// Attacks the player on sight. Ordinal 1.
    Hostile,
    /// Ignores the player. Ordinal 2.
    Neutral,
    /// Helps the player. Ordinal 3.
    Friendly,
}

impl NpcState {
    /// Every state, in ordinal order.
    pub const ALL: [Self; 3] = [Self::Hostile, Self::Neutral, Self::Friendly];

    /// The persisted ordinal of this state.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Hostile => 1,
            Self::Neutral => 2,
            Self::Friendly => 3,
        }
    }

    /// Look up a state by its persisted ordinal.
    ///
    /// Returns `None` for any ordinal that does not name a state.
    pub const fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            1 => Some(Self::Hostile),
            2 => Some(Self::Neutral),
            3 => Some(Self::Friendly),
            _ => None,
        }
    }

    /// Upper-case display name (`HOSTILE`, `NEUTRAL`, `FRIENDLY`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hostile => "HOSTILE",
            Self::Neutral => "NEUTRAL",
            Self::Friendly => "FRIENDLY",
        }
    }
}

impl fmt::Display for NpcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_round_trip() {
        for state in NpcState::ALL {
            assert_eq!(NpcState::from_ordinal(i64::from(state.ordinal())), Some(state));
        }
    }

    #[test]
    fn hostile_is_ordinal_one() {
        assert_eq!(NpcState::Hostile.ordinal(), 1);
        assert_eq!(NpcState::Friendly.ordinal(), 3);
    }

    #[test]
    fn unknown_ordinals_rejected() {
        assert_eq!(NpcState::from_ordinal(0), None);
        assert_eq!(NpcState::from_ordinal(4), None);
        assert_eq!(NpcState::from_ordinal(-1), None);
    }

    #[test]
    fn display_uses_upper_case_name() {
        assert_eq!(NpcState::Neutral.to_string(), "NEUTRAL");
    }
}
