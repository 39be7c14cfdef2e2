//! Saturating vital mechanics for characters.
//!
//! Health and stamina never leave `0..=max`. Additions clamp at the
//! maximum and removals clamp at zero, so no amount passed here can
//! overflow or underflow a stat. Each operation returns the new value.

use aetk_types::Character;

/// Restore `amount` health, clamped to `max_health`.
pub fn add_health(character: &mut Character, amount: u32) -> u32 {
    let target = character.health().saturating_add(amount);
    let stored = character.set_health(target);
    if stored < target {
        tracing::trace!(
            character = character.name.as_str(),
            requested = target,
            stored,
            "health clamped to maximum"
        );
    }
    stored
}

/// Restore `amount` stamina, clamped to `max_stamina`.
pub fn add_stamina(character: &mut Character, amount: u32) -> u32 {
    let target = character.stamina().saturating_add(amount);
    let stored = character.set_stamina(target);
    if stored < target {
        tracing::trace!(
            character = character.name.as_str(),
            requested = target,
            stored,
            "stamina clamped to maximum"
        );
    }
    stored
}

/// Remove `amount` health. Health cannot drop below 0.
pub fn remove_health(character: &mut Character, amount: u32) -> u32 {
    let stored = character.set_health(character.health().saturating_sub(amount));
    if stored == 0 {
        tracing::debug!(character = character.name.as_str(), "health depleted");
    }
    stored
}

/// Remove `amount` stamina. Stamina cannot drop below 0.
pub fn remove_stamina(character: &mut Character, amount: u32) -> u32 {
    character.set_stamina(character.stamina().saturating_sub(amount))
}
