//! Upgrades: the catalog records and the player's held slots.

mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Most upgrades the player can have at once.
pub const MAX_PLAYER_UPGRADES: usize = 5;

/// Identifier of an upgrade; always equals its index in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct UpgradeId(pub usize);

impl std::fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable upgrade, described entirely as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upgrade {
    #[serde(default)]
    pub id: UpgradeId,

    pub name: String,

    /// Shop/HUD text; `[X]` and `[N]` stand for the two magnitudes.
    pub description: String,

    /// Primary tuning value, the `[X]` in the description.
    #[serde(default)]
    pub magnitude: f32,

    /// Secondary tuning value, the `[N]` in the description.
    #[serde(default)]
    pub secondary_magnitude: f32,

    /// Current level, starts at 0.
    #[serde(default)]
    pub level: u32,

    /// Highest level this upgrade can reach.
    #[serde(default = "default_max_level")]
    pub max_level: u32,

    /// Path of the icon asset shown in shops and the HUD.
    #[serde(default)]
    pub icon: String,

    /// Open-ended data for effects this crate does not model.
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

fn default_max_level() -> u32 {
    5
}

impl Upgrade {
    /// Create an upgrade with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: UpgradeId::default(),
            name: name.into(),
            description: description.into(),
            magnitude: 0.0,
            secondary_magnitude: 0.0,
            level: 0,
            max_level: default_max_level(),
            icon: String::new(),
            extra: HashMap::new(),
        }
    }

    /// Set the primary magnitude.
    pub fn with_magnitude(mut self, magnitude: f32) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Set the secondary magnitude.
    pub fn with_secondary_magnitude(mut self, magnitude: f32) -> Self {
        self.secondary_magnitude = magnitude;
        self
    }

    /// Set the highest reachable level.
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Set the icon asset path.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }
}

/// Outcome of trying to add an upgrade to the player's slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOutcome {
    /// Placed into a free slot.
    Added,
    /// Already held; nothing changes.
    AlreadyHeld,
    /// All slots taken; the host must ask the player to replace one.
    Full,
}

/// The player's held-upgrade slots.
///
/// One owned collection; slot index is the only identity the HUD needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loadout {
    held: Vec<UpgradeId>,
    capacity: usize,
}

impl Default for Loadout {
    fn default() -> Self {
        Self::new(MAX_PLAYER_UPGRADES)
    }
}

impl Loadout {
    /// Create an empty loadout with the given number of slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            held: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Try to add an upgrade to a free slot.
    pub fn add(&mut self, id: UpgradeId) -> AddOutcome {
        if self.held.contains(&id) {
            // TODO: level up the held copy instead of ignoring the duplicate.
            return AddOutcome::AlreadyHeld;
        }
        if self.held.len() >= self.capacity {
            return AddOutcome::Full;
        }
        self.held.push(id);
        AddOutcome::Added
    }

    /// Swap the upgrade in `slot` for `id`, returning the evicted one.
    /// Returns `None` when the slot does not exist.
    pub fn replace(&mut self, slot: usize, id: UpgradeId) -> Option<UpgradeId> {
        let old = *self.held.get(slot)?;
        self.held[slot] = id;
        Some(old)
    }

    pub fn contains(&self, id: UpgradeId) -> bool {
        self.held.contains(&id)
    }

    /// Currently held upgrades, in slot order.
    pub fn held(&self) -> &[UpgradeId] {
        &self.held
    }

    pub fn is_full(&self) -> bool {
        self.held.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
