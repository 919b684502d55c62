//! Per-run session state the host mutates as the player progresses.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::Health;
use crate::upgrades::Loadout;

/// The two room flavors a run alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoomKind {
    #[default]
    Combat,
    Shop,
}

/// Everything a single run tracks about the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub health: Health,
    pub loadout: Loadout,
    pub room: RoomKind,
    pub gold: u32,

    /// Names of distinct combos used this run ("Spice of Life" scaling).
    combos_used: HashSet<String>,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunState {
    /// Start a fresh run.
    pub fn new() -> Self {
        Self {
            health: Health::default(),
            loadout: Loadout::default(),
            room: RoomKind::Combat,
            gold: 0,
            combos_used: HashSet::new(),
        }
    }

    /// Move to a new room.
    pub fn enter_room(&mut self, room: RoomKind) {
        self.room = room;
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold += amount;
    }

    /// Record a recognized combo; true when it is the first use this run.
    pub fn record_combo(&mut self, name: impl Into<String>) -> bool {
        self.combos_used.insert(name.into())
    }

    /// Number of distinct combos used so far.
    pub fn unique_combo_count(&self) -> usize {
        self.combos_used.len()
    }
}
