//! Entity definitions for the enemies a run spawns.

mod enemy;
mod health;

pub use enemy::*;
pub use health::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for enemies within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub Uuid);

impl EnemyId {
    /// Create a new random enemy ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty enemy ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for EnemyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
