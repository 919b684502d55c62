//! Enemy definitions.

use serde::{Deserialize, Serialize};

use super::{EnemyId, Health};
use crate::mechanics::ElementType;

/// An enemy in a combat room. Its element is what a kill reports to the
/// combo engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub element: ElementType,
    pub health: Health,
}

impl Enemy {
    /// Spawn a new enemy of the given element.
    pub fn new(element: ElementType, max_health: f32) -> Self {
        Self {
            id: EnemyId::new(),
            element,
            health: Health::new(max_health),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_dead()
    }
}
