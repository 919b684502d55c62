//! Game event types for host<->core communication.

use game_rules::{ElementType, EnemyId, RoomKind};
use serde::{Deserialize, Serialize};

/// Events the surrounding game reports to the combo engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An enemy died; its element enters the kill window.
    EnemySlain {
        enemy: EnemyId,
        element: ElementType,
    },

    /// The player moved to a new room; the kill window resets.
    RoomEntered { room: RoomKind },

    /// The run is over.
    RunEnded,
}

impl GameEvent {
    /// Shorthand for the event every kill handler raises.
    pub fn enemy_slain(enemy: EnemyId, element: ElementType) -> Self {
        GameEvent::EnemySlain { enemy, element }
    }

    /// The element this event contributes to the window, if any.
    pub fn element(&self) -> Option<ElementType> {
        match self {
            GameEvent::EnemySlain { element, .. } => Some(*element),
            _ => None,
        }
    }
}
