//! The per-session combo tracker hosts drive with game events.

use std::sync::Arc;

use game_rules::ElementType;

use crate::events::GameEvent;
use crate::pattern::PatternTable;
use crate::recognizer::{ElementHistory, MatchedPattern, PatternMatcher};

/// Tracks one session's kill window and reports recognized combos.
///
/// A host owns one tracker per session and drives it from a single place;
/// recording a kill and checking for a pattern is one transaction. The
/// pattern table behind it is immutable and shared between sessions.
#[derive(Debug, Clone)]
pub struct ComboTracker {
    history: ElementHistory,
    matcher: PatternMatcher,
}

impl ComboTracker {
    /// Create a tracker whose window length comes from the table.
    pub fn new(table: Arc<PatternTable>) -> Self {
        let history = ElementHistory::new(table.window());
        Self {
            history,
            matcher: PatternMatcher::new(table),
        }
    }

    /// Record a kill and report the pattern it completes, if any.
    pub fn report_event(&mut self, element: ElementType) -> Option<MatchedPattern> {
        self.history.push(element);
        let matched = self.matcher.evaluate(&self.history);
        if let Some(pattern) = &matched {
            log::debug!(
                "combo recognized: {} (covers {} kills)",
                pattern.name,
                pattern.length
            );
        }
        matched
    }

    /// Route a game event into the tracker.
    ///
    /// Kills feed the window; room transitions and run end reset it.
    pub fn handle_event(&mut self, event: &GameEvent) -> Option<MatchedPattern> {
        match event {
            GameEvent::EnemySlain { element, .. } => self.report_event(*element),
            GameEvent::RoomEntered { .. } | GameEvent::RunEnded => {
                self.reset();
                None
            }
        }
    }

    /// Clear the kill window at a session or room boundary.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Read-only view of the current window.
    pub fn history(&self) -> &ElementHistory {
        &self.history
    }
}
