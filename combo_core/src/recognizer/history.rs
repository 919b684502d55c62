//! The kill-history window.

use game_rules::ElementType;
use serde::{Deserialize, Serialize};

/// Bounded, ordered buffer of the elements of the most recent kills.
///
/// Insertion appends at the end; once the window exceeds capacity the front
/// (oldest) entry is evicted. Eviction is strictly first-in first-out:
/// insertion order alone decides what leaves, never which element it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementHistory {
    entries: Vec<ElementType>,
    window: usize,
}

impl ElementHistory {
    /// Create an empty history holding at most `window` entries.
    pub fn new(window: usize) -> Self {
        Self {
            entries: Vec::with_capacity(window + 1),
            window,
        }
    }

    /// Append a kill's element, evicting the oldest entry when over
    /// capacity. Always succeeds.
    pub fn push(&mut self, element: ElementType) {
        self.entries.push(element);
        while self.entries.len() > self.window {
            self.entries.remove(0);
        }
    }

    /// Current contents, oldest to newest.
    pub fn snapshot(&self) -> &[ElementType] {
        &self.entries
    }

    /// Empty the window (session reset).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The capacity this history was created with.
    pub fn window(&self) -> usize {
        self.window
    }
}
