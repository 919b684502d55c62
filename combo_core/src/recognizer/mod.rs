//! Recognizer - the kill window and the matcher that reads it.
//!
//! Matching is longest-first with truncate-and-retry fallback:
//! 1. Encode the whole window into a pattern code
//! 2. Look the code up among the patterns of the window's length
//! 3. On a miss, drop the code's last digit and retry one length shorter
//! 4. Stop after length 1; matching nothing is a normal outcome

mod history;

pub use history::*;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::pattern::{PatternCode, PatternTable};

/// A recognized pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPattern {
    pub name: String,

    /// How many window entries the matching code still covered; the HUD
    /// highlights that many slots.
    pub length: usize,
}

/// Matches the current history against a shared pattern table.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    table: Arc<PatternTable>,
}

impl PatternMatcher {
    /// Create a matcher over a table shared between sessions.
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self { table }
    }

    /// The table this matcher reads.
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Evaluate the current history; `None` means no registered pattern
    /// matched, which is not an error.
    ///
    /// The fallback truncates the full-window code digit by digit rather
    /// than re-encoding a shorter slice, so ranks assigned by the full
    /// window carry into every shorter lookup.
    pub fn evaluate(&self, history: &ElementHistory) -> Option<MatchedPattern> {
        let window = history.snapshot();
        let mut code = PatternCode::encode(window);
        log::trace!("window of {} kills encodes to {}", window.len(), code);

        for length in (1..=window.len()).rev() {
            for entry in self.table.bucket(length) {
                if entry.code == code {
                    return Some(MatchedPattern {
                        name: entry.name.clone(),
                        length,
                    });
                }
            }
            code = code.truncated();
        }
        None
    }
}
