//! Pattern codes - recency-rank digit encoding of a kill window.

use game_rules::ElementType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ranks are decimal digits, so a window may never hold more than nine
/// distinct elements.
pub const MAX_WINDOW: usize = 9;

/// Numeric signature of a kill window.
///
/// Scanning the window from newest to oldest, each distinct element is
/// ranked 1, 2, ... in order of first appearance; repeated elements reuse
/// their rank. The element at distance `d` from the newest kill contributes
/// its rank at the `10^d` digit, so the newest kill always occupies the
/// least-significant digit and always reads 1. Two windows with the same
/// repetition shape produce the same code regardless of which elements
/// appear: `[Earth, Earth]` and `[Fire, Fire]` are both 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PatternCode(pub u32);

impl PatternCode {
    /// Encode a window, ordered oldest-to-newest. The empty window encodes
    /// to 0.
    pub fn encode(window: &[ElementType]) -> Self {
        debug_assert!(window.len() <= MAX_WINDOW);

        let mut ranks: HashMap<ElementType, u32> = HashMap::new();
        let mut next_rank = 1;
        let mut code = 0;
        let mut place = 1;
        for element in window.iter().rev() {
            let rank = *ranks.entry(*element).or_insert_with(|| {
                let assigned = next_rank;
                next_rank += 1;
                assigned
            });
            code += rank * place;
            place *= 10;
        }
        PatternCode(code)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Drop the least-significant digit; the matcher's fallback step.
    pub fn truncated(&self) -> Self {
        PatternCode(self.0 / 10)
    }

    /// Number of decimal digits; 0 encodes the empty window and has none.
    pub fn digit_count(&self) -> usize {
        let mut rest = self.0;
        let mut count = 0;
        while rest > 0 {
            rest /= 10;
            count += 1;
        }
        count
    }

    /// Whether some window could actually produce this code.
    ///
    /// Reading digits from least to most significant, the first must be 1
    /// and each may exceed the highest rank seen so far by at most one.
    pub fn is_producible(&self) -> bool {
        if self.0 == 0 {
            return false;
        }
        let mut rest = self.0;
        let mut highest_rank = 0;
        while rest > 0 {
            let digit = rest % 10;
            if digit == 0 || digit > highest_rank + 1 {
                return false;
            }
            highest_rank = highest_rank.max(digit);
            rest /= 10;
        }
        true
    }
}

impl std::fmt::Display for PatternCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
