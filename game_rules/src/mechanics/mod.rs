//! Game mechanics: the element system.

use serde::{Deserialize, Serialize};

/// The closed set of elements an enemy (and its death) can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Earth,
    Fire,
    Ice,
    Wind,
}

impl ElementType {
    /// All elements, in the order the game presents them.
    pub const ALL: [ElementType; 4] = [
        ElementType::Earth,
        ElementType::Fire,
        ElementType::Ice,
        ElementType::Wind,
    ];

    /// Short name used in logs and UI labels.
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::Earth => "Earth",
            ElementType::Fire => "Fire",
            ElementType::Ice => "Ice",
            ElementType::Wind => "Wind",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_element_names() {
        assert_eq!(ElementType::Earth.name(), "Earth");
        assert_eq!(ElementType::Wind.to_string(), "Wind");
    }

    #[test]
    fn test_all_elements_distinct() {
        let set: HashSet<_> = ElementType::ALL.iter().collect();
        assert_eq!(set.len(), ElementType::ALL.len());
    }
}
