//! The upgrade catalog and shop stock generation.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Upgrade, UpgradeId};

/// Errors raised while loading a catalog from its declarative source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse upgrade catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Declarative form of a catalog, as read from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSpec {
    pub upgrades: Vec<Upgrade>,
}

/// The full list of upgrades available in a run.
///
/// Ids always equal the upgrade's index in the catalog; they are
/// reassigned on build so a declarative source never has to state them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeCatalog {
    upgrades: Vec<Upgrade>,
}

impl UpgradeCatalog {
    /// Build a catalog, reassigning ids to match index order.
    pub fn new(mut upgrades: Vec<Upgrade>) -> Self {
        for (index, upgrade) in upgrades.iter_mut().enumerate() {
            upgrade.id = UpgradeId(index);
        }
        Self { upgrades }
    }

    /// Parse a catalog from its TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let spec: CatalogSpec = toml::from_str(source)?;
        Ok(Self::new(spec.upgrades))
    }

    /// The ten upgrades the game ships with.
    pub fn standard() -> Self {
        const BLANK_ICON: &str = "Assets/Sprites/Upgrades/upgradeBlank.png";
        Self::new(vec![
            Upgrade::new("Precision", "Deal [X] extra damage on every hit")
                .with_magnitude(10.0)
                .with_icon("Assets/Sprites/Upgrades/dmgUpgrade.png"),
            Upgrade::new("Hardware Acceleration", "Increase dash range by [X]%")
                .with_magnitude(10.0)
                .with_icon(BLANK_ICON),
            Upgrade::new(
                "Two Birds",
                "Your attacks hit twice, second attack does [X]% and also applies on-hit effects",
            )
            .with_magnitude(10.0)
            .with_icon(BLANK_ICON),
            Upgrade::new("Fortified", "Enemy projectiles deal [X]% less damage")
                .with_magnitude(10.0)
                .with_icon(BLANK_ICON),
            Upgrade::new("Boot Up", "Gain a [X]% speed boost for the first [N] sec of each room")
                .with_magnitude(10.0)
                .with_secondary_magnitude(15.0)
                .with_icon(BLANK_ICON),
            Upgrade::new(
                "Spice of Life",
                "Gain [X]% additional damage for each unique combo used this run",
            )
            .with_magnitude(1.0)
            .with_icon(BLANK_ICON),
            Upgrade::new("git restore", "When entering a new non-shop room, restore [X]% of max health")
                .with_magnitude(10.0)
                .with_icon(BLANK_ICON),
            Upgrade::new("Bloodthirsty", "Gain [X] health upon killing [N] enemies")
                .with_magnitude(1.0)
                .with_secondary_magnitude(5.0)
                .with_icon(BLANK_ICON),
            Upgrade::new("Greedy", "Gain [X]% more gold from enemy kills")
                .with_magnitude(5.0)
                .with_icon(BLANK_ICON),
            Upgrade::new("Thorns", "When you take damage, deal [X]% to the enemy that hit you")
                .with_magnitude(10.0)
                .with_icon(BLANK_ICON),
        ])
    }

    pub fn get(&self, id: UpgradeId) -> Option<&Upgrade> {
        self.upgrades.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.upgrades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upgrades.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Upgrade> {
        self.upgrades.iter()
    }

    /// Pick `count` distinct upgrades to stock a shop room with.
    ///
    /// When the catalog is not strictly larger than the shop, the first
    /// `count` upgrades are offered in catalog order instead of at random.
    pub fn shop_offer<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<UpgradeId> {
        if self.upgrades.len() <= count {
            log::warn!(
                "catalog holds {} upgrades for {} shop slots; offering in catalog order",
                self.upgrades.len(),
                count
            );
            return self.upgrades.iter().take(count).map(|u| u.id).collect();
        }
        self.upgrades
            .choose_multiple(rng, count)
            .map(|u| u.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_standard_catalog() {
        let catalog = UpgradeCatalog::standard();
        assert_eq!(catalog.len(), 10);

        // Ids always equal catalog index.
        for (index, upgrade) in catalog.iter().enumerate() {
            assert_eq!(upgrade.id, UpgradeId(index));
        }

        let precision = catalog.get(UpgradeId(0)).unwrap();
        assert_eq!(precision.name, "Precision");
        assert_eq!(precision.magnitude, 10.0);
    }

    #[test]
    fn test_catalog_from_toml() {
        let source = r#"
            [[upgrades]]
            name = "Precision"
            description = "Deal [X] extra damage on every hit"
            magnitude = 10.0

            [[upgrades]]
            name = "Greedy"
            description = "Gain [X]% more gold from enemy kills"
            magnitude = 5.0
            max_level = 3
        "#;

        let catalog = UpgradeCatalog::from_toml_str(source).unwrap();
        assert_eq!(catalog.len(), 2);

        let greedy = catalog.get(UpgradeId(1)).unwrap();
        assert_eq!(greedy.name, "Greedy");
        assert_eq!(greedy.max_level, 3);
        assert_eq!(greedy.level, 0);
    }

    #[test]
    fn test_catalog_toml_parse_error() {
        let result = UpgradeCatalog::from_toml_str("upgrades = 12");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_shop_offer_is_distinct() {
        let catalog = UpgradeCatalog::standard();
        let mut rng = StdRng::seed_from_u64(7);

        let offer = catalog.shop_offer(3, &mut rng);
        assert_eq!(offer.len(), 3);

        let distinct: HashSet<_> = offer.iter().collect();
        assert_eq!(distinct.len(), 3);
        assert!(offer.iter().all(|id| catalog.get(*id).is_some()));
    }

    #[test]
    fn test_shop_offer_is_deterministic_under_seed() {
        let catalog = UpgradeCatalog::standard();

        let first = catalog.shop_offer(3, &mut StdRng::seed_from_u64(42));
        let second = catalog.shop_offer(3, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_small_catalog_offers_in_order() {
        let catalog = UpgradeCatalog::new(vec![
            Upgrade::new("A", "first"),
            Upgrade::new("B", "second"),
        ]);
        let mut rng = StdRng::seed_from_u64(0);

        let offer = catalog.shop_offer(3, &mut rng);
        assert_eq!(offer, vec![UpgradeId(0), UpgradeId(1)]);
    }
}
