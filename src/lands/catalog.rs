//! Built-in land definitions.

use crate::core::Element;

use super::land::{Land, LandEffect, LandId};

/// Steppes, the default terrain. Units standing here can't dodge.
#[must_use]
pub fn steppes() -> Land {
    Land::new(
        LandId::new(0),
        "Steppes",
        Element::Neutral,
        LandEffect::SuppressDodge,
    )
}

/// Bramble Snare, a trap. Roots the first unit that steps in until
/// the next turn starts, then retires.
#[must_use]
pub fn bramble_snare() -> Land {
    Land::new(
        LandId::new(1),
        "Bramble Snare",
        Element::Shadows,
        LandEffect::Ensnare,
    )
    .transient()
}

/// Vital Springs heals a unit 1 HP when it enters.
#[must_use]
pub fn vital_springs() -> Land {
    Land::new(
        LandId::new(2),
        "Vital Springs",
        Element::Sylvester,
        LandEffect::HealOnEnter { amount: 1 },
    )
}

/// The terrain a destroyed or retired land reverts to.
#[must_use]
pub fn default_terrain() -> Land {
    steppes()
}

/// Pool used for initial board generation. Traps and special terrain
/// are excluded; they only enter play through cards.
#[must_use]
pub fn terrain_pool() -> Vec<Land> {
    vec![steppes()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_ids() {
        let ids = [steppes().id, bramble_snare().id, vital_springs().id];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_pool_excludes_transient() {
        assert!(terrain_pool().iter().all(|land| !land.transient));
    }

    #[test]
    fn test_default_terrain_is_permanent() {
        assert!(!default_terrain().transient);
    }
}
