//! Card definitions: the static templates cards are played from.
//!
//! A definition is separate from anything live: hero and companion
//! cards spawn a `Unit`, land cards place a `Land`, spells and
//! artifacts apply an effect and are gone. Costs are elemental
//! resource requirements; heroes cost nothing (they enter play through
//! game setup, not resources).

use serde::{Deserialize, Serialize};

use crate::core::{CostList, Element, ResourceCost, Team};
use crate::lands::Land;
use crate::units::{Ability, AbilityEffect, Stats, Unit, UnitCategory};

/// Identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCategory {
    Hero,
    Companion,
    Spell,
    Artifact,
    Land,
}

/// Template a unit card spawns from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitProfile {
    pub name: String,
    pub category: UnitCategory,
    pub element: Element,
    pub stats: Stats,
    pub abilities: Vec<Ability>,
}

impl UnitProfile {
    /// Create a profile with no abilities.
    pub fn new(
        name: impl Into<String>,
        category: UnitCategory,
        element: Element,
        stats: Stats,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            element,
            stats,
            abilities: Vec::new(),
        }
    }

    /// Add an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Instantiate a fresh, unplaced unit for a team.
    #[must_use]
    pub fn spawn(&self, team: Team) -> Unit {
        let mut unit = Unit::new(
            self.name.clone(),
            self.category,
            self.element,
            team,
            self.stats,
        );
        for ability in &self.abilities {
            unit = unit.with_ability(ability.clone());
        }
        unit
    }
}

/// Category-specific payload of a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardKind {
    /// Spawns a unit when played.
    Unit(UnitProfile),
    /// Applies an effect to a target unit when played.
    Effect(AbilityEffect),
    /// Replaces a cell's terrain when played.
    Land(Land),
}

/// A static card template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub category: CardCategory,
    pub element: Element,
    /// Elemental cost to play; empty = free (heroes).
    pub cost: CostList,
    pub kind: CardKind,
}

impl CardDefinition {
    /// A hero card. Heroes have no cost.
    pub fn hero(id: CardId, profile: UnitProfile) -> Self {
        debug_assert!(profile.category == UnitCategory::Hero);
        Self {
            id,
            name: profile.name.clone(),
            category: CardCategory::Hero,
            element: profile.element,
            cost: CostList::new(),
            kind: CardKind::Unit(profile),
        }
    }

    /// A companion card.
    pub fn companion(id: CardId, profile: UnitProfile) -> Self {
        debug_assert!(profile.category == UnitCategory::Companion);
        Self {
            id,
            name: profile.name.clone(),
            category: CardCategory::Companion,
            element: profile.element,
            cost: CostList::new(),
            kind: CardKind::Unit(profile),
        }
    }

    /// A spell card.
    pub fn spell(id: CardId, name: impl Into<String>, element: Element, effect: AbilityEffect) -> Self {
        Self {
            id,
            name: name.into(),
            category: CardCategory::Spell,
            element,
            cost: CostList::new(),
            kind: CardKind::Effect(effect),
        }
    }

    /// An artifact card.
    pub fn artifact(
        id: CardId,
        name: impl Into<String>,
        element: Element,
        effect: AbilityEffect,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: CardCategory::Artifact,
            element,
            cost: CostList::new(),
            kind: CardKind::Effect(effect),
        }
    }

    /// A land card.
    pub fn land_card(id: CardId, land: Land) -> Self {
        Self {
            id,
            name: land.name.clone(),
            category: CardCategory::Land,
            element: land.element,
            cost: CostList::new(),
            kind: CardKind::Land(land),
        }
    }

    /// Add a cost entry (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, element: Element, amount: u32) -> Self {
        self.cost.push(ResourceCost::new(element, amount));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Team;

    fn ryuu_profile() -> UnitProfile {
        UnitProfile::new(
            "Ryuu",
            UnitCategory::Hero,
            Element::Primordial,
            Stats::hero(20, 2, 2, 2, 11),
        )
        .with_ability(Ability::new("heal", AbilityEffect::Heal { amount: 2 }))
    }

    #[test]
    fn test_hero_card_has_no_cost() {
        let card = CardDefinition::hero(CardId::new(0), ryuu_profile());
        assert_eq!(card.category, CardCategory::Hero);
        assert!(card.cost.is_empty());
    }

    #[test]
    fn test_companion_card_cost() {
        let profile = UnitProfile::new(
            "Moss Sentinel",
            UnitCategory::Companion,
            Element::Sylvester,
            Stats::companion(8, 2, 1, 2),
        );
        let card =
            CardDefinition::companion(CardId::new(1), profile).with_cost(Element::Sylvester, 2);

        assert_eq!(card.cost.len(), 1);
        assert_eq!(card.cost[0].amount, 2);
    }

    #[test]
    fn test_spawn_from_profile() {
        let unit = ryuu_profile().spawn(Team::new(0));

        assert_eq!(unit.name, "Ryuu");
        assert_eq!(unit.team, Team::new(0));
        assert_eq!(unit.pos(), None);
        assert!(unit.ability("heal").is_some());
    }

    #[test]
    fn test_spawned_units_are_independent() {
        let profile = ryuu_profile();
        let a = profile.spawn(Team::new(0));
        let b = profile.spawn(Team::new(1));

        assert_eq!(a.stats, b.stats);
        assert_ne!(a.team, b.team);
    }

    #[test]
    fn test_card_serialization() {
        let card = CardDefinition::hero(CardId::new(0), ryuu_profile());
        let json = serde_json::to_string(&card).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
