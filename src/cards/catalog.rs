//! Card catalog: definition lookup by id and by name.
//!
//! The catalog is owned per board instance, not a global mutable
//! registry, and backs both card play and deck building (the deck
//! loader resolves template names through `get_by_name`).

use rustc_hash::FxHashMap;

use crate::core::Element;
use crate::lands;
use crate::units::{Ability, AbilityEffect, Stats, UnitCategory};

use super::definition::{CardDefinition, CardId, UnitProfile};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use grid_ccg::cards::CardCatalog;
///
/// let catalog = CardCatalog::builtin();
/// let ryuu = catalog.get_by_name("Ryuu").unwrap();
/// assert_eq!(ryuu.name, "Ryuu");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in card set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.register(CardDefinition::hero(
            CardId::new(0),
            UnitProfile::new(
                "Ryuu",
                UnitCategory::Hero,
                Element::Primordial,
                Stats::hero(20, 2, 2, 2, 11),
            )
            .with_ability(
                Ability::new("heal", AbilityEffect::Heal { amount: 2 })
                    .with_cost(Element::Primordial, 1),
            ),
        ));

        catalog.register(
            CardDefinition::companion(
                CardId::new(1),
                UnitProfile::new(
                    "Moss Sentinel",
                    UnitCategory::Companion,
                    Element::Sylvester,
                    Stats::companion(8, 2, 1, 2),
                ),
            )
            .with_cost(Element::Sylvester, 2),
        );

        catalog.register(
            CardDefinition::companion(
                CardId::new(2),
                UnitProfile::new(
                    "Ash Hound",
                    UnitCategory::Companion,
                    Element::Shadows,
                    Stats::companion(6, 3, 1, 3),
                ),
            )
            .with_cost(Element::Shadows, 2),
        );

        catalog.register(
            CardDefinition::spell(
                CardId::new(3),
                "Relief",
                Element::Primordial,
                AbilityEffect::Heal { amount: 3 },
            )
            .with_cost(Element::Primordial, 1),
        );

        catalog.register(
            CardDefinition::artifact(
                CardId::new(4),
                "Stoneward",
                Element::Erudite,
                AbilityEffect::Fortify { dodge_bonus: 10 },
            )
            .with_cost(Element::Erudite, 2),
        );

        catalog.register(
            CardDefinition::land_card(CardId::new(5), lands::catalog::bramble_snare())
                .with_cost(Element::Shadows, 1),
        );

        catalog.register(
            CardDefinition::land_card(CardId::new(6), lands::catalog::vital_springs())
                .with_cost(Element::Sylvester, 1),
        );

        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID or name already exists;
    /// duplicate templates are a setup bug, not a runtime condition.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        if self.by_name.contains_key(&card.name) {
            panic!("Card named {:?} already registered", card.name);
        }
        self.by_name.insert(card.name.clone(), card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by template name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.by_name.get(name).and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
