//! Deck building.
//!
//! A deck list is an ordered sequence of card template names. The
//! loader resolves each name against a [`CardCatalog`] and produces
//! the `CardId` sequence a board plays from; transport and file format
//! of the list are a collaborator's concern, not the engine's.
//!
//! Unknown names are a typed error: a deck referencing cards that do
//! not exist is a data problem the caller must see.

use thiserror::Error;

use crate::cards::{CardCatalog, CardId};
use crate::core::GameRng;

/// Deck construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// A listed template name is not in the catalog.
    #[error("unknown card template {name:?} at deck position {index}")]
    UnknownCard { name: String, index: usize },
    /// An empty deck list is almost certainly a loading bug.
    #[error("deck list is empty")]
    Empty,
}

/// Resolve an ordered list of template names into a deck.
///
/// The resulting order matches the input list; the last entry ends up
/// on top of the deck (drawn first).
pub fn build_deck(
    catalog: &CardCatalog,
    names: &[impl AsRef<str>],
) -> Result<Vec<CardId>, DeckError> {
    if names.is_empty() {
        return Err(DeckError::Empty);
    }
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = name.as_ref();
            catalog
                .get_by_name(name)
                .map(|card| card.id)
                .ok_or_else(|| DeckError::UnknownCard {
                    name: name.to_string(),
                    index,
                })
        })
        .collect()
}

/// Build a deck and shuffle it with a seeded RNG.
pub fn build_shuffled_deck(
    catalog: &CardCatalog,
    names: &[impl AsRef<str>],
    rng: &mut GameRng,
) -> Result<Vec<CardId>, DeckError> {
    let mut deck = build_deck(catalog, names)?;
    rng.shuffle(&mut deck);
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_deck_resolves_in_order() {
        let catalog = CardCatalog::builtin();
        let deck = build_deck(&catalog, &["Ryuu", "Relief", "Moss Sentinel"]).unwrap();

        assert_eq!(deck.len(), 3);
        assert_eq!(deck[0], catalog.get_by_name("Ryuu").unwrap().id);
        assert_eq!(deck[2], catalog.get_by_name("Moss Sentinel").unwrap().id);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let catalog = CardCatalog::builtin();
        let result = build_deck(&catalog, &["Ryuu", "Missingno"]);

        assert_eq!(
            result.unwrap_err(),
            DeckError::UnknownCard {
                name: "Missingno".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let catalog = CardCatalog::builtin();
        let names: [&str; 0] = [];
        assert_eq!(build_deck(&catalog, &names).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let catalog = CardCatalog::builtin();
        let names = ["Ryuu", "Relief", "Moss Sentinel", "Ash Hound", "Stoneward"];

        let a = build_shuffled_deck(&catalog, &names, &mut GameRng::new(9)).unwrap();
        let b = build_shuffled_deck(&catalog, &names, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }
}
