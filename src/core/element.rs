//! Elements and elemental resources.
//!
//! Every card, land, and unit belongs to one of five elements. Players
//! accumulate elemental power per element and spend it on card and
//! ability costs.
//!
//! ## Costs
//!
//! A cost is a list of `(element, amount)` requirements; all entries
//! must be satisfiable at once for the cost to be payable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The five elements of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Primordial,
    Erudite,
    Sylvester,
    Shadows,
    Neutral,
}

impl Element {
    /// All elements, in a fixed order.
    pub const ALL: [Element; 5] = [
        Element::Primordial,
        Element::Erudite,
        Element::Sylvester,
        Element::Shadows,
        Element::Neutral,
    ];

    /// Stable index of this element in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Element::Primordial => 0,
            Element::Erudite => 1,
            Element::Sylvester => 2,
            Element::Shadows => 3,
            Element::Neutral => 4,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Primordial => "Primordial",
            Element::Erudite => "Erudite",
            Element::Sylvester => "Sylvester",
            Element::Shadows => "Shadows",
            Element::Neutral => "Neutral",
        };
        write!(f, "{name}")
    }
}

/// One entry of a card or ability cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub element: Element,
    pub amount: u32,
}

impl ResourceCost {
    /// Create a cost entry.
    #[must_use]
    pub const fn new(element: Element, amount: u32) -> Self {
        Self { element, amount }
    }
}

/// A full cost: zero or more per-element requirements.
pub type CostList = SmallVec<[ResourceCost; 2]>;

/// Per-element resource counters.
///
/// Backed by a fixed array indexed by `Element::index` for O(1)
/// access, mirroring the per-player storage pattern used elsewhere in
/// the crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    amounts: [u32; 5],
}

impl ResourcePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current amount for an element.
    #[must_use]
    pub fn get(&self, element: Element) -> u32 {
        self.amounts[element.index()]
    }

    /// Add to an element's pool; returns the new total.
    pub fn add(&mut self, element: Element, amount: u32) -> u32 {
        let slot = &mut self.amounts[element.index()];
        *slot = slot.saturating_add(amount);
        *slot
    }

    /// Whether every entry of a cost can be paid from this pool.
    #[must_use]
    pub fn can_afford(&self, cost: &[ResourceCost]) -> bool {
        // Duplicate-element entries must be satisfiable together.
        let mut needed = [0u32; 5];
        for entry in cost {
            needed[entry.element.index()] += entry.amount;
        }
        needed
            .iter()
            .zip(self.amounts.iter())
            .all(|(need, have)| need <= have)
    }

    /// Pay a cost. Returns false (and changes nothing) if it cannot
    /// be afforded.
    pub fn spend(&mut self, cost: &[ResourceCost]) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        for entry in cost {
            self.amounts[entry.element.index()] -= entry.amount;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_index_stable() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_pool_add_and_get() {
        let mut pool = ResourcePool::new();
        assert_eq!(pool.get(Element::Shadows), 0);

        assert_eq!(pool.add(Element::Shadows, 3), 3);
        assert_eq!(pool.add(Element::Shadows, 2), 5);
        assert_eq!(pool.get(Element::Shadows), 5);
        assert_eq!(pool.get(Element::Neutral), 0);
    }

    #[test]
    fn test_can_afford() {
        let mut pool = ResourcePool::new();
        pool.add(Element::Primordial, 2);
        pool.add(Element::Sylvester, 1);

        assert!(pool.can_afford(&[ResourceCost::new(Element::Primordial, 2)]));
        assert!(pool.can_afford(&[
            ResourceCost::new(Element::Primordial, 1),
            ResourceCost::new(Element::Sylvester, 1),
        ]));
        assert!(!pool.can_afford(&[ResourceCost::new(Element::Primordial, 3)]));
        assert!(!pool.can_afford(&[ResourceCost::new(Element::Erudite, 1)]));
    }

    #[test]
    fn test_duplicate_element_entries() {
        let mut pool = ResourcePool::new();
        pool.add(Element::Neutral, 3);

        // Two entries for the same element must be summed.
        assert!(!pool.can_afford(&[
            ResourceCost::new(Element::Neutral, 2),
            ResourceCost::new(Element::Neutral, 2),
        ]));
        assert!(pool.can_afford(&[
            ResourceCost::new(Element::Neutral, 2),
            ResourceCost::new(Element::Neutral, 1),
        ]));
    }

    #[test]
    fn test_spend() {
        let mut pool = ResourcePool::new();
        pool.add(Element::Erudite, 4);

        assert!(pool.spend(&[ResourceCost::new(Element::Erudite, 3)]));
        assert_eq!(pool.get(Element::Erudite), 1);

        // Insufficient: nothing is deducted.
        assert!(!pool.spend(&[ResourceCost::new(Element::Erudite, 2)]));
        assert_eq!(pool.get(Element::Erudite), 1);
    }

    #[test]
    fn test_empty_cost_is_free() {
        let mut pool = ResourcePool::new();
        assert!(pool.can_afford(&[]));
        assert!(pool.spend(&[]));
    }
}
