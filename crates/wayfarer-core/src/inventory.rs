use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId};

/// Outcome of checking whether an item fits into an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityCheck {
    /// The item fits.
    Fits,
    /// The item alone outweighs the total capacity; it can never be
    /// carried, not even with empty hands.
    TooHeavy,
    /// The item would fit on its own, but not on top of the current
    /// load.
    NoRoom,
}

/// Returned when an inventory refuses an item, handing it back so the
/// caller can put it down where it came from.
#[derive(Debug)]
pub struct RejectedItem {
    /// The item that did not fit.
    pub item: Item,
    /// Why it did not fit.
    pub reason: CapacityCheck,
}

/// The player's carried items, with an optional weight limit.
///
/// Capacity is enforced on insert: [`Inventory::try_add`] refuses any
/// item that would push the carried weight past the limit. An inventory
/// without a capacity accepts everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: Option<f64>,
}

impl Inventory {
    /// Create an inventory with no weight limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory that can carry at most `capacity` weight.
    pub fn with_capacity(capacity: f64) -> Self {
        Self {
            items: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// The carried items, oldest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Combined weight of all carried items.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|i| i.weight).sum()
    }

    /// The weight limit, if one is set.
    pub fn capacity(&self) -> Option<f64> {
        self.capacity
    }

    /// Check whether an item would fit without inserting it.
    pub fn check(&self, item: &Item) -> CapacityCheck {
        let Some(capacity) = self.capacity else {
            return CapacityCheck::Fits;
        };
        if item.weight > capacity {
            CapacityCheck::TooHeavy
        } else if self.total_weight() + item.weight > capacity {
            CapacityCheck::NoRoom
        } else {
            CapacityCheck::Fits
        }
    }

    /// Insert an item, or hand it back if it does not fit.
    pub fn try_add(&mut self, item: Item) -> Result<(), RejectedItem> {
        match self.check(&item) {
            CapacityCheck::Fits => {
                self.items.push(item);
                Ok(())
            }
            reason => Err(RejectedItem { item, reason }),
        }
    }

    /// Remove an item by ID, returning it for handover to a location.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| &i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Whether an item with this ID is carried.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Find a carried item by exact ID, name, or alias match, ignoring
    /// case.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_inventory_accepts_everything() {
        let mut inventory = Inventory::new();
        inventory.try_add(Item::new("anvil", "anvil").with_weight(1000.0)).unwrap();
        assert_eq!(inventory.len(), 1);
        assert!((inventory.total_weight() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn second_item_that_would_exceed_capacity_is_refused() {
        let mut inventory = Inventory::with_capacity(1.0);
        inventory.try_add(Item::new("a", "first stone").with_weight(0.6)).unwrap();

        let rejected = inventory
            .try_add(Item::new("b", "second stone").with_weight(0.6))
            .unwrap_err();
        assert_eq!(rejected.reason, CapacityCheck::NoRoom);
        assert_eq!(rejected.item.id, ItemId::new("b"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn item_heavier_than_total_capacity_is_too_heavy() {
        let inventory = Inventory::with_capacity(1.0);
        let trunk = Item::new("trunk", "luggage trunk").with_weight(40.0);
        assert_eq!(inventory.check(&trunk), CapacityCheck::TooHeavy);
    }

    #[test]
    fn load_exactly_at_capacity_fits() {
        let mut inventory = Inventory::with_capacity(1.0);
        inventory.try_add(Item::new("a", "small stone").with_weight(0.25)).unwrap();
        inventory.try_add(Item::new("b", "large stone").with_weight(0.75)).unwrap();
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn remove_item_returns_ownership() {
        let mut inventory = Inventory::new();
        inventory.try_add(Item::new("coin", "coin")).unwrap();

        let coin = inventory.remove_item(&ItemId::new("coin")).unwrap();
        assert_eq!(coin.id, ItemId::new("coin"));
        assert!(inventory.is_empty());
        assert!(!inventory.contains(&ItemId::new("coin")));
    }

    #[test]
    fn find_item_uses_exact_matching() {
        let mut inventory = Inventory::new();
        inventory
            .try_add(Item::new("ticket", "paper ticket").with_alias("pass"))
            .unwrap();
        assert!(inventory.find_item("Pass").is_some());
        assert!(inventory.find_item("ticket stub").is_none());
    }
}
