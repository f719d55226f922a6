use crate::entities::Item;
use crate::errors::KnapsackError;

/// A capacity-bounded container of [`Item`]s together with its derived total value.
/// Never modified after construction: anything operating on knapsacks replaces
/// them wholesale instead of mutating them.
#[derive(Clone, Debug)]
pub struct Knapsack {
    /// Maximum total weight this knapsack may hold (fixed at creation)
    pub capacity: u64,
    /// Items currently assigned, in insertion order
    pub items: Vec<Item>,
    /// Sum of the values of `items`, computed at construction
    pub total_value: u64,
}

impl Knapsack {
    /// Creates a knapsack of the given capacity holding no items.
    pub fn empty(capacity: u64) -> Result<Self, KnapsackError> {
        if capacity == 0 {
            return Err(KnapsackError::InvalidCapacity { capacity });
        }
        Ok(Self {
            capacity,
            items: vec![],
            total_value: 0,
        })
    }

    /// Creates a knapsack holding exactly `items`, validating the weight bound.
    pub fn with_items(capacity: u64, items: Vec<Item>) -> Result<Self, KnapsackError> {
        if capacity == 0 {
            return Err(KnapsackError::InvalidCapacity { capacity });
        }
        let weight = items.iter().map(|item| item.weight).sum::<u64>();
        if weight > capacity {
            return Err(KnapsackError::OverCapacity { weight, capacity });
        }
        let total_value = items.iter().map(|item| item.value).sum();
        Ok(Self {
            capacity,
            items,
            total_value,
        })
    }

    /// Total weight of all items currently in the knapsack.
    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight).sum()
    }
}
