use crate::entities::Item;
use crate::errors::KnapsackError;

#[derive(Debug, Clone)]
/// Instance of the 0/1 knapsack problem: a set of candidate items to fill a
/// single knapsack of fixed capacity. Static and unmodifiable; solvers read it
/// but never change it.
pub struct KSInstance {
    /// The candidate items, in input order
    pub items: Vec<Item>,
    /// Capacity of the knapsack to be filled
    pub capacity: u64,
}

impl KSInstance {
    pub fn new(capacity: u64, items: Vec<Item>) -> Result<Self, KnapsackError> {
        if capacity == 0 {
            return Err(KnapsackError::InvalidCapacity { capacity });
        }
        Ok(Self { items, capacity })
    }

    pub fn item_qty(&self) -> usize {
        self.items.len()
    }

    pub fn total_item_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight).sum()
    }

    pub fn total_item_value(&self) -> u64 {
        self.items.iter().map(|item| item.value).sum()
    }
}
