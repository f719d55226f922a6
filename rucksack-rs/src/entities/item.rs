use std::fmt;

use crate::errors::KnapsackError;

/// Item to be packed into a [`Knapsack`](crate::entities::Knapsack).
/// Weight and value are strictly positive, enforced at construction.
/// Items are immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Display label of the item
    pub name: String,
    /// Cost of including the item
    pub weight: u64,
    /// The quantity being maximized
    pub value: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u64, value: u64) -> Result<Item, KnapsackError> {
        if weight == 0 || value == 0 {
            return Err(KnapsackError::InvalidItem { weight, value });
        }
        Ok(Item {
            name: name.into(),
            weight,
            value,
        })
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (weight={}, value={})",
            self.name, self.weight, self.value
        )
    }
}
