use crate::entities::Knapsack;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and in tests

pub fn within_capacity(knapsack: &Knapsack) -> bool {
    knapsack.total_weight() <= knapsack.capacity
}

pub fn total_value_consistent(knapsack: &Knapsack) -> bool {
    knapsack.total_value == knapsack.items.iter().map(|item| item.value).sum::<u64>()
}
