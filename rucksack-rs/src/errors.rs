use thiserror::Error;

/// Failures that can occur when constructing an [`Item`](crate::entities::Item),
/// [`Knapsack`](crate::entities::Knapsack) or [`KSInstance`](crate::entities::KSInstance).
/// All variants are detected eagerly at construction time; a solver operating on
/// successfully constructed entities never has to validate them again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// Item requested with a zero weight or value
    #[error("item weight and value must be positive. weight={weight}, value={value}")]
    InvalidItem { weight: u64, value: u64 },
    /// Knapsack or instance requested with a zero capacity
    #[error("capacity must be positive. capacity={capacity}")]
    InvalidCapacity { capacity: u64 },
    /// Item set too heavy for the requested knapsack
    #[error("total item weight exceeds capacity. weight={weight}, capacity={capacity}")]
    OverCapacity { weight: u64, capacity: u64 },
}
