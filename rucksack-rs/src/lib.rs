//! Entities and validation boundary for the 0/1 knapsack problem: items with
//! positive weight and value, capacity-bounded knapsacks, and the static
//! problem instances consumed by a solver.

/// Entities to model 0/1 knapsack problems
pub mod entities;

/// All the ways constructing an entity can fail
pub mod errors;

/// Helper functions which do not belong to any specific module
pub mod util;
