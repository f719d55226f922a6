use std::time::Instant;

use anyhow::Result;
use log::info;
use rucksack_rs::entities::{KSInstance, Knapsack};
use rucksack_rs::util::assertions;
use thousands::Separable;

use crate::opt::generation::Generation;

/// Weight-indexed Dynamic Programming (WDP) optimizer for 0/1 knapsack
/// instances. Candidate items are processed in input order; each item folds
/// the previous [`Generation`] into a new one, so every inclusion decision
/// observes only pre-item state.
pub struct WDPOptimizer {
    pub instance: KSInstance,
    /// Number of inclusion candidates evaluated against an incumbent
    pub candidate_counter: usize,
}

impl WDPOptimizer {
    pub fn new(instance: KSInstance) -> Self {
        Self {
            instance,
            candidate_counter: 0,
        }
    }

    /// Returns the knapsack of the instance's capacity holding a
    /// maximum-value subset of the candidate items. Ties are resolved in
    /// favor of the earliest composition encountered.
    pub fn solve(&mut self) -> Result<Knapsack> {
        let start = Instant::now();
        let mut generation = Generation::seed(self.instance.capacity)?;

        for (n, item) in self.instance.items.iter().enumerate() {
            generation = generation.advance(item, &mut self.candidate_counter)?;
            info!(
                "[WDP] folded in item {}/{} '{}', best value at full capacity: {}",
                n + 1,
                self.instance.item_qty(),
                item.name,
                generation.at(self.instance.capacity).total_value
            );
        }

        let solution = generation.at(self.instance.capacity).clone();
        debug_assert!(assertions::within_capacity(&solution));
        debug_assert!(assertions::total_value_consistent(&solution));

        let elapsed_time = start.elapsed().as_secs_f64() * 1000.0;
        info!(
            "[WDP] optimization finished in {:.3}ms ({} candidates evaluated)",
            elapsed_time,
            self.candidate_counter.separate_with_commas()
        );
        info!(
            "[WDP] solution contains {} items with value {} and weight {}/{}",
            solution.items.len(),
            solution.total_value,
            solution.total_weight(),
            solution.capacity
        );
        Ok(solution)
    }
}
