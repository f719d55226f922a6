use std::cmp::Ordering;

use anyhow::Result;
use rucksack_rs::entities::{Item, Knapsack};

/// One full mapping of the dynamic program: for every weight budget in
/// `1..=capacity`, the best knapsack of that capacity found so far.
/// A generation is never modified once built; [`Generation::advance`] produces
/// a fresh one.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Best knapsack per budget, slot `w - 1` holding budget `w`
    best: Vec<Knapsack>,
}

impl Generation {
    /// The mapping state before any item has been considered: an empty
    /// knapsack at every budget.
    pub fn seed(capacity: u64) -> Result<Self> {
        let best = (1..=capacity)
            .map(Knapsack::empty)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { best })
    }

    /// Best knapsack for the given weight budget (`1..=capacity`).
    pub fn at(&self, budget: u64) -> &Knapsack {
        &self.best[budget as usize - 1]
    }

    pub fn capacity(&self) -> u64 {
        self.best.len() as u64
    }

    /// Folds one candidate item into the mapping, producing the next
    /// generation. Every budget reads only `self`, so the item can never end
    /// up in a knapsack twice.
    pub fn advance(&self, item: &Item, candidate_counter: &mut usize) -> Result<Self> {
        let best = (1..=self.capacity())
            .map(|budget| self.challenge(item, budget, candidate_counter))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { best })
    }

    /// Decides the new state at `budget`: the item (possibly on top of a
    /// lighter sub-solution) if strictly more valuable, the incumbent
    /// otherwise. Ties keep the incumbent.
    fn challenge(
        &self,
        item: &Item,
        budget: u64,
        candidate_counter: &mut usize,
    ) -> Result<Knapsack> {
        let incumbent = self.at(budget);
        match item.weight.cmp(&budget) {
            // too heavy for this budget
            Ordering::Greater => Ok(incumbent.clone()),
            Ordering::Equal => {
                *candidate_counter += 1;
                if item.value > incumbent.total_value {
                    Ok(Knapsack::with_items(budget, vec![item.clone()])?)
                } else {
                    Ok(incumbent.clone())
                }
            }
            Ordering::Less => {
                *candidate_counter += 1;
                // the item on top of the best sub-solution for the remaining budget
                let sub = self.at(budget - item.weight);
                if item.value + sub.total_value > incumbent.total_value {
                    let mut items = sub.items.clone();
                    items.push(item.clone());
                    Ok(Knapsack::with_items(budget, items)?)
                } else {
                    Ok(incumbent.clone())
                }
            }
        }
    }
}
