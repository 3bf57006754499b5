use crate::entities::{FractionalChoice, FractionalSolution, Item};
use crate::error::KnapsackError;
use crate::util::assertions;
use crate::util::validation::{check_fractional_capacity, check_items};
use itertools::Itertools;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Exact solver for the fractional knapsack problem: items are taken greedily in descending
/// order of value/weight ratio, splitting the first item that no longer fits.
///
/// Items with an equal ratio are consumed in input order.
pub struct FractionalSolver;

impl FractionalSolver {
    pub fn solve(capacity: f64, items: &[Item]) -> Result<FractionalSolution, KnapsackError> {
        check_fractional_capacity(capacity)?;
        check_items(items)?;

        //stable sort, ties keep their input order
        let sorted = items
            .iter()
            .sorted_by_cached_key(|item| Reverse(OrderedFloat(item.ratio())))
            .collect_vec();

        let mut remaining = capacity;
        let mut solution = FractionalSolution::empty();

        for item in sorted {
            if remaining <= 0.0 {
                break;
            }
            let weight = item.weight as f64;
            let choice = if weight <= remaining {
                remaining -= weight;
                FractionalChoice::new(*item, 1.0)
            } else {
                //knapsack is full after this one
                let fraction = remaining / weight;
                remaining = 0.0;
                if fraction == 0.0 {
                    //leftover capacity too small to represent a portion of this item
                    break;
                }
                FractionalChoice::new(*item, fraction)
            };
            trace!(
                "[FKP] taking {:.4} of item {} (ratio {:.4})",
                choice.fraction,
                item.index,
                item.ratio()
            );
            solution.value += choice.value();
            solution.choices.push(choice);
        }

        debug!(
            "[FKP] optimal value {:.4} with {} choices, {:.4} capacity left",
            solution.value,
            solution.choices.len(),
            remaining
        );
        debug_assert!(assertions::fractional_solution_is_consistent(
            capacity, &solution
        ));
        Ok(solution)
    }
}
