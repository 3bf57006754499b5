use crate::entities::{Item, ZeroOneSolution};
use crate::error::KnapsackError;
use crate::solvers::DpTable;
use crate::util::assertions;
use crate::util::validation::check_items;
use log::debug;

/// Exact solver for the 0/1 knapsack problem using bottom-up dynamic programming.
///
/// Runs in `O(n * capacity)` time and memory.
pub struct ZeroOneSolver;

impl ZeroOneSolver {
    /// Computes the most valuable subset of `items` with a total weight of at most `capacity`.
    ///
    /// Every item needs a strictly positive weight, otherwise [`KnapsackError::InvalidItem`] is
    /// returned before any work is done.
    pub fn solve(capacity: u64, items: &[Item]) -> Result<ZeroOneSolution, KnapsackError> {
        check_items(items)?;

        if capacity == 0 || items.is_empty() {
            debug!("[01KP] trivial instance (capacity {capacity}, {} items)", items.len());
            return Ok(ZeroOneSolution::empty(items.len()));
        }

        debug!(
            "[01KP] building table for {} items and capacity {capacity}",
            items.len()
        );
        let table = DpTable::build(capacity, items)?;
        let solution = ZeroOneSolution {
            value: table.best_value(),
            included: table.reconstruct(items),
        };

        debug!(
            "[01KP] optimal value {} with {} items taken",
            solution.value,
            solution.n_included()
        );
        debug_assert!(assertions::zero_one_solution_is_consistent(
            capacity, items, &solution
        ));
        Ok(solution)
    }
}
