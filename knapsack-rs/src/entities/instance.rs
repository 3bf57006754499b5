use crate::entities::{FractionalSolution, Item, ZeroOneSolution};
use crate::error::KnapsackError;
use crate::solvers::{FractionalSolver, ZeroOneSolver};
use crate::util::validation::check_items;

/// A knapsack capacity together with the items to choose from, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Instance {
    /// Creates a new instance, rejecting items with a zero weight.
    pub fn new(capacity: u64, items: Vec<Item>) -> Result<Self, KnapsackError> {
        check_items(&items)?;
        Ok(Self { capacity, items })
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn solve_zero_one(&self) -> Result<ZeroOneSolution, KnapsackError> {
        ZeroOneSolver::solve(self.capacity, &self.items)
    }

    /// Solves the fractional relaxation, with the integer capacity widened to `f64`.
    pub fn solve_fractional(&self) -> Result<FractionalSolution, KnapsackError> {
        FractionalSolver::solve(self.capacity as f64, &self.items)
    }
}
