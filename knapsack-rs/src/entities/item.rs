/// Item that can be put into the knapsack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Position of the item in the input, starting from 1. Only used for reporting.
    pub index: usize,
    pub value: u64,
    /// Strictly positive for every item handed to a solver
    pub weight: u64,
}

impl Item {
    pub fn new(index: usize, value: u64, weight: u64) -> Item {
        Item {
            index,
            value,
            weight,
        }
    }

    /// Value per unit of weight, used to rank items for the greedy fill.
    pub fn ratio(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
}
