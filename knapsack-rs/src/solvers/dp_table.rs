use crate::entities::Item;
use crate::error::KnapsackError;
use crate::util::validation::dp_table_cells;
use ndarray::Array2;

/// Dense table of best achievable values for the 0/1 knapsack problem.
///
/// Cell `(i, w)` holds the best value attainable with the first `i` items (in input order)
/// and a capacity of at most `w`. Row `0` (no items considered) is all zero.
#[derive(Clone, Debug)]
pub struct DpTable {
    cells: Array2<u64>,
}

impl DpTable {
    /// Fills the table bottom-up for the given items and capacity.
    /// All item weights are expected to be strictly positive.
    pub fn build(capacity: u64, items: &[Item]) -> Result<Self, KnapsackError> {
        let n_items = items.len();
        dp_table_cells(n_items, capacity).ok_or(KnapsackError::TableTooLarge { n_items, capacity })?;
        let n_cols = capacity as usize + 1;

        let mut cells = Array2::<u64>::zeros((n_items + 1, n_cols));
        for (i, item) in items.iter().enumerate().map(|(i, item)| (i + 1, item)) {
            for w in 0..n_cols {
                let skip = cells[[i - 1, w]];
                cells[[i, w]] = if item.weight > w as u64 {
                    // item too heavy
                    skip
                } else {
                    let take = item.value + cells[[i - 1, w - item.weight as usize]];
                    skip.max(take)
                };
            }
        }
        Ok(Self { cells })
    }

    pub fn get(&self, n_items: usize, capacity: usize) -> u64 {
        self.cells[[n_items, capacity]]
    }

    /// Number of items the table was built for.
    pub fn n_items(&self) -> usize {
        self.cells.nrows() - 1
    }

    pub fn capacity(&self) -> usize {
        self.cells.ncols() - 1
    }

    /// Best value using all items and the full capacity.
    pub fn best_value(&self) -> u64 {
        self.get(self.n_items(), self.capacity())
    }

    /// Walks the table back from the bottom-right cell to recover which items were taken.
    /// An item only counts as taken when it strictly changed the value, so ties resolve to skipping it.
    pub fn reconstruct(&self, items: &[Item]) -> Vec<bool> {
        debug_assert_eq!(items.len(), self.n_items());
        let mut included = vec![false; items.len()];
        let mut w = self.capacity();
        for i in (1..=self.n_items()).rev() {
            if self.get(i, w) != self.get(i - 1, w) {
                included[i - 1] = true;
                w -= items[i - 1].weight as usize;
            }
        }
        included
    }
}
