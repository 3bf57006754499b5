use crate::entities::Item;
use crate::error::KnapsackError;

/// Rejects the first item (in input order) that has a zero weight.
pub fn check_items(items: &[Item]) -> Result<(), KnapsackError> {
    match items.iter().find(|item| item.weight == 0) {
        Some(item) => Err(KnapsackError::InvalidItem {
            index: item.index,
            value: item.value.into(),
            weight: 0,
        }),
        None => Ok(()),
    }
}

/// A fractional capacity has to be finite and non-negative.
pub fn check_fractional_capacity(capacity: f64) -> Result<(), KnapsackError> {
    if capacity.is_finite() && capacity >= 0.0 {
        Ok(())
    } else {
        Err(KnapsackError::InvalidCapacity(capacity))
    }
}

/// Number of cells of a DP table with `n_items + 1` rows and `capacity + 1` columns,
/// or `None` if it cannot be allocated as a single array.
pub fn dp_table_cells(n_items: usize, capacity: u64) -> Option<usize> {
    let n_cols = usize::try_from(capacity).ok()?.checked_add(1)?;
    let n_cells = n_items.checked_add(1)?.checked_mul(n_cols)?;
    let max_cells = isize::MAX as usize / size_of::<u64>();
    (n_cells <= max_cells).then_some(n_cells)
}
