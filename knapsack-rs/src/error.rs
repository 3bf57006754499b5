use std::fmt::{Display, Formatter};

/// Violation of a precondition of the solvers, detected before any computation takes place.
#[derive(Debug, Clone, PartialEq)]
pub enum KnapsackError {
    /// The capacity is negative, or (fractional variant) not a finite number.
    InvalidCapacity(f64),
    /// An item has a non-positive weight or a negative value.
    InvalidItem {
        /// 1-based position of the offending item
        index: usize,
        /// Wide enough for both the signed external and the unsigned internal representation
        value: i128,
        weight: i128,
    },
    /// An explicitly declared number of items is negative.
    InvalidCount(i64),
    /// The dynamic programming table of `n_items + 1` rows and `capacity + 1` columns cannot be addressed.
    TableTooLarge { n_items: usize, capacity: u64 },
}

impl Display for KnapsackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCapacity(c) => write!(f, "invalid capacity {c}, must be a non-negative number"),
            Self::InvalidItem {
                index,
                value,
                weight,
            } => write!(
                f,
                "invalid item {index} (value={value}, weight={weight}), weight must be positive and value non-negative"
            ),
            Self::InvalidCount(n) => write!(f, "invalid item count {n}, must be non-negative"),
            Self::TableTooLarge { n_items, capacity } => write!(
                f,
                "dynamic programming table for {n_items} items and capacity {capacity} is too large"
            ),
        }
    }
}

impl std::error::Error for KnapsackError {}
