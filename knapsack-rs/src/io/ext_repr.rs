use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
/// Signed so that invalid input can be reported instead of failing to deserialize.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtItem {
    pub value: i64,
    pub weight: i64,
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtInstance {
    /// Optional name of the instance
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub capacity: i64,
    /// Items in input order, they are indexed from 1 on import
    pub items: Vec<ExtItem>,
}

/// An item as it appears in an exported solution.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtChosenItem {
    /// 1-based position of the item in the instance
    pub index: usize,
    pub value: u64,
    pub weight: u64,
}

/// External representation of a [`ZeroOneSolution`](crate::entities::ZeroOneSolution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtZeroOneSolution {
    pub value: u64,
    pub total_weight: u64,
    /// Taken items, in input order
    pub items: Vec<ExtChosenItem>,
}

/// A portion of an item as it appears in an exported fractional solution.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtFractionalChoice {
    #[serde(flatten)]
    pub item: ExtChosenItem,
    pub fraction: f64,
}

/// External representation of a [`FractionalSolution`](crate::entities::FractionalSolution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtFractionalSolution {
    pub value: f64,
    pub total_weight: f64,
    /// Choices in the order they were made (descending value/weight ratio)
    pub choices: Vec<ExtFractionalChoice>,
}
