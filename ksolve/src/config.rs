use serde::{Deserialize, Serialize};

/// Configuration for the ksolve runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct KsolveConfig {
    /// Solve the 0/1 variant with dynamic programming
    pub zero_one: bool,
    /// Solve the fractional variant with the greedy ratio fill
    pub fractional: bool,
    /// Number of decimals used to report the fractional total value
    pub value_decimals: usize,
    /// Number of decimals used to report the fraction taken of each item
    pub fraction_decimals: usize,
}

impl Default for KsolveConfig {
    fn default() -> Self {
        Self {
            zero_one: true,
            fractional: true,
            value_decimals: 2,
            fraction_decimals: 4,
        }
    }
}
