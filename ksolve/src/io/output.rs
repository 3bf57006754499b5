use crate::config::KsolveConfig;
use knapsack_rs::io::ext_repr::{ExtFractionalSolution, ExtInstance, ExtZeroOneSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KsolveOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub zero_one: Option<ExtZeroOneSolution>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fractional: Option<ExtFractionalSolution>,
    pub config: KsolveConfig,
}
