use crate::entities::{FractionalSolution, Item, ZeroOneSolution};
use crate::util::F64_EPSILON;
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the solutions
//Used in debug_assertion!() blocks

pub fn zero_one_solution_is_consistent(
    capacity: u64,
    items: &[Item],
    sol: &ZeroOneSolution,
) -> bool {
    if sol.included.len() != items.len() {
        error!(
            "inclusion flags ({}) do not match the number of items ({})",
            sol.included.len(),
            items.len()
        );
        return false;
    }
    let value = sol.included_items(items).map(|item| item.value).sum::<u64>();
    if value != sol.value {
        error!("reported value {} differs from included value {}", sol.value, value);
        return false;
    }
    let weight = sol.total_weight(items);
    if weight > capacity {
        error!("included weight {weight} exceeds capacity {capacity}");
        return false;
    }
    true
}

pub fn fractional_solution_is_consistent(capacity: f64, sol: &FractionalSolution) -> bool {
    let value = sol.choices.iter().map(|c| c.value()).sum::<f64>();
    if !approx_eq!(f64, value, sol.value, epsilon = F64_EPSILON * (1.0 + value.abs())) {
        error!("reported value {} differs from chosen value {}", sol.value, value);
        return false;
    }
    if sol.total_weight() > capacity + F64_EPSILON * (1.0 + capacity) {
        error!("chosen weight {} exceeds capacity {capacity}", sol.total_weight());
        return false;
    }
    if sol.choices.iter().any(|c| c.fraction <= 0.0 || c.fraction > 1.0) {
        error!("fraction outside of (0, 1]");
        return false;
    }
    //only the last choice is allowed to split an item
    let n_choices = sol.choices.len();
    if sol
        .choices
        .iter()
        .take(n_choices.saturating_sub(1))
        .any(|c| !c.is_whole())
    {
        error!("a split item is followed by other choices");
        return false;
    }
    if !sol
        .choices
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.item.ratio() >= b.item.ratio())
    {
        error!("choices are not in descending value/weight ratio order");
        return false;
    }
    true
}
