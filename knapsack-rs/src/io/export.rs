use crate::entities::{FractionalChoice, FractionalSolution, Instance, Item, ZeroOneSolution};
use crate::io::ext_repr::{
    ExtChosenItem, ExtFractionalChoice, ExtFractionalSolution, ExtZeroOneSolution,
};

/// Exports a 0/1 solution of `instance` out of the library.
pub fn export_zero_one(instance: &Instance, solution: &ZeroOneSolution) -> ExtZeroOneSolution {
    ExtZeroOneSolution {
        value: solution.value,
        total_weight: solution.total_weight(&instance.items),
        items: solution
            .included_items(&instance.items)
            .map(export_item)
            .collect(),
    }
}

/// Exports a fractional solution out of the library.
pub fn export_fractional(solution: &FractionalSolution) -> ExtFractionalSolution {
    ExtFractionalSolution {
        value: solution.value,
        total_weight: solution.total_weight(),
        choices: solution.choices.iter().map(export_choice).collect(),
    }
}

fn export_item(item: &Item) -> ExtChosenItem {
    ExtChosenItem {
        index: item.index,
        value: item.value,
        weight: item.weight,
    }
}

fn export_choice(choice: &FractionalChoice) -> ExtFractionalChoice {
    ExtFractionalChoice {
        item: export_item(&choice.item),
        fraction: choice.fraction,
    }
}
