use std::io::{Result, Write};

use knapsack_rs::io::ext_repr::{ExtFractionalSolution, ExtZeroOneSolution};

use crate::config::KsolveConfig;
use crate::io::output::KsolveOutput;

/// Writes the human readable report of every solved variant.
pub fn write_report(out: &mut impl Write, output: &KsolveOutput) -> Result<()> {
    if let Some(sol) = &output.zero_one {
        writeln!(out)?;
        write_zero_one(out, sol)?;
    }
    if let Some(sol) = &output.fractional {
        writeln!(out)?;
        write_fractional(out, sol, &output.config)?;
    }
    Ok(())
}

pub fn write_zero_one(out: &mut impl Write, sol: &ExtZeroOneSolution) -> Result<()> {
    writeln!(out, "=== 0/1 Knapsack (DP) ===")?;
    writeln!(out, "Optimal total value = {}", sol.value)?;
    writeln!(out, "Items taken (index, value, weight):")?;
    for item in &sol.items {
        writeln!(
            out,
            "  Item {}: value={}, weight={}",
            item.index, item.value, item.weight
        )?;
    }
    Ok(())
}

pub fn write_fractional(
    out: &mut impl Write,
    sol: &ExtFractionalSolution,
    config: &KsolveConfig,
) -> Result<()> {
    writeln!(out, "=== Fractional Knapsack (Greedy by value/weight) ===")?;
    writeln!(
        out,
        "Optimal total value = {:.*}",
        config.value_decimals, sol.value
    )?;
    writeln!(out, "Items taken (index, value, weight, fraction taken):")?;
    for choice in &sol.choices {
        writeln!(
            out,
            "  Item {}: value={}, weight={}, fraction={:.*}",
            choice.item.index,
            choice.item.value,
            choice.item.weight,
            config.fraction_decimals,
            choice.fraction
        )?;
    }
    Ok(())
}
