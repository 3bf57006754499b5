use anyhow::{Context, Result};
use knapsack_rs::io::ext_repr::ExtInstance;
use knapsack_rs::io::{export_fractional, export_zero_one, import};
use knapsack_rs::util::validation::dp_table_cells;
use log::{info, warn};
use std::time::Instant;
use thousands::Separable;

use crate::config::KsolveConfig;
use crate::io::output::KsolveOutput;

/// Imports the instance and solves the variants enabled in `config`.
pub fn run(ext_instance: ExtInstance, config: KsolveConfig) -> Result<KsolveOutput> {
    let instance = import(&ext_instance).context("invalid instance")?;
    info!(
        "[RUN] instance with {} items and capacity {}",
        instance.n_items(),
        instance.capacity
    );
    if !config.zero_one && !config.fractional {
        warn!("[RUN] both variants are disabled in the config, nothing to solve");
    }

    let zero_one = if config.zero_one {
        if let Some(n_cells) = dp_table_cells(instance.n_items(), instance.capacity) {
            info!("[RUN] 0/1 table has {} cells", n_cells.separate_with_commas());
        }
        let start = Instant::now();
        let sol = instance.solve_zero_one()?;
        info!(
            "[RUN] 0/1 optimum {} found in {:.3}ms",
            sol.value,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Some(export_zero_one(&instance, &sol))
    } else {
        None
    };

    let fractional = if config.fractional {
        let start = Instant::now();
        let sol = instance.solve_fractional()?;
        info!(
            "[RUN] fractional optimum {:.4} found in {:.3}ms",
            sol.value,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Some(export_fractional(&sol))
    } else {
        None
    };

    Ok(KsolveOutput {
        instance: ext_instance,
        zero_one,
        fractional,
        config,
    })
}
