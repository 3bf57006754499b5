use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ksolve::config::KsolveConfig;
use ksolve::io::cli::Cli;
use ksolve::{io, report, runner};
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            KsolveConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("[MAIN] Successfully parsed KsolveConfig: {config:?}");

    let (ext_instance, input_stem) = match &args.input_file {
        Some(input_file) => {
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("instance")
                .to_string();
            (io::read_instance(input_file)?, stem)
        }
        None => (io::read_stdin_instance()?, "stdin".to_string()),
    };

    let output = runner::run(ext_instance, config)?;

    {
        let mut stdout = std::io::stdout().lock();
        report::write_report(&mut stdout, &output)?;
        stdout.flush()?;
    }

    if let Some(solution_folder) = &args.solution_folder {
        fs::create_dir_all(solution_folder).with_context(|| {
            format!("could not create solution folder: {}", solution_folder.display())
        })?;
        let solution_path = solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
