use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance file, `.json` or plain text. Read from stdin if omitted
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,
    /// Folder to write the solutions to, as JSON
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
