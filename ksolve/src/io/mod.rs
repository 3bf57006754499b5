use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use knapsack_rs::io::ext_repr::ExtInstance;
use knapsack_rs::io::parse_text_instance;
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;
use crate::config::KsolveConfig;

pub mod cli;
pub mod output;

pub fn read_config(path: &Path) -> Result<KsolveConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")
}

/// Reads an instance file, as JSON if it has a `.json` extension, in the plain text format otherwise.
pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let instance = if is_json {
        serde_json::from_reader(reader)
            .with_context(|| format!("could not parse instance file: {}", path.display()))?
    } else {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parse_text_instance(&text)
            .with_context(|| format!("could not parse instance file: {}", path.display()))?
    };
    Ok(instance)
}

/// Reads a plain text instance from stdin, prompting for every part of it when stdin is a terminal.
pub fn read_stdin_instance() -> Result<ExtInstance> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        read_instance_interactive(stdin.lock(), std::io::stderr())
    } else {
        let mut text = String::new();
        stdin.lock().read_to_string(&mut text)?;
        parse_text_instance(&text).context("could not parse instance from stdin")
    }
}

/// Prompts for the number of items, the capacity and the items themselves, reading line by line
/// until each part is complete. Parsing (and reporting what is wrong) is left to [`parse_text_instance`].
pub fn read_instance_interactive(mut input: impl BufRead, mut prompt: impl Write) -> Result<ExtInstance> {
    let mut tokens = vec![];

    write!(prompt, "Enter number of items (n): ")?;
    prompt.flush()?;
    read_tokens_until(&mut input, &mut tokens, 1)?;

    write!(prompt, "Enter knapsack capacity (W): ")?;
    prompt.flush()?;
    read_tokens_until(&mut input, &mut tokens, 2)?;

    if let Some(n_items) = tokens.first().and_then(|t| t.parse::<usize>().ok()) {
        writeln!(prompt, "Enter value and weight for each item")?;
        read_tokens_until(&mut input, &mut tokens, n_items.saturating_mul(2).saturating_add(2))?;
    }

    parse_text_instance(&tokens.join(" "))
}

fn read_tokens_until(input: &mut impl BufRead, tokens: &mut Vec<String>, n_tokens: usize) -> Result<()> {
    let mut line = String::new();
    while tokens.len() < n_tokens {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            //end of input, whatever is missing gets reported by the parser
            break;
        }
        tokens.extend(line.split_whitespace().map(String::from));
    }
    Ok(())
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}]",
                record.level(),
                hours,
                min,
                sec,
            );

            out.finish(format_args!("{prefix:<20}{message}"))
        })
        .level(level_filter)
        //stdout is reserved for the report
        .chain(std::io::stderr())
        .apply()?;
    info!("[IO] time: {}", jiff::Timestamp::now());
    Ok(())
}
