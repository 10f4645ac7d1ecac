use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use minefield_core::preset_for;

use crate::config::Config;

mod config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Settings file to load, TOML or JSON
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available presets
    Presets {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a settings file
    Check { file: PathBuf },
    /// Print the settings a new game would start with, as JSON
    Resolve {
        /// Start from this preset instead of the configured settings
        #[arg(short, long)]
        preset: Option<String>,

        /// Do not guarantee an opening on the first reveal
        #[arg(long)]
        closed_start: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    println!("{}", run(&args)?);
    Ok(())
}

fn run(args: &Args) -> Result<String> {
    match &args.command {
        Command::Presets { json } => {
            let config = Config::load_or_default(args.config.as_deref())?;
            list_presets(&config, *json)
        }
        Command::Check { file } => {
            let config = Config::load(file)?;
            config.validate()?;
            Ok(format!(
                "{}: ok, starts {} with {} mines, {} presets",
                file.display(),
                config.settings.size,
                config.settings.mines,
                config.presets.len()
            ))
        }
        Command::Resolve {
            preset,
            closed_start,
        } => {
            let config = Config::load_or_default(args.config.as_deref())?;
            let settings = config.resolve(preset.as_deref(), *closed_start)?;
            Ok(serde_json::to_string_pretty(&settings)?)
        }
    }
}

fn list_presets(config: &Config, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&config.presets)?);
    }

    let current = preset_for(&config.presets, &config.settings);
    let lines: Vec<_> = config
        .presets
        .iter()
        .map(|preset| {
            let marker = if current == Some(preset) { '*' } else { ' ' };
            format!(
                "{marker} {:<14} {:>7} {:>4} mines",
                preset.display,
                preset.options.size.to_string(),
                preset.options.mines
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
