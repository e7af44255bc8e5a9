//! chemgen - generate chemical compound names from the command line
//!
//! Usage:
//!   chemgen generate --seed 42 --count 5
//!   chemgen --dataset elements.yaml --format json generate
//!   chemgen --dataset datasets/ elements
//!   chemgen balance 2 -6
//!   chemgen ion Oxygen --prefix hepta

use anyhow::Context;
use chemical_name_generator::cli::commands::elements::handle_elements;
use chemical_name_generator::cli::commands::generate::{GenerateArgs, handle_generate};
use chemical_name_generator::cli::commands::naming::{handle_balance, handle_ion, handle_numeral};
use chemical_name_generator::cli::{CliError, OutputFormat};
use chemical_name_generator::{AppConfig, CompoundGenerator, ElementRegistry};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chemgen", version, about = "Procedural chemical compound names and formulas")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Element dataset (flat Element-Type file, YAML or JSON) or a directory of them;
    /// overrides the config file
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate compounds from consecutive seeds
    Generate {
        /// Seed of the first round
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Number of compounds to generate
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Rounds tried per compound before reporting none
        #[arg(long, default_value_t = 16)]
        max_attempts: u32,
    },
    /// Atoms of CHARGE needed to cancel OPPOSING
    Balance {
        #[arg(allow_hyphen_values = true)]
        charge: i32,
        #[arg(allow_hyphen_values = true)]
        opposing: i32,
    },
    /// Ion name fragment for an element name
    Ion {
        name: String,
        /// Multiplicity prefix, e.g. "di" or "hepta"
        #[arg(long, default_value = "")]
        prefix: String,
        /// Keep the element's ending instead of switching it to -ide
        #[arg(long)]
        keep_ending: bool,
    },
    /// Roman numeral for an oxidation state
    Numeral {
        #[arg(allow_hyphen_values = true)]
        value: i32,
    },
    /// List the loaded elements
    Elements,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = format!("chemical_name_generator={level},chemgen={level}");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn load_registry(cli: &Cli, config: &AppConfig) -> Result<ElementRegistry, CliError> {
    let registry = match cli.dataset.as_ref().or(config.dataset.as_ref()) {
        Some(path) => ElementRegistry::load_path(path)?,
        None => ElementRegistry::builtin()?,
    };
    Ok(registry)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Balance { charge, opposing } => handle_balance(*charge, *opposing),
        Command::Ion {
            name,
            prefix,
            keep_ending,
        } => handle_ion(name, prefix, *keep_ending),
        Command::Numeral { value } => handle_numeral(*value),
        Command::Elements => {
            let config = load_config(cli)?;
            handle_elements(&load_registry(cli, &config)?, cli.format)
        }
        Command::Generate {
            seed,
            count,
            max_attempts,
        } => {
            let config = load_config(cli)?;
            let registry = load_registry(cli, &config)?;
            let generator = CompoundGenerator::with_config(&registry, config.generator)?;
            handle_generate(
                &generator,
                &GenerateArgs {
                    seed: *seed,
                    count: *count,
                    max_attempts: *max_attempts,
                    format: cli.format,
                },
            )
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, CliError> {
    match &cli.config {
        Some(path) => Ok(AppConfig::load(path)?),
        None => Ok(AppConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err.user_message());
        std::process::exit(1);
    }

    std::io::Write::flush(&mut std::io::stdout()).context("Failed to flush output")?;
    Ok(())
}
