use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::scoring::Ruleset;

#[derive(Parser, Debug)]
#[command(name = "tokenomics")]
#[command(about = "Tokenomics viability index calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Show scoring steps
    /// -vv: Show everything, including dependencies
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a token and print the viability index
    #[command(group(
        ArgGroup::new("source")
            .required(true)
            .args(["params", "scenario", "token"])
    ))]
    Score {
        /// Parameter file (JSON, or TOML when the extension is .toml)
        #[arg(long, short = 'p')]
        params: Option<PathBuf>,

        /// Built-in scenario identifier (see `tokenomics scenarios`)
        #[arg(long, short = 's')]
        scenario: Option<String>,

        /// Token symbol or identifier to look up in the market data file
        #[arg(long, short = 't', requires = "market_data")]
        token: Option<String>,

        /// JSON file with market snapshots
        #[arg(long = "market-data")]
        market_data: Option<PathBuf>,

        /// Ruleset to apply (overrides the config file)
        #[arg(long, value_enum)]
        ruleset: Option<Ruleset>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .tokenomics.toml discovery)
        #[arg(long, env = "TOKENOMICS_CONFIG")]
        config: Option<PathBuf>,

        /// Disable colours
        #[arg(long)]
        plain: bool,
    },

    /// List built-in scenarios
    Scenarios {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Project a scenario's yearly inflation rate
    Project {
        /// Scenario identifier
        scenario: String,

        /// Number of years to project (1-100)
        #[arg(
            long,
            short = 'y',
            default_value = "5",
            value_parser = clap::value_parser!(u16).range(1..=100)
        )]
        years: u16,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
