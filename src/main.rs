use anyhow::Result;
use clap::Parser;
use tokenomics::cli::{Cli, Commands};
use tokenomics::commands::score::{InputSource, ScoreConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "tokenomics=debug",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Score {
            params,
            scenario,
            token,
            market_data,
            ruleset,
            format,
            output,
            config,
            plain,
        } => {
            let source = match (params, scenario, token, market_data) {
                (Some(path), _, _, _) => InputSource::File(path),
                (_, Some(id), _, _) => InputSource::Scenario(id),
                (_, _, Some(token), Some(data)) => InputSource::Market { token, data },
                _ => anyhow::bail!("Specify --params, --scenario, or --token with --market-data"),
            };
            tokenomics::commands::score::score_token(ScoreConfig {
                source,
                ruleset,
                format,
                output,
                config,
                plain,
            })
        }
        Commands::Scenarios { format } => tokenomics::commands::scenarios::list_scenarios(format),
        Commands::Project {
            scenario,
            years,
            format,
        } => tokenomics::commands::project::project(&scenario, usize::from(years), format),
        Commands::Init { force } => tokenomics::commands::init::init_config(force),
    }
}
