//! duochart CLI - Paired candlestick charts with overlay indicators.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "duochart")]
#[command(about = "Paired candlestick charts with overlay indicators", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare two tickers' charts with a shared x-axis
    Chart {
        /// First ticker (e.g. AAPL); its x-axis drives the second chart
        ticker1: String,

        /// Second ticker (e.g. MSFT)
        ticker2: String,

        /// Start date (YYYY-MM-DD), inclusive
        #[arg(short, long, default_value = "2020-01-01")]
        start: String,

        /// End date (YYYY-MM-DD), exclusive
        #[arg(short, long, default_value = "2020-02-01")]
        end: String,

        /// Overlay indicator; repeat for several (see `duochart indicators`)
        #[arg(short, long = "indicator")]
        indicators: Vec<String>,

        /// Directory holding <TICKER>.csv price tables. Defaults to the platform data directory.
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Output directory. Files named <ticker>.<format>
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// List the selectable overlay indicators
    Indicators,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Chart {
            ticker1,
            ticker2,
            start,
            end,
            indicators,
            data_dir,
            output_dir,
            format,
        } => commands::chart::chart(
            &ticker1,
            &ticker2,
            &start,
            &end,
            indicators,
            data_dir,
            &output_dir,
            format,
            cli.quiet,
        ),
        Commands::Indicators => {
            commands::indicators::list_indicators();
            Ok(())
        }
    }
}
