use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use fundtrack::cli::setup::{setup, setup_at_path};
use fundtrack::core::SummaryOptions;
use fundtrack::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fundtrack::AppCommand {
    fn from(cmd: Commands) -> fundtrack::AppCommand {
        match cmd {
            Commands::Add { symbol, name } => fundtrack::AppCommand::Add { symbol, name },
            Commands::Remove { symbol } => fundtrack::AppCommand::Remove { symbol },
            Commands::List => fundtrack::AppCommand::List,
            Commands::Show {
                no_day,
                no_week,
                no_year,
            } => fundtrack::AppCommand::Show(SummaryOptions {
                day: !no_day,
                week: !no_week,
                year: !no_year,
            }),
            Commands::Range { symbol, start, end } => {
                fundtrack::AppCommand::Range { symbol, start, end }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Track a symbol, or rename a tracked one
    Add {
        symbol: String,
        /// Display name shown next to the symbol
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Stop tracking a symbol
    Remove { symbol: String },
    /// List tracked symbols
    List,
    /// Display latest prices and lookback performance
    Show {
        /// Hide the previous 24 hours change
        #[arg(long)]
        no_day: bool,
        /// Hide the previous week change
        #[arg(long)]
        no_week: bool,
        /// Hide the previous year change
        #[arg(long)]
        no_year: bool,
    },
    /// Display the change between two dates (YYYY-MM-DD)
    Range {
        symbol: String,
        start: NaiveDate,
        /// Defaults to the latest price
        end: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => setup_at_path(path),
            None => setup(),
        },
        Some(cmd) => fundtrack::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
