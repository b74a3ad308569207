use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use budget_pace::cli::{
    handle_day_command, handle_period_command, handle_reallocate_command, handle_table_command,
    handle_validate_command, DayArgs, PeriodArgs, ReallocateArgs, TableArgs, ValidateArgs,
};
use budget_pace::config::{PacePaths, Settings};
use budget_pace::services::PeriodService;

#[derive(Parser)]
#[command(
    name = "pace",
    version,
    about = "Daily spending pace for a budget period",
    long_about = "pace splits a budget evenly across the days of its period and \
                  carries each day's surplus or deficit forward, so you always \
                  know what you can spend today."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); PACE_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the allocation table for the whole period
    Table(TableArgs),

    /// Show one day's allocation
    Day(DayArgs),

    /// Recompute the rest of the period for a new monthly amount
    Reallocate(ReallocateArgs),

    /// Check a budget and its expenses, reporting every problem
    Validate(ValidateArgs),

    /// Show a period's dates and length
    Period(PeriodArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("PACE_LOG").unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = PacePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Table(args)) => handle_table_command(&settings, args, &mut out)?,
        Some(Commands::Day(args)) => handle_day_command(&settings, args, &mut out)?,
        Some(Commands::Reallocate(args)) => {
            handle_reallocate_command(&settings, args, &mut out)?
        }
        Some(Commands::Validate(args)) => {
            let report = handle_validate_command(&settings, args, &mut out)?;
            if !report.is_valid {
                out.flush()?;
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Period(args)) => {
            handle_period_command(&PeriodService::new(), args, &mut out)?
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                writeln!(
                    out,
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                )?;
            } else {
                settings.save(&paths)?;
                writeln!(out, "Wrote default settings to: {}", paths.settings_file().display())?;
            }
        }
        Some(Commands::Config) => {
            writeln!(out, "budget-pace Configuration")?;
            writeln!(out, "=========================")?;
            writeln!(out, "Config directory: {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out, "Initialized:      {}", paths.is_initialized())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Currency symbol: {}", settings.currency_symbol)?;
            writeln!(out, "  Date format:     {}", settings.date_format)?;
            writeln!(out, "  Default format:  {}", settings.default_format)?;
            writeln!(out, "  Floor spendable: {}", settings.floor_spendable)?;
        }
        None => {
            writeln!(out, "pace - daily spending pace for a budget period")?;
            writeln!(out)?;
            writeln!(out, "Run 'pace --help' for usage information.")?;
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
