use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daily_allowance::audit::AuditLogger;
use daily_allowance::cli::{handle_plan_command, Shell};
use daily_allowance::clock::{Clock, FixedClock, SystemClock};
use daily_allowance::config::{paths::AllowancePaths, settings::Settings};
use daily_allowance::session::Session;

#[derive(Parser)]
#[command(
    name = "allowance",
    version,
    about = "Spread a lump sum evenly until a deadline",
    long_about = "Computes how much you can spend per day to make a sum of money last \
                  until a deadline, records what you spend against that daily \
                  allowance and rolls the unspent part back into the balance."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Treat this date (YYYY-MM-DD) as today instead of the local date
    #[arg(long, global = true, env = "DAILY_ALLOWANCE_TODAY", value_name = "DATE")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive budget session (default)
    Shell,

    /// Compute the daily allowance for a balance and a deadline
    Plan {
        /// Amount to spread (e.g. "100" or "100.00")
        balance: String,
        /// Last day the amount must cover (YYYY-MM-DD)
        deadline: String,
    },

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn clock(today: Option<NaiveDate>) -> Box<dyn Clock> {
    match today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}

fn init_tracing(settings: &Settings, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("daily_allowance=debug,allowance=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AllowancePaths::new()?;
    let settings = Settings::load_or_create(&paths)
        .with_context(|| format!("loading {}", paths.settings_file().display()))?;

    init_tracing(&settings, cli.verbose);
    tracing::debug!(base_dir = %paths.base_dir().display(), "Settings loaded");
    if let Some(today) = cli.today {
        tracing::debug!(%today, "Using fixed date");
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut session = Session::new(settings.spend_policy, clock(cli.today))
                .with_history_limit(settings.history_limit);
            if settings.audit_log_enabled {
                session = session.with_audit_logger(AuditLogger::new(paths.audit_log()));
            }

            let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
            Shell::new(session, &settings).run(io::stdin().lock(), io::stdout().lock(), interactive)?;
        }
        Commands::Plan { balance, deadline } => {
            let report = handle_plan_command(&settings, clock(cli.today).as_ref(), &balance, &deadline)?;
            print!("{}", report);
        }
        Commands::Config { save } => {
            if save {
                settings
                    .save(&paths)
                    .with_context(|| format!("writing {}", paths.settings_file().display()))?;
            }

            println!("daily-allowance Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Spend policy:      {}", settings.spend_policy);
            println!("  Audit log enabled: {}", settings.audit_log_enabled);
            println!("  History limit:     {}", settings.history_limit);
            println!("  Log level:         {}", settings.log_level);
            if save {
                println!();
                println!("Settings written to {}", paths.settings_file().display());
            }
        }
    }

    Ok(())
}
