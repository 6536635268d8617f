use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense::config::{Settings, TrackerPaths};
use expense::display::{format_ledger, LedgerReport};
use expense::ledger::Ledger;
use expense::logging::init_tracing;
use expense::models::TransactionId;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal expense tracker",
    long_about = "Track income and expenses for a session. Positive amounts are \
                  income, negative amounts are expenses, and the balance is \
                  always the sum of every entry."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the ledger and its totals
    Summary {
        /// Add a transaction, as DESCRIPTION=AMOUNT (repeatable)
        #[arg(short, long, value_name = "DESC=AMOUNT", value_parser = parse_entry)]
        add: Vec<(String, String)>,

        /// Delete a transaction by id, applied after adds (repeatable)
        #[arg(short, long, value_name = "ID")]
        delete: Vec<TransactionId>,

        /// Start from an empty ledger instead of the sample entries
        #[arg(long)]
        empty: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

/// Split `DESCRIPTION=AMOUNT` at the last `=`
fn parse_entry(raw: &str) -> Result<(String, String), String> {
    raw.rsplit_once('=')
        .map(|(text, amount)| (text.to_string(), amount.to_string()))
        .ok_or_else(|| format!("expected DESCRIPTION=AMOUNT, got `{}`", raw))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    init_tracing(&paths).context("Failed to initialize logging")?;
    let loaded = Settings::load_or_create(&paths);

    if matches!(cli.command, None | Some(Commands::Tui)) {
        // A broken config file still opens the TUI, with defaults and an alert
        let (settings, startup_error) = match loaded {
            Ok(settings) => (settings, None),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default settings");
                (Settings::default(), Some(e))
            }
        };
        return expense::tui::run_tui(&settings, startup_error);
    }

    let settings = loaded?;
    match cli.command {
        None | Some(Commands::Tui) => {}
        Some(Commands::Summary {
            add,
            delete,
            empty,
            json,
        }) => run_summary(&settings, &add, &delete, empty, json)?,
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Theme:              {}", settings.theme);
            println!("  Seed sample data:   {}", settings.seed_sample_data);
            println!("  Tick rate (ms):     {}", settings.tick_rate_ms);
            println!("  Notification (s):   {}", settings.notification_secs);
        }
    }

    Ok(())
}

fn run_summary(
    settings: &Settings,
    adds: &[(String, String)],
    deletes: &[TransactionId],
    empty: bool,
    json: bool,
) -> Result<()> {
    let mut ledger = if empty || !settings.seed_sample_data {
        Ledger::new()
    } else {
        Ledger::with_sample_data()
    };

    for (text, amount) in adds {
        if let Err(e) = ledger.add(text, amount) {
            eprintln!("Warning: {}", e);
        }
    }

    for id in deletes {
        if ledger.delete(*id).is_none() {
            eprintln!("Note: no transaction with id {}", id);
        }
    }

    if json {
        let report = LedgerReport::new(&ledger);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_ledger(&ledger, &settings.currency_symbol));
    }

    Ok(())
}
