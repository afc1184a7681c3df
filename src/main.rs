use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finboard::cli::{
    handle_accounts_command, handle_dashboard_command, handle_export_command,
    handle_import_command, handle_report_command, handle_transactions_command,
    handle_validate_command, ExportFormat, ReportCommands, TransactionListArgs,
};
use finboard::config::{paths::FinboardPaths, settings::Settings};
use finboard::storage::Snapshot;

#[derive(Parser)]
#[command(
    name = "finboard",
    author = "Kaylee Beyene",
    version,
    about = "Terminal dashboard for personal-finance API snapshots",
    long_about = "finboard reads the accounts, transactions and categories returned by \
                  a personal-finance API and computes the dashboard figures: total \
                  balance, liquidity and debt, this month's income and expense, and a \
                  six-month cash-flow chart."
)]
struct Cli {
    /// Base directory for settings, snapshots and exports
    #[arg(long, global = true, env = "FINBOARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full dashboard
    #[command(alias = "dash")]
    Dashboard {
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// List accounts, or show one account
    Accounts {
        /// Account ID
        account: Option<String>,
    },

    /// List transactions with API-style filters and pagination
    #[command(alias = "txn")]
    Transactions(TransactionListArgs),

    /// Individual reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the dashboard
    Export {
        /// Output format
        #[arg(value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write to the export directory instead of stdout
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check the snapshot for data contract problems
    Validate {
        /// Exit with an error if any problem is found
        #[arg(long)]
        strict: bool,
    },

    /// Store a saved API response body as a snapshot
    Import {
        /// Collection (accounts, transactions, categories)
        kind: String,
        /// Path to the JSON body
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings file with current values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => FinboardPaths::with_base_dir(dir),
        None => FinboardPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Dashboard { as_of }) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_dashboard_command(&snapshot, &settings, as_of)?;
        }
        Some(Commands::Accounts { account }) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_accounts_command(&snapshot, &settings, account)?;
        }
        Some(Commands::Transactions(args)) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_transactions_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Report(cmd)) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_report_command(&snapshot, &settings, cmd)?;
        }
        Some(Commands::Export {
            format,
            output,
            save,
            as_of,
            pretty,
        }) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_export_command(&paths, &snapshot, &settings, format, output, save, as_of, pretty)?;
        }
        Some(Commands::Validate { strict }) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_validate_command(&snapshot, &settings, strict)?;
        }
        Some(Commands::Import { kind, file }) => {
            handle_import_command(&paths, &kind, &file)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }

            println!("finboard Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!(
                "Snapshot present: {}",
                if paths.has_snapshot() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Month labels:        {:?}", settings.month_labels);
            println!("  Credit balance sign: {:?}", settings.credit_balance_sign);
            println!("  Recent transactions: {}", settings.recent_limit);
            println!("  Page size:           {}", settings.per_page);
            println!("  Chart width:         {}", settings.chart_width);
            println!("  Date format:         {}", settings.date_format);
        }
        None => {
            println!("finboard - personal-finance dashboard");
            println!();
            println!("Run 'finboard --help' for usage information.");
            println!("Run 'finboard dashboard' to see the dashboard.");
        }
    }

    Ok(())
}
