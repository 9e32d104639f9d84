use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for CarbTracker
/// CLI application to track carb servings and meal spacing with SQLite
#[derive(Parser)]
#[command(
    name = "carbtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple carb tracking CLI: log meals, watch meal spacing, and stay inside your weekly carb budget using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a meal event
    Add {
        /// Carb servings consumed (0-8)
        #[arg(value_parser = clap::value_parser!(u32).range(0..=8))]
        servings: u32,

        /// Event time as RFC 3339 (default: now)
        #[arg(long = "time", help = "Event time, RFC 3339 (e.g. 2026-08-06T12:30:00Z)")]
        time: Option<String>,

        /// Record even when the last meal was too recent
        #[arg(long = "force", help = "Skip the meal spacing guard")]
        force: bool,
    },

    /// Show elapsed time, serving advice and the weekly budget
    Status,

    /// List recorded meal events
    List {
        /// Filter by year/month/day or a custom range
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)"
        )]
        period: Option<String>,

        /// Show the entire archive instead of the trailing week
        #[arg(long = "all", help = "List all recorded events")]
        all: bool,
    },

    /// Delete meal events
    Del {
        /// Delete a single event by id
        #[arg(long = "id", help = "Event id to delete")]
        id: Option<i64>,

        /// Delete all events of a calendar day (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Run a reminder pass (safe-to-eat / time-to-eat notices)
    Remind,

    /// Delete stale events older than the retention window
    Prune {
        #[arg(
            long,
            default_value_t = 7,
            help = "Remove events older than this many days"
        )]
        days: i64,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export meal event data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
