use crate::core::MarkerMode;
use crate::export::ExportFormat;
use crate::models::{RecordKind, SearchField};
use clap::{Parser, Subcommand};

/// Command-line interface definition for tourdesk
#[derive(Parser)]
#[command(
    name = "tourdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tour-operations desk: bookings, shifts, guide applications and buses grouped by day",
    long_about = None
)]
pub struct Cli {
    /// Override the records snapshot path (useful for tests or ad-hoc files)
    #[arg(global = true, long = "records", value_name = "FILE")]
    pub records: Option<String>,

    /// Override the reference time zone (UTC, local, or an IANA name)
    #[arg(global = true, long = "tz", value_name = "ZONE")]
    pub tz: Option<String>,

    /// Run in test mode (no config file writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// List records day by day
    List {
        /// YYYY, YYYY-MM, YYYY-MM-DD or start:end; defaults to the current month
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, short, value_enum)]
        kind: Option<RecordKind>,
    },

    /// Per-day counts, status breakdown and total passengers/participants
    Summary {
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, short, value_enum)]
        kind: Option<RecordKind>,

        /// Include days without records
        #[arg(long = "all-days")]
        all_days: bool,
    },

    /// Month calendar with per-day markers
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, short, value_enum)]
        kind: Option<RecordKind>,

        #[arg(long, value_enum)]
        mode: Option<MarkerMode>,

        #[arg(long = "max-dots")]
        max_dots: Option<usize>,
    },

    /// Case-insensitive search by code, name, email...
    Search {
        query: String,

        /// Fields to match (repeatable); defaults to the configured list
        #[arg(long = "field", short = 'f', value_enum)]
        fields: Vec<SearchField>,

        /// Restrict the search to a period; defaults to the whole snapshot
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, short, value_enum)]
        kind: Option<RecordKind>,
    },

    /// Export per-day summaries
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

        #[arg(long, short, value_enum)]
        kind: Option<RecordKind>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
