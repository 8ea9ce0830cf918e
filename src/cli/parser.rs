use crate::export::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// Visitor and newcomer check-in kiosk backed by SQLite
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A check-in kiosk CLI: register visitors and newcomers, find rooms and review daily visits",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the local cache file (current user, selected room)
    #[arg(global = true, long = "cache")]
    pub cache: Option<String>,

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

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Register a visitor or a newcomer
    Register {
        #[command(subcommand)]
        kind: RegisterKind,
    },

    /// Forget the currently registered user
    Logout,

    /// Browse the room directory and show wayfinding
    Rooms {
        #[arg(long = "list", help = "List every room of the directory")]
        list: bool,

        #[arg(long = "select", value_name = "ROOM", help = "Select a room by id or name")]
        select: Option<String>,

        #[arg(long = "show", help = "Show wayfinding for the selected room")]
        show: bool,

        #[arg(long = "clear", help = "Clear the selected room")]
        clear: bool,
    },

    /// Calendar of visits over two months, with the entries of a selected day
    History {
        #[arg(long, help = "First displayed month (1-12, default: current month)")]
        month: Option<u32>,

        #[arg(long, help = "Displayed year (default: current year)")]
        year: Option<i32>,

        #[arg(long, help = "Role filter: All, Newcomer or Visitor")]
        role: Option<String>,

        #[arg(
            long,
            value_name = "DAY",
            help = "Select a day: YYYY-MM-DD, or a day number of the first month"
        )]
        day: Option<String>,

        #[arg(
            long = "from-json",
            value_name = "FILE",
            help = "Read visit records from a JSON array instead of the database"
        )]
        from_json: Option<String>,

        #[arg(long, help = "Export the daily report of the selected day")]
        export: bool,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ReportFormat,

        #[arg(long = "out-dir", value_name = "DIR", help = "Report directory (default: report_dir)")]
        out_dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing report without asking")]
        force: bool,
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum RegisterKind {
    /// Register a visitor
    Visitor {
        #[arg(long)]
        name: String,

        #[arg(long)]
        purpose: Option<String>,

        #[arg(long, help = "Office to visit")]
        office: Option<String>,
    },

    /// Register a newcomer
    Newcomer {
        #[arg(long)]
        name: String,

        #[arg(long, help = "College or High School")]
        department: String,

        #[arg(long = "year-level", help = "Grade 7..Grade 12, 1st Year..4th Year")]
        year_level: String,
    },
}
