use clap::{Parser, Subcommand};

/// Command-line interface definition for rbooking
/// CLI application to keep a local booking calendar in SQLite
#[derive(Parser)]
#[command(
    name = "rbooking",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local booking calendar: record, view and delete date-range reservations stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second calendar)
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

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Database maintenance (migrations, integrity checks, etc.)
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new booking
    Add {
        /// First day of the stay (YYYY-MM-DD)
        #[arg(long = "from")]
        from: String,

        /// Last day of the stay (YYYY-MM-DD)
        #[arg(long = "to")]
        to: String,

        /// Guest name
        #[arg(long = "name")]
        name: String,

        #[arg(long = "contact", help = "Phone, e-mail or any contact note")]
        contact: Option<String>,

        #[arg(long = "notes", help = "Free-text notes")]
        notes: Option<String>,
    },

    /// List bookings sorted by start date
    List {
        #[arg(long = "all", help = "Include bookings that already ended")]
        all: bool,

        #[arg(long = "json", help = "Print bookings as JSON")]
        json: bool,
    },

    /// Show a month as a calendar grid with booking markers
    Calendar {
        #[arg(long = "month", help = "Month to show (YYYY-MM), default: current month")]
        month: Option<String>,
    },

    /// Show one booking in detail
    Show {
        /// Booking id
        #[arg(required_unless_present = "day", conflicts_with = "day")]
        id: Option<i64>,

        #[arg(
            long = "day",
            help = "Show the first booking covering this day (YYYY-MM-DD)"
        )]
        day: Option<String>,
    },

    /// Open the calendar or list view (invalid values fall back to calendar)
    View {
        /// calendar | list
        mode: Option<String>,

        #[arg(long = "month", help = "Month for the calendar view (YYYY-MM)")]
        month: Option<String>,
    },

    /// Delete one booking, or all of them
    Del {
        /// Booking id
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<i64>,

        #[arg(long = "all", help = "Delete every booking (irreversible)")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip archive instead of a plain copy")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
