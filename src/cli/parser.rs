use crate::export::ExportFormat;
use crate::models::{FilterMode, PersonField, Status};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rpresence
#[derive(Parser)]
#[command(
    name = "rpresence",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily attendance roster: people, presence marks and CSV export, synced to an API with a local fallback",
    long_about = None
)]
pub struct Cli {
    /// Override the local mirror path (useful for tests or a custom file)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the API base URL
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Never call the API: work on the local mirror only
    #[arg(global = true, long = "offline")]
    pub offline: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the local mirror
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

        #[arg(long = "editor", help = "Editor to use (vim, nano, or a custom path)")]
        editor: Option<String>,
    },

    /// Add a person to the roster
    Add {
        #[arg(long)]
        nom: String,

        #[arg(long)]
        prenom: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, help = "Role / job title")]
        poste: Option<String>,

        #[arg(long = "color", help = "Avatar color, e.g. #10B981")]
        color: Option<String>,
    },

    /// Edit a person (fields not given keep their value)
    Edit {
        /// Person id (prefix with `remote:` or `local:` when both namespaces share it)
        id: String,

        #[arg(long)]
        nom: Option<String>,

        #[arg(long)]
        prenom: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        poste: Option<String>,

        #[arg(long = "color")]
        color: Option<String>,
    },

    /// Change a single cell of a person, as in the table view
    Set {
        /// Person id (prefix with `remote:` or `local:` when both namespaces share it)
        id: String,

        #[arg(value_enum)]
        field: PersonField,

        value: String,
    },

    /// Delete a person and all of their presences
    Del {
        /// Person id (prefix with `remote:` or `local:` when both namespaces share it)
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Mark a person's status for a day
    Mark {
        /// Person id (prefix with `remote:` or `local:` when both namespaces share it)
        id: String,

        #[arg(value_enum)]
        status: Status,

        #[arg(long, help = "Day (YYYY-MM-DD, today, yesterday); default today")]
        date: Option<String>,

        #[arg(long, help = "Notes for the day (kept when omitted)")]
        notes: Option<String>,
    },

    /// Set the notes of a person's day, keeping the status
    Notes {
        /// Person id (prefix with `remote:` or `local:` when both namespaces share it)
        id: String,

        text: String,

        #[arg(long)]
        date: Option<String>,
    },

    /// List the roster for a day
    List {
        #[arg(long)]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        filter: FilterMode,

        #[arg(long, short = 's', help = "Search first/last name, email, role")]
        search: Option<String>,

        #[arg(long = "table", help = "Spreadsheet-like table instead of cards")]
        table: bool,
    },

    /// Show the day's attendance figures
    Stats {
        #[arg(long)]
        date: Option<String>,
    },

    /// Export the roster for a day
    Export {
        #[arg(long)]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default presences_<date>.<ext>)")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Maintain the local mirror database
    Db {
        #[arg(long = "migrate", help = "Run pending migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show mirror contents summary")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
