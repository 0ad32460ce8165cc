//! PrefStore CLI - command-line interface
//!
//! This binary is a thin host around the `prefstore` library: it performs
//! the preference bootstrap on startup and exposes the store's operations
//! as subcommands.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use commands::common::{GlobalOpts, ValueType};
use error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "prefstore",
    version,
    about = "Effortless, typed key-value preference storage"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read a preference value
    Get {
        /// Key to look up
        key: String,

        /// Value to print when the key is not set
        #[arg(long)]
        default: Option<String>,
    },

    /// Write a preference value
    Set {
        /// Key to write
        key: String,

        /// Value to store
        value: String,

        /// Force the stored type instead of inferring it
        #[arg(long = "type", value_enum)]
        value_type: Option<ValueType>,
    },

    /// Remove a preference value
    Remove {
        /// Key to remove
        key: String,
    },

    /// Check whether a key is stored
    Contains {
        /// Key to check
        key: String,
    },

    /// List all stored preferences
    List,

    /// Remove every stored preference
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the store file path
    Path,

    /// Create the store file and report its location
    Init,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.global.verbose { "debug" } else { "warn" };
    prefstore::logging::init(default_filter);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", console::style("error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Startup hook: bootstrap the preference store before running any command.
    let app = commands::common::bootstrap(&cli.global)?;
    let prefs = app.prefs();

    match cli.command {
        Commands::Get { key, default } => commands::store::run_get(&prefs, &key, default.as_deref()),
        Commands::Set {
            key,
            value,
            value_type,
        } => commands::store::run_set(&prefs, &key, &value, value_type),
        Commands::Remove { key } => commands::store::run_remove(&prefs, &key),
        Commands::Contains { key } => commands::store::run_contains(&prefs, &key),
        Commands::List => commands::store::run_list(&prefs),
        Commands::Clear { yes } => commands::store::run_clear(&prefs, yes),
        Commands::Path => commands::store::run_path(&prefs),
        Commands::Init => commands::init::run(&prefs),
    }
}
