use anyhow::Result;
use clap::{Parser, Subcommand};
use poo_learning::commands::{
    exports_command, get_command, info_command, name_command, version_command,
};
use poo_learning::init_logging;

/// Report the identity metadata of poo_python_learning.
///
/// This CLI is a thin wrapper around `poo-learning-core` (exposed in code as
/// `poo_learning_core`), which owns the name, version and export list.
#[derive(Parser, Debug)]
#[command(name = "poo-learning", version, about = "Report package identity metadata", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the `name vVERSION` banner (default).
    Info {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the application name.
    Name {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the version string.
    Version {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List every exported metadata constant with its value.
    Exports {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the value of one exported constant (e.g. `APP_NAME`).
    Get {
        /// Exported name to look up.
        name: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    // Default to the Info command if none is provided.
    match cli.command.unwrap_or(Command::Info { json: false }) {
        Command::Info { json } => info_command(json)?,
        Command::Name { json } => name_command(json)?,
        Command::Version { json } => version_command(json)?,
        Command::Exports { json } => exports_command(json)?,
        Command::Get { name, json } => get_command(&name, json)?,
    }

    Ok(())
}
