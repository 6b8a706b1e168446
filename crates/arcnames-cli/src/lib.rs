//! Command-line front end for archive name recovery
//!
//! The binary is a thin wrapper: [`Cli`] parses and validates arguments, and
//! [`run`] dispatches to one handler per subcommand. Handlers report errors
//! through `anyhow` with context naming the step that failed.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{Cli, Commands, DictionaryArgs, FilelistArgs, NamehashArgs, PatchedArgs};
pub use error::ConfigError;

/// Execute the selected subcommand
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let policy = cli.missing_source_policy();
    match &cli.command {
        Commands::Filelist(args) => commands::filelist::handle(args, policy),
        Commands::Dictionary(args) => commands::dictionary::handle(args, policy),
        Commands::Namehash(args) => commands::namehash::handle(args, policy),
        Commands::Patched(args) => commands::patched::handle(args, policy),
    }
}
