//! Command-line configuration.
//!
//! Every option can also be given through an `ARCNAMES_*` environment
//! variable, which is how batch scripts usually drive the tool.
//!
//! # Example
//!
//! ```no_run
//! use arcnames_cli::Cli;
//!
//! let cli = Cli::from_args();
//! cli.validate().expect("Invalid configuration");
//! ```

use crate::error::ConfigError;
use arcnames_catalog::{Game, MissingSourcePolicy};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Recover archive file names from hint corpora.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "arcnames",
    about = "Recover file names from hash-addressed TAB/ARC game archives",
    version
)]
pub struct Cli {
    /// Abort on missing hint files or archive directories instead of
    /// skipping them
    #[arg(long, global = true, env = "ARCNAMES_STRICT")]
    pub strict: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "ARCNAMES_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Resolve every archive of a game and write filelists and the dictionary
    Filelist(FilelistArgs),

    /// Rebuild the dictionary from previously written filelists
    Dictionary(DictionaryArgs),

    /// Write the hash-keyed name lookup from hint files
    Namehash(NamehashArgs),

    /// Discover patch-only names through entity TOCs
    Patched(PatchedArgs),
}

/// Options of `arcnames filelist`
#[derive(Debug, Clone, Args)]
pub struct FilelistArgs {
    /// Game selector (jc3 / jc4)
    #[arg(long, env = "ARCNAMES_GAME", default_value = "jc3")]
    pub game: Game,

    /// Root of the game installation
    #[arg(long, env = "ARCNAMES_GAME_PATH")]
    pub path: PathBuf,

    /// Hint files, later files win on hash collision
    #[arg(long = "filelist", required = true, num_args = 1..)]
    pub filelists: Vec<PathBuf>,

    /// Output root; filelists go to `<out>/<game>/filelist`
    #[arg(long, env = "ARCNAMES_OUT", default_value = "assets")]
    pub out: PathBuf,

    /// Dictionary output file [default: `<out>/<game>/dictionary.json`]
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Leave the hash out of dictionary entries
    #[arg(long)]
    pub no_hash: bool,
}

impl FilelistArgs {
    /// Directory receiving the filelists and `status.txt`
    pub fn filelist_dir(&self) -> PathBuf {
        self.out.join(self.game.name()).join("filelist")
    }

    /// Dictionary output path
    pub fn dictionary_path(&self) -> PathBuf {
        self.dictionary
            .clone()
            .unwrap_or_else(|| self.out.join(self.game.name()).join("dictionary.json"))
    }
}

/// Options of `arcnames dictionary`
#[derive(Debug, Clone, Args)]
pub struct DictionaryArgs {
    /// Game selector (jc3 / jc4)
    #[arg(long, env = "ARCNAMES_GAME", default_value = "jc3")]
    pub game: Game,

    /// Root of the filelist tree
    #[arg(long)]
    pub filelists: PathBuf,

    /// Dictionary output file
    #[arg(long, default_value = "dictionary.json")]
    pub output: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Leave the hash out of dictionary entries
    #[arg(long)]
    pub no_hash: bool,
}

/// Options of `arcnames namehash`
#[derive(Debug, Clone, Args)]
pub struct NamehashArgs {
    /// Hint files in order; put hand-maintained hints last
    #[arg(long = "hints", required = true, num_args = 1..)]
    pub hints: Vec<PathBuf>,

    /// Lookup output file
    #[arg(long, default_value = "namehashlookup.json")]
    pub output: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Options of `arcnames patched`
#[derive(Debug, Clone, Args)]
pub struct PatchedArgs {
    /// Game selector (jc3 / jc4)
    #[arg(long, env = "ARCNAMES_GAME", default_value = "jc3")]
    pub game: Game,

    /// Root of the game installation
    #[arg(long, env = "ARCNAMES_GAME_PATH")]
    pub path: PathBuf,

    /// Dictionary written by a previous run
    #[arg(long)]
    pub dictionary: PathBuf,

    /// Output for generated `.toc` names
    #[arg(long, default_value = "generated.txt")]
    pub generated_out: PathBuf,

    /// Output for names found with the patched sentinel
    #[arg(long, default_value = "patched.txt")]
    pub patched_out: PathBuf,
}

impl Cli {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Policy for missing inputs.
    pub const fn missing_source_policy(&self) -> MissingSourcePolicy {
        MissingSourcePolicy::from_strict(self.strict)
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - A game root or filelist tree is not a directory
    /// - An input dictionary is not a file
    /// - No hint files are given
    ///
    /// Hint files themselves are not checked here; their absence is subject
    /// to the missing-source policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.command {
            Commands::Filelist(args) => {
                require_dir("game path", &args.path)?;
                if args.filelists.is_empty() {
                    return Err(ConfigError::MissingRequired("--filelist".to_string()));
                }
            }
            Commands::Dictionary(args) => require_dir("filelist directory", &args.filelists)?,
            Commands::Namehash(args) => {
                if args.hints.is_empty() {
                    return Err(ConfigError::MissingRequired("--hints".to_string()));
                }
            }
            Commands::Patched(args) => {
                require_dir("game path", &args.path)?;
                require_file("dictionary", &args.dictionary)?;
            }
        }
        Ok(())
    }
}

fn require_dir(what: &'static str, path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingPath {
            what,
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ConfigError::WrongKind {
            what,
            expected: "directory",
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn require_file(what: &'static str, path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingPath {
            what,
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(ConfigError::WrongKind {
            what,
            expected: "file",
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
