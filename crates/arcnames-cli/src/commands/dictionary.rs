//! `arcnames dictionary`

use crate::config::DictionaryArgs;
use anyhow::{Context, Result};
use arcnames_catalog::{MissingSourcePolicy, filelist::dictionary_from_filelists};

/// Rebuild the dictionary from a filelist tree
pub fn handle(args: &DictionaryArgs, policy: MissingSourcePolicy) -> Result<()> {
    let dictionary = dictionary_from_filelists(&args.filelists, args.game.profile(), policy)
        .with_context(|| format!("failed to read filelists under {}", args.filelists.display()))?;
    dictionary
        .save(&args.output, args.pretty, !args.no_hash)
        .context("failed to write dictionary")
}
