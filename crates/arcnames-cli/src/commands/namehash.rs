//! `arcnames namehash`

use crate::config::NamehashArgs;
use anyhow::{Context, Result};
use arcnames_catalog::{MissingSourcePolicy, NameHashLookup};

/// Write the hash-keyed lookup
pub fn handle(args: &NamehashArgs, policy: MissingSourcePolicy) -> Result<()> {
    let lookup =
        NameHashLookup::from_hint_files(&args.hints, policy).context("failed to load hints")?;
    lookup
        .save(&args.output, args.pretty)
        .context("failed to write name hash lookup")
}
