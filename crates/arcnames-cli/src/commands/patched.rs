//! `arcnames patched`

use crate::config::PatchedArgs;
use anyhow::{Context, Result};
use arcnames_catalog::{MissingSourcePolicy, PatchScanner, load_document};
use tracing::info;

/// Scan entity TOCs for patch-only names
pub fn handle(args: &PatchedArgs, policy: MissingSourcePolicy) -> Result<()> {
    let document = load_document(&args.dictionary).context(
        "failed to read dictionary; run `arcnames filelist` or `arcnames dictionary` first",
    )?;

    let output = PatchScanner::new(args.game.profile(), &args.path)
        .with_policy(policy)
        .run(&document)
        .context("patch discovery failed")?;
    output
        .save(&args.generated_out, &args.patched_out)
        .context("failed to write discovered hints")?;

    info!("finished; add the generated hints and rebuild the dictionary");
    Ok(())
}
