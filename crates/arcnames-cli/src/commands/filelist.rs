//! `arcnames filelist`

use crate::config::FilelistArgs;
use anyhow::{Context, Result};
use arcnames_catalog::{HashIndex, HintCorpus, MissingSourcePolicy, RecoveryPipeline};
use tracing::{info, warn};

/// Run the full recovery pipeline and write every artifact
pub fn handle(args: &FilelistArgs, policy: MissingSourcePolicy) -> Result<()> {
    let corpus = HintCorpus::load(&args.filelists, policy).context("failed to load hints")?;
    if !corpus.skipped().is_empty() {
        warn!(skipped = corpus.skipped().len(), "some hint files were skipped");
    }
    let index = HashIndex::from_corpus(&corpus);
    info!(
        hints = corpus.len(),
        names = index.len(),
        collisions = index.collisions(),
        "built hash index"
    );

    let output = RecoveryPipeline::new(args.game.profile(), &args.path)
        .with_policy(policy)
        .run(&index)
        .with_context(|| format!("failed to resolve archives under {}", args.path.display()))?;

    let filelist_dir = args.filelist_dir();
    output
        .write_filelists(&filelist_dir)
        .context("failed to write filelists")?;

    let dictionary_path = args.dictionary_path();
    output
        .dictionary
        .save(&dictionary_path, args.pretty, !args.no_hash)
        .context("failed to write dictionary")?;

    let total = &output.coverage.total;
    info!(
        "{} hints provided. {} Found, {} Unknown. ({}%)",
        total.total,
        total.found,
        total.not_found,
        total.percentage()
    );
    Ok(())
}
