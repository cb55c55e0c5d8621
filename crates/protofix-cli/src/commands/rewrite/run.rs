//! Rewrite command execution

use std::path::Path;

use anyhow::{Context, Result};
use protofix_core::{rewrite_file, rewrite_tree, Prefix};
use tracing::debug;

/// Run the rewrite command
///
/// A directory input is rewritten file by file into `output`; anything
/// else is treated as a single definition file.
///
/// # Errors
/// Returns an error if any input cannot be read or any output cannot be
/// written.
pub fn run(input: &Path, output: &Path, prefix: &Prefix) -> Result<()> {
    if input.is_dir() {
        debug!("Rewriting tree {} -> {}", input.display(), output.display());
        let stats = rewrite_tree(input, output, prefix)
            .with_context(|| format!("Failed to rewrite directory {}", input.display()))?;
        debug!(
            "Rewrote {} imports in {} files ({} lines)",
            stats.rewritten, stats.files, stats.lines
        );
    } else {
        rewrite_file(input, output, prefix)
            .with_context(|| format!("Failed to rewrite {}", input.display()))?;
    }

    Ok(())
}
