//! File and directory drivers for the stream rewriter

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use super::{rewrite, Prefix, RewriteError, RewriteStats};
use crate::scanner::{DefinitionFile, Scanner};

/// Totals for a directory rewrite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub files: usize,
    pub lines: usize,
    pub rewritten: usize,
}

impl TreeStats {
    fn add(&mut self, stats: RewriteStats) {
        self.files += 1;
        self.lines += stats.lines;
        self.rewritten += stats.rewritten;
    }
}

/// Rewrite a single file into `output_path`
///
/// The input is opened before the output is created, so a missing input
/// never leaves an empty output file behind. An output that resolves to the
/// input file is refused before it is truncated.
///
/// # Errors
/// Returns an error if the input cannot be opened, the output is the input,
/// the output cannot be created, or any read or write fails.
pub fn rewrite_file(
    input_path: &Path,
    output_path: &Path,
    prefix: &Prefix,
) -> Result<RewriteStats, RewriteError> {
    let input = File::open(input_path).map_err(|source| RewriteError::Open {
        path: input_path.to_path_buf(),
        source,
    })?;
    if output_path.exists() && is_same_path(input_path, output_path) {
        return Err(RewriteError::OutputIsInput {
            path: output_path.to_path_buf(),
        });
    }
    let output = File::create(output_path).map_err(|source| RewriteError::Create {
        path: output_path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(output);
    let stats = rewrite(BufReader::new(input), &mut writer, prefix)?;
    writer.flush()?;

    debug!(
        "Rewrote {} -> {}: {} of {} lines",
        input_path.display(),
        output_path.display(),
        stats.rewritten,
        stats.lines
    );
    Ok(stats)
}

/// Rewrite every definition file under `input_dir` into the same relative
/// location under `output_dir`, creating directories as needed.
///
/// `output_dir` may live inside `input_dir`; files already under it are not
/// picked up again. Stops at the first failing file.
///
/// # Errors
/// Returns an error if `input_dir` cannot be resolved, `output_dir` is the
/// same directory, the tree cannot be walked, or any file fails to rewrite.
pub fn rewrite_tree(
    input_dir: &Path,
    output_dir: &Path,
    prefix: &Prefix,
) -> Result<TreeStats, RewriteError> {
    let input_root = input_dir
        .canonicalize()
        .map_err(|source| RewriteError::Open {
            path: input_dir.to_path_buf(),
            source,
        })?;
    let output_root = fs::create_dir_all(output_dir)
        .and_then(|()| output_dir.canonicalize())
        .map_err(|source| RewriteError::Create {
            path: output_dir.to_path_buf(),
            source,
        })?;
    if input_root == output_root {
        return Err(RewriteError::OutputIsInput {
            path: output_dir.to_path_buf(),
        });
    }

    // Output nested below the input, relative to the input root
    let nested_output = output_root.strip_prefix(&input_root).ok();

    let files: Vec<DefinitionFile> = Scanner::new(input_dir)
        .scan()?
        .into_iter()
        .filter(|file| match nested_output {
            Some(nested) if file.relative_path.starts_with(nested) => {
                debug!("Skipping {}: inside output directory", file.path.display());
                false
            }
            _ => true,
        })
        .collect();
    info!(
        "Found {} definition files in {}",
        files.len(),
        input_dir.display()
    );

    let mut totals = TreeStats::default();
    for file in &files {
        let target = output_dir.join(&file.relative_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| RewriteError::Create {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        totals.add(rewrite_file(&file.path, &target, prefix)?);
    }

    info!(
        "✓ Rewrote {} imports across {} files",
        totals.rewritten, totals.files
    );
    Ok(totals)
}

fn is_same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
