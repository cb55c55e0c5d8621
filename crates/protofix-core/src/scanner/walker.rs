//! File walker: Discovers definition files in a directory tree

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::rewrite::RewriteError;

/// Extension of protobuf definition files
pub const DEFAULT_EXTENSION: &str = "proto";

/// A definition file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionFile {
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative_path: PathBuf,
}

/// Scanner for discovering definition files in a directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    extensions: Vec<String>,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }

    /// Replace the set of file extensions to select
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a path has one of the selected extensions
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Scan the directory and return discovered files, sorted by path
    ///
    /// Hidden files and files excluded by `.gitignore` or `.ignore` are
    /// included; only `.git` directories are skipped.
    ///
    /// # Errors
    /// Returns an error if any directory entry cannot be read.
    pub fn scan(&self) -> Result<Vec<DefinitionFile>, RewriteError> {
        let mut files = Vec::new();

        // Generated definitions are often gitignored but still imported
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .filter_entry(|entry| entry.file_name() != ".git")
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if !self.matches(&path) {
                continue;
            }
            let Ok(relative_path) = path.strip_prefix(&self.root).map(Path::to_path_buf) else {
                continue;
            };
            files.push(DefinitionFile {
                path,
                relative_path,
            });
        }

        Ok(files)
    }
}
