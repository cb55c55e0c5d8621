//! Rewrite module: Run the import-path rewriter on a file or directory

mod run;

pub use run::run;
