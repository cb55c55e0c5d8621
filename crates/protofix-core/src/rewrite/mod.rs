//! Rewrite module: Prefix import paths in definition files
//!
//! Works at three levels: a single stream (`rewrite`), a single file
//! (`rewrite_file`) and a directory tree of definition files
//! (`rewrite_tree`).

mod error;
mod file;
mod matcher;
mod prefix;
mod stream;

pub use error::RewriteError;
pub use file::{rewrite_file, rewrite_tree, TreeStats};
pub use matcher::ImportDeclaration;
pub use prefix::Prefix;
pub use stream::{rewrite, RewriteStats};

#[cfg(test)]
mod tests;
