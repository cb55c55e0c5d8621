//! protofix-core: Import-path rewriting for interface-definition files
//!
//! Generated protobuf code resolves cross-file imports relative to the
//! package the `.proto` files are compiled from. When a set of definition
//! files is relocated under a package prefix, every `import "<path>";`
//! line has to be rewritten to `import "<prefix>/<path>";` for the
//! generated modules to find each other.
//!
//! The rewrite is a narrow, line-by-line substitution: only lines that are
//! exactly an import declaration starting at column zero are touched, and
//! every other byte is copied through unchanged.

pub mod rewrite;
pub mod scanner;

// Re-export commonly used types
pub use rewrite::{
    rewrite, rewrite_file, rewrite_tree, ImportDeclaration, Prefix, RewriteError, RewriteStats,
    TreeStats,
};
pub use scanner::{DefinitionFile, Scanner};
