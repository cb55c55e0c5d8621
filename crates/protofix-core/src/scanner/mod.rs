//! Scanner module: Definition file discovery
//!
//! Responsible for walking a directory, including ignored files, and
//! selecting the interface-definition files to rewrite.

mod walker;

pub use walker::{DefinitionFile, Scanner, DEFAULT_EXTENSION};
