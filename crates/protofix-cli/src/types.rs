//! Command-line arguments shared between main and library

use std::path::PathBuf;

use clap::Parser;
use protofix_core::Prefix;

#[derive(Debug, Parser)]
#[command(name = "protofix")]
#[command(
    author,
    version,
    about = "Prefix import paths in .proto files relocated under a package",
    long_about = "Rewrites every line of the form `import \"<path>\";` to \
                  `import \"<prefix>/<path>\";`, leaving all other lines untouched. \
                  When INPUT is a directory every .proto file below it is rewritten \
                  into the same relative location under OUTPUT."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Definition file (or directory of .proto files) to read
    pub input: PathBuf,

    /// Destination file (or directory when INPUT is a directory)
    pub output: PathBuf,

    /// Namespace segment to prepend to every imported path
    pub prefix: Prefix,
}
