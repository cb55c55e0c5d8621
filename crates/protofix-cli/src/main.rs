//! protofix: Prefix import paths in relocated .proto files

use clap::Parser;
use protofix_cli::{commands, logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    commands::rewrite::run(&cli.input, &cli.output, &cli.prefix)
}
