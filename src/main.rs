use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use selfcat::{Config, Mode, DEFAULT_BLOCK_SIZE};

#[derive(Parser, Debug)]
#[clap(name = "selfcat")]
#[clap(about = "Copy a file's bytes to standard output", long_about = None)]
struct Cli {
    #[clap(
        short,
        long,
        value_enum,
        default_value_t = Mode::Blocks,
        help = "I/O granularity used for the copy"
    )]
    mode: Mode,
    #[clap(
        short,
        long,
        default_value_t = DEFAULT_BLOCK_SIZE,
        help = "Bytes per read in blocks and raw modes"
    )]
    block_size: usize,
    #[clap(
        value_parser,
        help = "File to copy (defaults to this program's source)"
    )]
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let path = args.path.unwrap_or_else(|| PathBuf::from(file!()));

    let config = Config::new(path, args.mode)
        .with_block_size(args.block_size)?;
    selfcat::run(&config).with_context(|| {
        format!("Couldn't copy {}", config.path().display())
    })?;

    Ok(())
}
