//! Copies its own source to stdout in 100-byte blocks through buffered streams.
//!
//! usage:
//!
//!   cargo run --bin cat_blocks
//!
//! Run from the repository root: it prints the content of this file.

use std::process;

use selfcat::{Config, Mode};

const SOURCE: &str = file!();

fn main() {
    env_logger::init();

    let config = Config::new(SOURCE, Mode::Blocks);
    if let Err(err) = selfcat::run(&config) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
