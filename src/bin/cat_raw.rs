//! Copies its own source to descriptor 1 in 100-byte blocks read with `read(2)`.
//!
//! usage:
//!
//!   cargo run --bin cat_raw
//!
//! Run from the repository root: it prints the content of this file.

use std::process;

use selfcat::{Config, Mode};

const SOURCE: &str = file!();

fn main() {
    env_logger::init();

    let config = Config::new(SOURCE, Mode::Raw);
    if let Err(err) = selfcat::run(&config) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
