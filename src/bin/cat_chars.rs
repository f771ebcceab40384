//! Copies its own source to stdout one byte at a time.
//!
//! usage:
//!
//!   cargo run --bin cat_chars
//!
//! Run from the repository root: it prints the content of this file.

use std::process;

use selfcat::{Config, Mode};

const SOURCE: &str = file!();

fn main() {
    env_logger::init();

    let config = Config::new(SOURCE, Mode::Chars);
    if let Err(err) = selfcat::run(&config) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
