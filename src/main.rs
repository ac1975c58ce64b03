//! ppmlines - rewrite a whitespace-delimited image file into one token per line
//!
//! ppmlines provides:
//! - Line-by-line whitespace tokenization of any text file (plain PPM in practice)
//! - Order-preserving flattening of the tokens into a one-per-line output file
//! - Optional joining of the width/height header fields
//! - A machine-readable run report (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
