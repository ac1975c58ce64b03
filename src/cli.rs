//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::diag::{Diagnostics, Verbosity};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::rewrite::RewriteOptions;

/// ppmlines - put one whitespace-separated token per line.
#[derive(Parser, Debug)]
#[command(name = "ppmlines")]
#[command(
    author,
    version,
    about,
    long_about = r#"ppmlines reads INPUT, splits every line on whitespace and writes each
token to OUTPUT on its own line, preserving the original order.

The typical input is a plain-text (P3) PPM image. Header fields are tokenized
exactly like pixel data, so a reader that expects `WIDTH HEIGHT` on the second
line needs the second and third output lines joined with a space. Either do
that by hand or pass --join-header.

Examples:
    ppmlines envmap.ppm envmap.lines
    ppmlines envmap.ppm envmap.lines --join-header
    ppmlines envmap.ppm envmap.lines --stats --format md
"#
)]
pub struct Cli {
    /// Input file to tokenize.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (created or truncated).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Write the second and third tokens on one line, separated by a space.
    #[arg(
        long,
        long_help = "Write the second and third tokens on a single line separated by one space.\n\n\
For a PPM input this restores the `WIDTH HEIGHT` header line, so the output can be\n\
fed directly to a reader that skips three header lines. Without this flag the\n\
output has strictly one token per line."
    )]
    pub join_header: bool,

    /// Print a run report to stdout after a successful rewrite.
    #[arg(
        long,
        long_help = "Print a run report (token count, lines read, bytes written, xxh3 digest)\n\
to stdout after the output file has been written. Rendered with --format."
    )]
    pub stats: bool,

    /// Report format (jsonl/json/md/raw).
    #[arg(
        long,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the format of the --stats report.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL report output.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored diagnostics.
    #[arg(
        long,
        long_help = "Disable colored output on stderr. Useful when redirecting diagnostics\n\
to a file or when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no warnings).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (phase-by-phase diagnostics).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    if cli.no_color {
        colored::control::set_override(false);
    }
    let diag = Diagnostics::new(Verbosity::from_flags(cli.quiet, cli.verbose));

    let options = RewriteOptions {
        join_header: cli.join_header,
    };

    crate::flows::rewrite::run_rewrite(
        &cli.input,
        &cli.output,
        &options,
        cli.stats,
        render_config,
        &diag,
    )
}
