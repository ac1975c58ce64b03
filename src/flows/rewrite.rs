//! Rewrite flow - Tokenize an input file into one token per output line
//!
//! Two sequential phases:
//! 1) read the whole input and tokenize it in memory
//! 2) create/truncate the output and write every token followed by `\n`
//!
//! A failure in phase 1 leaves the output untouched. A failure in phase 2
//! may leave a partially written output in place.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::core::diag::Diagnostics;
use crate::core::error::RewriteError;
use crate::core::file_reader::{open_output, read_input};
use crate::core::model::{Meta, RewriteReport};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::tokenizer::TokenSequence;
use crate::core::util::{hash_bytes, preview_tokens};

/// Tokens shown in the report preview
const PREVIEW_TOKENS: usize = 12;

/// Options for a rewrite run
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    /// Put the second and third tokens on one line (`WIDTH HEIGHT`)
    pub join_header: bool,
}

/// Tokenize `input` and write one token per line to `output`.
///
/// The plain two-phase rewrite: no header join and nothing on stderr.
pub fn transform(input: &Path, output: &Path) -> Result<RewriteReport, RewriteError> {
    transform_with(input, output, &RewriteOptions::default(), &Diagnostics::silent())
}

/// Same as [`transform`], with options and diagnostics.
pub fn transform_with(
    input: &Path,
    output: &Path,
    options: &RewriteOptions,
    diag: &Diagnostics,
) -> Result<RewriteReport, RewriteError> {
    diag.step(format!("reading {}", input.display()));
    let text = read_input(input)?;

    let seq = TokenSequence::from_text(&text);
    diag.step(format!(
        "{} tokens from {} lines ({} blank)",
        seq.len(),
        seq.lines_read(),
        seq.blank_lines()
    ));

    let header_joined = options.join_header && seq.can_join_header();
    if options.join_header && !header_joined {
        diag.warn(format!(
            "--join-header needs at least 3 tokens, found {}; writing one token per line",
            seq.len()
        ));
    }

    let rendered = seq.render(header_joined);

    diag.step(format!("writing {}", output.display()));
    let output_error = |source| RewriteError::OutputAccess {
        path: output.to_path_buf(),
        source,
    };
    let mut writer = open_output(output)?;
    writer.write_all(rendered.as_bytes()).map_err(output_error)?;
    writer.flush().map_err(output_error)?;

    let (preview, truncated) = preview_tokens(seq.tokens(), PREVIEW_TOKENS);
    let mut report = RewriteReport::new(
        input.display().to_string(),
        output.display().to_string(),
    )
    .with_preview(preview)
    .with_meta(Meta {
        size: rendered.len() as u64,
        hash: hash_bytes(rendered.as_bytes()),
        truncated,
    });
    report.lines_read = seq.lines_read();
    report.blank_lines = seq.blank_lines();
    report.tokens = seq.len();
    report.output_lines = if header_joined { seq.len() - 1 } else { seq.len() };
    report.header_joined = header_joined;

    Ok(report)
}

/// Run the rewrite command
pub fn run_rewrite(
    input: &Path,
    output: &Path,
    options: &RewriteOptions,
    show_stats: bool,
    config: RenderConfig,
    diag: &Diagnostics,
) -> Result<()> {
    let result = if options.join_header || diag.is_verbose() {
        transform_with(input, output, options, diag)
    } else {
        transform(input, output)
    };
    let report = result
        .inspect_err(|err| diag.step(format!("{} at {}", err.code(), err.path().display())))
        .with_context(|| {
            format!(
                "Failed to rewrite {} into {}",
                input.display(),
                output.display()
            )
        })?;

    diag.done(format!(
        "wrote {} lines ({} bytes) to {}",
        report.output_lines,
        report.meta.size,
        output.display()
    ));

    if show_stats {
        let renderer = Renderer::with_config(config);
        if renderer.format() == OutputFormat::Raw {
            diag.warn("raw format prints the token preview only");
        }
        println!("{}", renderer.render(&report));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_transform_ppm() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.ppm");
        let output = temp.path().join("out.txt");
        fs::write(&input, "P3\n4 4\n255\n255 0 0 0 255 0\n").unwrap();

        let report = transform(&input, &output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "P3\n4\n4\n255\n255\n0\n0\n0\n255\n0\n"
        );
        assert_eq!(report.tokens, 10);
        assert_eq!(report.output_lines, 10);
        assert_eq!(report.lines_read, 4);
        assert!(!report.header_joined);
        assert_eq!(report.meta.size, 27);
    }

    #[test]
    fn test_transform_empty_line() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        let output = temp.path().join("out.txt");
        fs::write(&input, "1  2\t3\n\n4\n").unwrap();

        let report = transform(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "1\n2\n3\n4\n");
        assert_eq!(report.blank_lines, 1);
    }

    #[test]
    fn test_transform_overwrites_existing_output() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        let output = temp.path().join("out.txt");
        fs::write(&input, "a b\n").unwrap();
        fs::write(&output, "stale\nstale\nstale\nstale\n").unwrap();

        transform(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_transform_empty_input_creates_empty_output() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        let output = temp.path().join("out.txt");
        fs::write(&input, "").unwrap();

        let report = transform(&input, &output).unwrap();

        assert!(output.exists());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
        assert_eq!(report.tokens, 0);
    }

    #[test]
    fn test_transform_missing_input_does_not_create_output() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out.txt");

        let err = transform(&temp.path().join("missing.ppm"), &output).unwrap_err();

        assert_eq!(err.code(), "INPUT_ACCESS");
        assert!(!output.exists());
    }

    #[test]
    fn test_transform_directory_input() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out.txt");

        let err = transform(temp.path(), &output).unwrap_err();

        assert_eq!(err.code(), "INPUT_ACCESS");
        assert!(!output.exists());
    }

    #[test]
    fn test_transform_invalid_utf8_keeps_existing_output() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.ppm");
        let output = temp.path().join("out.txt");
        fs::write(&input, [0x31, 0x20, 0xc3, 0x28]).unwrap();
        fs::write(&output, "untouched\n").unwrap();

        let err = transform(&input, &output).unwrap_err();

        assert_eq!(err.code(), "ENCODING");
        assert_eq!(fs::read_to_string(&output).unwrap(), "untouched\n");
    }

    #[test]
    fn test_transform_missing_output_dir() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        let output = temp.path().join("absent/out.txt");
        fs::write(&input, "1 2 3\n").unwrap();

        let err = transform(&input, &output).unwrap_err();

        assert_eq!(err.code(), "OUTPUT_ACCESS");
        assert_eq!(err.path(), &output);
    }

    #[test]
    fn test_transform_with_join_header() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.ppm");
        let output = temp.path().join("out.txt");
        fs::write(&input, "P3\n2 1\n65535\n0 1 2 3 4 5\n").unwrap();

        let options = RewriteOptions { join_header: true };
        let report = transform_with(&input, &output, &options, &Diagnostics::silent()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "P3\n2 1\n65535\n0\n1\n2\n3\n4\n5\n"
        );
        assert!(report.header_joined);
        assert_eq!(report.tokens, 10);
        assert_eq!(report.output_lines, 9);
    }

    #[test]
    fn test_transform_with_join_header_too_few_tokens() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.ppm");
        let output = temp.path().join("out.txt");
        fs::write(&input, "P3\n2\n").unwrap();

        let options = RewriteOptions { join_header: true };
        let report = transform_with(&input, &output, &options, &Diagnostics::silent()).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "P3\n2\n");
        assert!(!report.header_joined);
        assert_eq!(report.output_lines, 2);
    }

    #[test]
    fn test_transform_is_idempotent_on_its_output() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        let first = temp.path().join("first.txt");
        let second = temp.path().join("second.txt");
        fs::write(&input, "P3\n4 4\n255\n1 2 3\t4\n\n").unwrap();

        let a = transform(&input, &first).unwrap();
        let b = transform(&first, &second).unwrap();

        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
        assert_eq!(a.meta.hash, b.meta.hash);
    }

    #[test]
    fn test_run_rewrite_without_options() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.ppm");
        let output = temp.path().join("out.txt");
        fs::write(&input, "P3\n1 1\n255\n7 8 9\n").unwrap();

        run_rewrite(
            &input,
            &output,
            &RewriteOptions::default(),
            false,
            RenderConfig::default(),
            &Diagnostics::default(),
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "P3\n1\n1\n255\n7\n8\n9\n"
        );
    }

    #[test]
    fn test_run_rewrite_error_keeps_typed_cause() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.ppm");
        fs::write(&input, "1 2\n").unwrap();

        let err = run_rewrite(
            &input,
            &temp.path().join("gone/out.txt"),
            &RewriteOptions::default(),
            false,
            RenderConfig::default(),
            &Diagnostics::silent(),
        )
        .unwrap_err();

        let cause = err.downcast_ref::<RewriteError>().unwrap();
        assert_eq!(cause.code(), "OUTPUT_ACCESS");
    }

    #[test]
    fn test_report_preview_truncated() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        let output = temp.path().join("out.txt");
        let body: Vec<String> = (0..40).map(|i| i.to_string()).collect();
        fs::write(&input, body.join(" ")).unwrap();

        let report = transform(&input, &output).unwrap();

        assert!(report.meta.truncated);
        assert_eq!(
            report.preview.as_deref(),
            Some("0 1 2 3 4 5 6 7 8 9 10 11")
        );
    }
}
