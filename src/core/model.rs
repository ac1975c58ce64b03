//! Run report model
//!
//! A successful rewrite produces one `RewriteReport`, which the renderer turns
//! into jsonl/json/md/raw for `--stats`.

use serde::{Deserialize, Serialize};

/// Metadata about the written output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Bytes written to the output file
    pub size: u64,

    /// xxh3-64 digest of the written bytes
    pub hash: String,

    /// Whether `preview` holds only the first tokens
    #[serde(default)]
    pub truncated: bool,
}

/// Summary of one tokenize-and-rewrite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteReport {
    /// Input path as given on the command line
    pub input: String,

    /// Output path as given on the command line
    pub output: String,

    /// Input lines read
    pub lines_read: usize,

    /// Input lines that held no token
    pub blank_lines: usize,

    /// Tokens written
    pub tokens: usize,

    /// Lines in the output file
    pub output_lines: usize,

    /// Whether the second and third tokens share an output line
    pub header_joined: bool,

    /// First tokens, space separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    pub meta: Meta,
}

impl RewriteReport {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            lines_read: 0,
            blank_lines: 0,
            tokens: 0,
            output_lines: 0,
            header_joined: false,
            preview: None,
            meta: Meta::default(),
        }
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }
}
