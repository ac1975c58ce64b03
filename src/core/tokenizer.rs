//! Whitespace tokenizer
//!
//! Splits text line by line on runs of whitespace and flattens the per-line
//! token lists into one ordered sequence. Tokens are opaque: they are never
//! parsed, validated, merged or rewritten.
//!
//! Lines end at `\n`, `\r\n` or a bare `\r`. Separators are Unicode
//! whitespace plus the ASCII information separators U+001C..=U+001F.
//!
//! ```text
//! "P3\n4 4\n255\n255 0 0\n"  ->  ["P3", "4", "4", "255", "255", "0", "0"]
//! ```

/// Whether `c` separates two tokens
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split `line` into maximal runs of non-separator characters
fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|t| !t.is_empty())
}

/// Iterate lines ending at `\n`, `\r\n` or `\r`; a trailing terminator does
/// not start an extra empty line.
fn universal_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Ordered tokens of one input, borrowed from the source text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence<'a> {
    tokens: Vec<&'a str>,
    lines_read: usize,
    blank_lines: usize,
}

impl<'a> TokenSequence<'a> {
    /// Tokenize `text`, keeping line order then left-to-right order.
    pub fn from_text(text: &'a str) -> Self {
        let mut seq = Self::default();

        for line in universal_lines(text) {
            seq.lines_read += 1;
            let before = seq.tokens.len();
            seq.tokens.extend(split_tokens(line));
            if seq.tokens.len() == before {
                seq.blank_lines += 1;
            }
        }

        seq
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of input lines seen (a final unterminated line counts)
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Input lines that contributed no token
    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }

    /// Whether the header join can apply (needs a second and third token)
    pub fn can_join_header(&self) -> bool {
        self.tokens.len() >= 3
    }

    /// Render the output text: every token followed by `\n`.
    ///
    /// With `join_header`, the second and third tokens share one line separated
    /// by a single space. It is ignored when there are fewer than three tokens.
    pub fn render(&self, join_header: bool) -> String {
        let capacity = self.tokens.iter().map(|t| t.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        let join = join_header && self.can_join_header();

        for (i, token) in self.tokens.iter().enumerate() {
            out.push_str(token);
            if join && i == 1 {
                out.push(' ');
            } else {
                out.push('\n');
            }
        }

        out
    }
}
