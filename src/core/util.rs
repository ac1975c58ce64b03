//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3-64 digest of bytes as 16 hex chars
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Truncate a token list for display, returning (preview, was_truncated)
pub fn preview_tokens(tokens: &[&str], max: usize) -> (String, bool) {
    if tokens.len() <= max {
        return (tokens.join(" "), false);
    }
    (tokens[..max].join(" "), true)
}
