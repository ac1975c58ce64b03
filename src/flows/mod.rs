//! Flows module - Multi-step commands
//!
//! Provides:
//! - rewrite: read, tokenize, flatten and write one token per line

pub mod rewrite;
