//! Core module - Building blocks shared by the rewrite flow
//!
//! This module provides:
//! - Typed errors for input, encoding and output failures
//! - Input reading and output creation
//! - Whitespace tokenization and flattening
//! - The run report model and its renderers
//! - Diagnostics on stderr

pub mod diag;
pub mod error;
pub mod file_reader;
pub mod model;
pub mod render;
pub mod tokenizer;
pub mod util;
