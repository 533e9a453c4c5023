//! Estimates how much a candidate document reuses a reference document.
//!
//! Text is normalized, split into English words and CJK bigrams, counted, and
//! compared by cosine similarity.

pub mod checker;
pub mod config;
pub mod document;
pub mod error;
pub mod frequency;
pub mod logging;
pub mod normalizer;
pub mod report;
pub mod similarity;
pub mod tokenizer;

pub use checker::{CheckResult, PaperChecker};
pub use error::{Error, Result};
