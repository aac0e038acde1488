// Résumé scanning core: ATS keyword matching, skill extraction, skill feedback.
// Everything in here is pure and synchronous; handlers, upload parsing and
// history persistence are the only modules that touch I/O.

pub mod ats;
pub mod feedback;
pub mod handlers;
pub mod history;
pub mod skills;
pub mod tokenizer;
pub mod upload;

use thiserror::Error;

/// Errors raised by the scanning core itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid skill dictionary: {0}")]
    InvalidDictionary(String),
}
