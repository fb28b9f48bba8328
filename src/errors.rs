/*!
 * Error types for the glosshtml application.
 *
 * This module contains custom error types for the glossary pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while loading or publishing a glossary
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GlossaryError {
    /// The same term was defined twice and duplicates are rejected
    #[error("Duplicate term '{term}' at line {line}")]
    DuplicateTerm {
        /// The repeated term
        term: String,
        /// 1-based line number of the second occurrence
        line: usize,
    },

    /// A listed term has no entry in the definition map
    #[error("Internal consistency fault: no definition stored for term '{0}'")]
    MissingDefinition(String),

    /// A term cannot be used as a page file name
    #[error("Term '{term}' cannot be published as a page: {reason}")]
    InvalidPageName {
        /// The offending term
        term: String,
        /// Why the name is unusable
        reason: String,
    },
}

/// Main application error type for setting up and checking a publishing run
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from glossary loading or publishing
    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
