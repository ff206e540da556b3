//! Domain error types.

use thiserror::Error;

use crate::model::{Direction, Reference};

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required argument was empty or absent.
    #[error("validation error: {0}")]
    Validation(String),

    /// An option token did not match the lookup option vocabulary.
    #[error("unknown lookup option: {0}")]
    UnknownOption(String),

    /// A locale tag was empty.
    #[error("invalid locale tag: tag must not be empty")]
    InvalidTag,

    /// An empty string was passed where a first character is required.
    #[error("empty input: cannot capitalise an empty string")]
    EmptyInput,

    /// Navigation reached the edge of the corpus and the edge policy
    /// forbids staying in place.
    #[error("no {direction} chapter from {reference}")]
    NoSiblingChapter {
        /// The reference navigation started from.
        reference: Reference,
        /// The requested direction.
        direction: Direction,
    },

    /// The corpus collaborator failed.
    #[error("corpus error: {0}")]
    Corpus(String),

    /// A configuration value could not be interpreted.
    #[error("configuration error: {0}")]
    Configuration(String),
}
