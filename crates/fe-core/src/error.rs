//! Error types for the field randomizer

use thiserror::Error;

use crate::field::Section;

/// Core error type
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Invalid card id: {0} (expected 1..=36)")]
    InvalidCardId(u8),

    #[error("Card {0} cannot carry the single traffic sign (expected 9 or 10)")]
    InvalidSingleSignCard(u8),

    #[error("Card {0} is used more than once")]
    DuplicateCard(u8),

    #[error("Section {0} is assigned more than once")]
    DuplicateSection(Section),

    #[error("Section {0} has no card")]
    MissingSection(Section),

    #[error("Corridor for {found} found where {expected} was expected")]
    CorridorOutOfOrder { expected: Section, found: Section },

    #[error("Invalid die face: {0}")]
    InvalidDieFace(u8),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type FieldResult<T> = Result<T, FieldError>;
