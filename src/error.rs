//! Error types for the theory core.

use thiserror::Error;

use crate::theory::{Choices, Swara};

/// An error raised by a single derivation: parsing, selection, or catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A scale-degree token outside the fixed token set.
    #[error("unknown swara token: {0:?}")]
    InvalidToken(String),
    /// A key name outside the twelve supported keys.
    #[error("unknown key: {0:?}")]
    InvalidKey(String),
    /// S, P and S' are fixed and cannot be chosen.
    #[error("{0} is fixed and cannot be selected")]
    NotMovable(Swara),
    /// The token's pitch is already held by another scale position.
    #[error("{swara} sounds semitone {semitone}, which is already taken")]
    ReservedPitch { swara: Swara, semitone: u8 },
    /// A complete selection with no catalog entry; indicates a corrupt catalog.
    #[error("no melakarta matches {0}")]
    NoCatalogMatch(Choices),
    /// The generated catalog disagrees with the literal reference table.
    #[error("catalog entry {ordinal} mismatch: generated {generated}, expected {expected}")]
    CatalogMismatch {
        ordinal: u8,
        generated: String,
        expected: String,
    },
}

pub type Result<T> = std::result::Result<T, TheoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            TheoryError::InvalidToken("X9".into()).to_string(),
            "unknown swara token: \"X9\""
        );
        assert_eq!(
            TheoryError::NotMovable(Swara::Pa).to_string(),
            "P is fixed and cannot be selected"
        );
        assert_eq!(
            TheoryError::ReservedPitch {
                swara: Swara::G1,
                semitone: 2
            }
            .to_string(),
            "G1 sounds semitone 2, which is already taken"
        );
    }
}
