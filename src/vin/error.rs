use thiserror::Error;

/// Reasons a string is rejected as a VIN.
///
/// Positions are 0-indexed character offsets into the uppercased input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VinError {
    /// The input is empty.
    #[error("VIN is empty")]
    EmptyInput,

    /// The input is not exactly 17 characters long.
    #[error("VIN must be 17 characters, got {len}")]
    InvalidLength {
        /// Character count after uppercasing.
        len: usize,
    },

    /// The input contains I, O or Q.
    #[error("VIN contains prohibited letter '{letter}' at position {position}")]
    ProhibitedLetter {
        /// The offending letter, uppercased.
        letter: char,
        /// Offset of its first occurrence.
        position: usize,
    },

    /// The model-year character (position 9) is U, Z or 0.
    #[error("model year character '{0}' is never assigned")]
    ProhibitedModelYearChar(char),

    /// The check-digit character (position 8) is not 0-9 or X.
    #[error("check digit must be 0-9 or X, got '{0}'")]
    InvalidCheckDigitChar(char),
}
