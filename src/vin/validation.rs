//! Structural VIN validation.
//!
//! Checks run in a fixed order and stop at the first failure: length,
//! prohibited letters, model-year character, check-digit character.

use super::error::VinError;

/// Number of characters in a VIN (model years 1981 onwards).
pub const VIN_SIZE: usize = 17;

/// Letters that may not appear anywhere in a VIN.
pub const PROHIBITED_LETTERS: [char; 3] = ['I', 'O', 'Q'];

/// Characters that may not appear in the model-year position.
pub const PROHIBITED_MODEL_YEAR_CHARS: [char; 3] = ['U', 'Z', '0'];

/// Characters the check-digit position may hold.
pub const ALLOWED_CHECK_DIGIT_CHARS: [char; 11] =
    ['X', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub(crate) const CHECK_DIGIT_POS: usize = 8;
pub(crate) const MODEL_YEAR_POS: usize = 9;

/// Uppercase `raw` and validate its structure.
///
/// Whitespace is kept as-is, so padded input fails the length check.
pub(crate) fn normalize(raw: &str) -> Result<[char; VIN_SIZE], VinError> {
    if raw.is_empty() {
        return Err(VinError::EmptyInput);
    }

    let upper: Vec<char> = raw.chars().flat_map(char::to_uppercase).collect();
    let chars: [char; VIN_SIZE] = upper
        .try_into()
        .map_err(|v: Vec<char>| VinError::InvalidLength { len: v.len() })?;

    if let Some((position, &letter)) = chars
        .iter()
        .enumerate()
        .find(|(_, c)| PROHIBITED_LETTERS.contains(*c))
    {
        return Err(VinError::ProhibitedLetter { letter, position });
    }

    let year_code = chars[MODEL_YEAR_POS];
    if PROHIBITED_MODEL_YEAR_CHARS.contains(&year_code) {
        return Err(VinError::ProhibitedModelYearChar(year_code));
    }

    let check_digit = chars[CHECK_DIGIT_POS];
    if !ALLOWED_CHECK_DIGIT_CHARS.contains(&check_digit) {
        return Err(VinError::InvalidCheckDigitChar(check_digit));
    }

    Ok(chars)
}

/// Validate `raw` without keeping the result.
pub fn validate(raw: &str) -> Result<(), VinError> {
    normalize(raw).map(|_| ())
}

/// Whether `raw` is a structurally valid VIN.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}
