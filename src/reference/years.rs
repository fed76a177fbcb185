//! Model-year codes (VIN position 10).
//!
//! The same 30 codes repeat every 30 years. Position 7 tells the two cycles
//! apart for light vehicles: numeric means 1980-2009, alphabetic 2010-2039.

/// Model-year codes in cycle order. `U`, `Z` and `0` are never used.
pub const YEAR_CODES: [char; 30] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V',
    'W', 'X', 'Y', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// First year of the cycle used before 2010.
pub const PRE_2010_BASE: u16 = 1980;

/// First year of the 2010-2039 cycle.
pub const POST_2010_BASE: u16 = 2010;

/// Calendar year for a model-year code, or `None` if `code` is not a
/// model-year code.
pub fn year_for_code(code: char, pre_2010: bool) -> Option<u16> {
    let base = if pre_2010 {
        PRE_2010_BASE
    } else {
        POST_2010_BASE
    };
    YEAR_CODES
        .iter()
        .position(|&c| c == code)
        .map(|offset| base + offset as u16)
}
