//! VIN Decoder: validation and field extraction.
//!
//! A [`Vin`] exists only for structurally valid input. Derived fields are
//! computed on demand from the normalized text and the
//! [reference tables](crate::reference).

mod details;
mod error;
mod types;
mod validation;

pub use details::VinDetails;
pub use error::VinError;
pub use types::{Vin, decode};
pub use validation::{
    ALLOWED_CHECK_DIGIT_CHARS, PROHIBITED_LETTERS, PROHIBITED_MODEL_YEAR_CHARS, VIN_SIZE,
    is_valid, validate,
};
