//! Reference Data Store: the static lookup tables behind VIN decoding.
//!
//! - the WMI chart (first character → region and country assignments)
//! - the two model-year cycles
//! - the manufacturer name table, loaded from a CSV resource
//!
//! Everything here is read-only after initialization and safe to share
//! across threads without locking.

mod error;
mod makes;
mod wmi;
mod years;

pub use error::ReferenceDataError;
#[cfg(feature = "bundled-makes")]
pub use makes::bundled_makes;
pub use makes::ManufacturerTable;
pub use wmi::{CodeRange, Region, VIN_ALPHABET, WmiEntry, wmi_country_region, wmi_entry};
pub use years::{POST_2010_BASE, PRE_2010_BASE, YEAR_CODES, year_for_code};
