use serde::{Deserialize, Serialize};

use super::types::Vin;
use crate::reference::{ManufacturerTable, Region};

/// Every decoded field of a [`Vin`], as plain data.
///
/// Lookups that found nothing are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinDetails {
    /// Normalized (uppercase) VIN.
    pub vin: String,
    /// World Manufacturer Identifier, characters 0..3.
    pub wmi: String,
    /// Vehicle Descriptor Section, characters 3..9.
    pub vds: String,
    /// Vehicle Identifier Section, the last 8 characters.
    pub vis: String,
    /// Country from the WMI chart.
    pub country: Option<String>,
    /// Region from the WMI chart.
    pub region: Option<Region>,
    /// Manufacturer name from the table used for decoding.
    pub manufacturer: Option<String>,
    /// Calendar model year.
    pub model_year: Option<u16>,
    /// Position 6 is numeric (1980-2009 year cycle).
    pub pre_2010: bool,
    /// Position 2 is `9` (small manufacturer).
    pub fewer_than_500_per_year: bool,
    /// Vehicle sequential number (3 or 6 characters).
    pub sequential_number: String,
}

impl Vin {
    /// Decode every field, resolving the manufacturer against `table`.
    pub fn details_in(&self, table: &ManufacturerTable) -> VinDetails {
        VinDetails {
            vin: self.as_str().to_string(),
            wmi: self.wmi().to_string(),
            vds: self.vds().to_string(),
            vis: self.vis().to_string(),
            country: self.country().map(str::to_string),
            region: self.region(),
            manufacturer: self.manufacturer_in(table).map(str::to_string),
            model_year: self.model_year(),
            pre_2010: self.is_pre_2010(),
            fewer_than_500_per_year: self.built_fewer_than_500_per_year(),
            sequential_number: self.vehicle_sequential_number().to_string(),
        }
    }

    /// Decode every field using the bundled manufacturer table.
    #[cfg(feature = "bundled-makes")]
    pub fn details(&self) -> VinDetails {
        self.details_in(crate::reference::bundled_makes())
    }
}
