use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use super::error::VinError;
use super::validation::{CHECK_DIGIT_POS, MODEL_YEAR_POS, VIN_SIZE, normalize};
use crate::reference::{ManufacturerTable, Region, wmi_entry, year_for_code};

const PLANT_CODE_POS: usize = 10;

/// A structurally valid, uppercased Vehicle Identification Number.
///
/// The only way to obtain a `Vin` is through [`Vin::create`] (or one of the
/// conversions that call it), so every instance is valid and immutable.
/// Equality and hashing use the normalized text only.
///
/// ```
/// use vinkit::{Region, Vin};
///
/// let vin = Vin::create("jm1bl1sf3a1267720").unwrap();
/// assert_eq!(vin.as_str(), "JM1BL1SF3A1267720");
/// assert_eq!(vin.wmi(), "JM1");
/// assert_eq!(vin.region(), Some(Region::Asia));
/// assert_eq!(vin.model_year(), Some(2010));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin {
    raw: String,
    text: String,
    chars: [char; VIN_SIZE],
}

impl Vin {
    /// Uppercase and validate `raw`.
    ///
    /// Checks run in this order and the first failure is returned: empty
    /// input, length, prohibited letters (I, O, Q), model-year character,
    /// check-digit character.
    pub fn create(raw: &str) -> Result<Self, VinError> {
        let chars = normalize(raw).inspect_err(|e| trace!("rejected VIN {raw:?}: {e}"))?;
        Ok(Self {
            raw: raw.to_string(),
            text: chars.iter().collect(),
            chars,
        })
    }

    /// The normalized (uppercase) VIN.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The input exactly as given to [`Vin::create`].
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// World Manufacturer Identifier, characters 0..3.
    pub fn wmi(&self) -> &str {
        self.slice(0, 3)
    }

    /// Vehicle Descriptor Section, characters 3..9 (check digit included).
    pub fn vds(&self) -> &str {
        self.slice(3, 9)
    }

    /// Vehicle Identifier Section, the last 8 characters.
    pub fn vis(&self) -> &str {
        self.slice(VIN_SIZE - 8, VIN_SIZE)
    }

    /// Country from the WMI chart.
    ///
    /// The first character is tested for membership in the code ranges of
    /// its own chart entry; `None` when no range contains it or the
    /// character has no entry.
    pub fn country(&self) -> Option<&'static str> {
        let first = self.chars[0];
        wmi_entry(first).and_then(|entry| entry.country_for(first))
    }

    /// Region from the WMI chart, `None` for unassigned first characters.
    pub fn region(&self) -> Option<Region> {
        wmi_entry(self.chars[0]).map(|entry| entry.region)
    }

    /// Whether position 6 is numeric, selecting the 1980-2009 year cycle.
    pub fn is_pre_2010(&self) -> bool {
        self.chars[6].is_ascii_digit()
    }

    /// Small manufacturers (under 500 vehicles a year) put `9` in position 2.
    pub fn built_fewer_than_500_per_year(&self) -> bool {
        self.chars[2].to_digit(10) == Some(9)
    }

    /// Serial number: last 3 characters for small manufacturers, otherwise
    /// the last 6.
    pub fn vehicle_sequential_number(&self) -> &str {
        let len = if self.built_fewer_than_500_per_year() {
            3
        } else {
            6
        };
        self.slice(VIN_SIZE - len, VIN_SIZE)
    }

    /// Model year, `None` when position 9 is not a year code.
    pub fn model_year(&self) -> Option<u16> {
        year_for_code(self.model_year_code(), self.is_pre_2010())
    }

    /// Position 9.
    pub fn model_year_code(&self) -> char {
        self.chars[MODEL_YEAR_POS]
    }

    /// Position 8. Only its character class is validated, not the checksum.
    pub fn check_digit(&self) -> char {
        self.chars[CHECK_DIGIT_POS]
    }

    /// Position 10, the assembly plant.
    pub fn plant_code(&self) -> char {
        self.chars[PLANT_CODE_POS]
    }

    /// Manufacturer name from `table`: the 3-character WMI first, then its
    /// 2-character prefix.
    pub fn manufacturer_in<'t>(&self, table: &'t ManufacturerTable) -> Option<&'t str> {
        table.lookup_wmi(self.wmi())
    }

    /// Manufacturer name from the bundled table.
    #[cfg(feature = "bundled-makes")]
    pub fn manufacturer(&self) -> Option<&'static str> {
        self.manufacturer_in(crate::reference::bundled_makes())
    }

    /// Alias for [`Vin::manufacturer`].
    #[cfg(feature = "bundled-makes")]
    pub fn make(&self) -> Option<&'static str> {
        self.manufacturer()
    }

    fn slice(&self, from: usize, to: usize) -> &str {
        &self.text[self.byte_offset(from)..self.byte_offset(to)]
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.chars[..index].iter().map(|c| c.len_utf8()).sum()
    }
}

impl PartialEq for Vin {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Vin {}

impl Hash for Vin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl TryFrom<&str> for Vin {
    type Error = VinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.text
    }
}

/// Validate `raw` and return its normalized text.
pub fn decode(raw: &str) -> Result<String, VinError> {
    Vin::create(raw).map(String::from)
}
