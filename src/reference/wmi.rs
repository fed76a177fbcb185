//! World Manufacturer Identifier (WMI) country and region chart.
//!
//! The chart is keyed by the first VIN character. Each entry carries the
//! region of that character and the SAE country assignments, expressed as
//! ranges over the VIN alphabet.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The characters a VIN may contain, in SAE assignment order.
///
/// Letters come first (I, O and Q are never assigned), then `1`..`9`, then `0`.
pub const VIN_ALPHABET: &str = "ABCDEFGHJKLMNPRSTUVWXYZ1234567890";

/// Geographic region derived from the first WMI character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// First character `A`-`H`.
    Africa,
    /// First character `J`-`R`.
    Asia,
    /// First character `S`-`Z`.
    Europe,
    /// First character `1`-`5`.
    NorthAmerica,
    /// First character `6`-`7`.
    Oceania,
    /// First character `8`-`9`.
    SouthAmerica,
}

impl Region {
    /// The snake_case name, e.g. `"north_america"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Africa => "africa",
            Region::Asia => "asia",
            Region::Europe => "europe",
            Region::NorthAmerica => "north_america",
            Region::Oceania => "oceania",
            Region::SouthAmerica => "south_america",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive range of characters over [`VIN_ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    /// Lowest member of the range.
    pub first: char,
    /// Highest member of the range.
    pub last: char,
}

impl CodeRange {
    /// Range from `first` to `last`, both inclusive.
    pub const fn new(first: char, last: char) -> Self {
        Self { first, last }
    }

    /// Whether `c` falls within this range. Characters outside the VIN
    /// alphabet are never members.
    pub fn contains(&self, c: char) -> bool {
        match (
            alphabet_position(self.first),
            alphabet_position(self.last),
            alphabet_position(c),
        ) {
            (Some(lo), Some(hi), Some(pos)) => (lo..=hi).contains(&pos),
            _ => false,
        }
    }
}

fn alphabet_position(c: char) -> Option<usize> {
    VIN_ALPHABET.chars().position(|a| a == c)
}

/// One row of the WMI chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmiEntry {
    /// First VIN character this entry applies to.
    pub prefix: char,
    /// Region of every VIN starting with `prefix`.
    pub region: Region,
    /// Country assignments; may be empty for unassigned prefixes.
    pub countries: &'static [(CodeRange, &'static str)],
}

impl WmiEntry {
    /// Country of the first code range containing `code`.
    pub fn country_for(&self, code: char) -> Option<&'static str> {
        self.countries
            .iter()
            .find(|(range, _)| range.contains(code))
            .map(|&(_, country)| country)
    }
}

/// Look up the chart entry for a first VIN character.
pub fn wmi_entry(first: char) -> Option<&'static WmiEntry> {
    WMI_CHART.iter().find(|e| e.prefix == first)
}

/// Country and region for a first VIN character.
///
/// Returns `None` when the character has no chart entry. The country is
/// `None` when the entry exists but none of its code ranges contain `first`.
pub fn wmi_country_region(first: char) -> Option<(Option<&'static str>, Region)> {
    wmi_entry(first).map(|e| (e.country_for(first), e.region))
}

const fn r(first: char, last: char) -> CodeRange {
    CodeRange::new(first, last)
}

static WMI_CHART: &[WmiEntry] = &[
    // Africa
    WmiEntry {
        prefix: 'A',
        region: Region::Africa,
        countries: &[(r('A', 'H'), "South Africa"), (r('J', 'N'), "Ivory Coast")],
    },
    WmiEntry {
        prefix: 'B',
        region: Region::Africa,
        countries: &[
            (r('A', 'E'), "Angola"),
            (r('F', 'K'), "Kenya"),
            (r('L', 'R'), "Tanzania"),
        ],
    },
    WmiEntry {
        prefix: 'C',
        region: Region::Africa,
        countries: &[
            (r('A', 'E'), "Benin"),
            (r('F', 'K'), "Madagascar"),
            (r('L', 'R'), "Tunisia"),
        ],
    },
    WmiEntry {
        prefix: 'D',
        region: Region::Africa,
        countries: &[
            (r('A', 'E'), "Egypt"),
            (r('F', 'K'), "Morocco"),
            (r('L', 'R'), "Zambia"),
        ],
    },
    WmiEntry {
        prefix: 'E',
        region: Region::Africa,
        countries: &[(r('A', 'E'), "Ethiopia"), (r('F', 'K'), "Mozambique")],
    },
    WmiEntry {
        prefix: 'F',
        region: Region::Africa,
        countries: &[(r('A', 'E'), "Ghana"), (r('F', 'K'), "Nigeria")],
    },
    WmiEntry {
        prefix: 'G',
        region: Region::Africa,
        countries: &[],
    },
    WmiEntry {
        prefix: 'H',
        region: Region::Africa,
        countries: &[],
    },
    // Asia
    WmiEntry {
        prefix: 'J',
        region: Region::Asia,
        countries: &[(r('A', 'T'), "Japan")],
    },
    WmiEntry {
        prefix: 'K',
        region: Region::Asia,
        countries: &[
            (r('A', 'E'), "Sri Lanka"),
            (r('F', 'K'), "Israel"),
            (r('L', 'R'), "South Korea"),
            (r('S', '0'), "Kazakhstan"),
        ],
    },
    WmiEntry {
        prefix: 'L',
        region: Region::Asia,
        countries: &[(r('A', '0'), "China")],
    },
    WmiEntry {
        prefix: 'M',
        region: Region::Asia,
        countries: &[
            (r('A', 'E'), "India"),
            (r('F', 'K'), "Indonesia"),
            (r('L', 'R'), "Thailand"),
            (r('S', '0'), "Myanmar"),
        ],
    },
    WmiEntry {
        prefix: 'N',
        region: Region::Asia,
        countries: &[
            (r('A', 'E'), "Iran"),
            (r('F', 'K'), "Pakistan"),
            (r('L', 'R'), "Turkey"),
        ],
    },
    WmiEntry {
        prefix: 'P',
        region: Region::Asia,
        countries: &[
            (r('A', 'E'), "Philippines"),
            (r('F', 'K'), "Singapore"),
            (r('L', 'R'), "Malaysia"),
        ],
    },
    WmiEntry {
        prefix: 'R',
        region: Region::Asia,
        countries: &[
            (r('A', 'E'), "United Arab Emirates"),
            (r('F', 'K'), "Taiwan"),
            (r('L', 'R'), "Vietnam"),
            (r('S', '0'), "Saudi Arabia"),
        ],
    },
    // Europe
    WmiEntry {
        prefix: 'S',
        region: Region::Europe,
        countries: &[
            (r('A', 'M'), "United Kingdom"),
            (r('N', 'T'), "East Germany"),
            (r('U', 'Z'), "Poland"),
            (r('1', '4'), "Latvia"),
        ],
    },
    WmiEntry {
        prefix: 'T',
        region: Region::Europe,
        countries: &[
            (r('A', 'H'), "Switzerland"),
            (r('J', 'P'), "Czech Republic"),
            (r('R', 'V'), "Hungary"),
            (r('W', '1'), "Portugal"),
        ],
    },
    WmiEntry {
        prefix: 'U',
        region: Region::Europe,
        countries: &[
            (r('H', 'M'), "Denmark"),
            (r('N', 'T'), "Ireland"),
            (r('U', 'Z'), "Romania"),
            (r('5', '7'), "Slovakia"),
        ],
    },
    WmiEntry {
        prefix: 'V',
        region: Region::Europe,
        countries: &[
            (r('A', 'E'), "Austria"),
            (r('F', 'R'), "France"),
            (r('S', 'W'), "Spain"),
            (r('X', '2'), "Serbia"),
            (r('3', '5'), "Croatia"),
            (r('6', '0'), "Estonia"),
        ],
    },
    WmiEntry {
        prefix: 'W',
        region: Region::Europe,
        countries: &[(r('A', '0'), "Germany")],
    },
    WmiEntry {
        prefix: 'X',
        region: Region::Europe,
        countries: &[
            (r('A', 'E'), "Bulgaria"),
            (r('F', 'K'), "Greece"),
            (r('L', 'R'), "Netherlands"),
            (r('S', 'W'), "Russia"),
            (r('X', '2'), "Luxembourg"),
            (r('3', '0'), "Russia"),
        ],
    },
    WmiEntry {
        prefix: 'Y',
        region: Region::Europe,
        countries: &[
            (r('A', 'E'), "Belgium"),
            (r('F', 'K'), "Finland"),
            (r('L', 'R'), "Malta"),
            (r('S', 'W'), "Sweden"),
            (r('X', '2'), "Norway"),
            (r('3', '5'), "Belarus"),
            (r('6', '0'), "Ukraine"),
        ],
    },
    WmiEntry {
        prefix: 'Z',
        region: Region::Europe,
        countries: &[
            (r('A', 'R'), "Italy"),
            (r('X', '2'), "Slovenia"),
            (r('3', '5'), "Lithuania"),
        ],
    },
    // North America
    WmiEntry {
        prefix: '1',
        region: Region::NorthAmerica,
        countries: &[(r('A', '0'), "United States")],
    },
    WmiEntry {
        prefix: '2',
        region: Region::NorthAmerica,
        countries: &[(r('A', '0'), "Canada")],
    },
    WmiEntry {
        prefix: '3',
        region: Region::NorthAmerica,
        countries: &[
            (r('A', 'W'), "Mexico"),
            (r('X', '7'), "Costa Rica"),
            (r('8', '9'), "Cayman Islands"),
        ],
    },
    WmiEntry {
        prefix: '4',
        region: Region::NorthAmerica,
        countries: &[(r('A', '0'), "United States")],
    },
    WmiEntry {
        prefix: '5',
        region: Region::NorthAmerica,
        countries: &[(r('A', '0'), "United States")],
    },
    // Oceania
    WmiEntry {
        prefix: '6',
        region: Region::Oceania,
        countries: &[(r('A', 'W'), "Australia")],
    },
    WmiEntry {
        prefix: '7',
        region: Region::Oceania,
        countries: &[(r('A', 'E'), "New Zealand")],
    },
    // South America
    WmiEntry {
        prefix: '8',
        region: Region::SouthAmerica,
        countries: &[
            (r('A', 'E'), "Argentina"),
            (r('F', 'K'), "Chile"),
            (r('L', 'R'), "Ecuador"),
            (r('S', 'W'), "Peru"),
            (r('X', '2'), "Venezuela"),
        ],
    },
    WmiEntry {
        prefix: '9',
        region: Region::SouthAmerica,
        countries: &[
            (r('A', 'E'), "Brazil"),
            (r('F', 'K'), "Colombia"),
            (r('L', 'R'), "Paraguay"),
            (r('S', 'W'), "Uruguay"),
            (r('X', '2'), "Trinidad and Tobago"),
            (r('3', '9'), "Brazil"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_excludes_prohibited_letters() {
        assert_eq!(VIN_ALPHABET.chars().count(), 33);
        assert!(!VIN_ALPHABET.contains(['I', 'O', 'Q']));
    }

    #[test]
    fn range_membership() {
        let range = CodeRange::new('A', 'T');
        assert!(range.contains('A'));
        assert!(range.contains('J'));
        assert!(range.contains('T'));
        assert!(!range.contains('U'));
        assert!(!range.contains('1'));
        assert!(!range.contains('I'));
    }

    #[test]
    fn range_spans_letters_into_digits() {
        let range = CodeRange::new('X', '2');
        assert!(range.contains('Z'));
        assert!(range.contains('1'));
        assert!(range.contains('2'));
        assert!(!range.contains('3'));
        assert!(!range.contains('W'));
    }

    #[test]
    fn zero_sorts_last() {
        assert!(CodeRange::new('A', '0').contains('0'));
        assert!(!CodeRange::new('A', '9').contains('0'));
    }

    #[test]
    fn chart_regions() {
        assert_eq!(wmi_entry('A').unwrap().region, Region::Africa);
        assert_eq!(wmi_entry('J').unwrap().region, Region::Asia);
        assert_eq!(wmi_entry('W').unwrap().region, Region::Europe);
        assert_eq!(wmi_entry('1').unwrap().region, Region::NorthAmerica);
        assert_eq!(wmi_entry('6').unwrap().region, Region::Oceania);
        assert_eq!(wmi_entry('9').unwrap().region, Region::SouthAmerica);
    }

    #[test]
    fn unassigned_prefixes() {
        assert!(wmi_entry('0').is_none());
        assert!(wmi_entry('I').is_none());
        assert!(wmi_entry('a').is_none());
    }

    #[test]
    fn country_uses_first_character_membership() {
        assert_eq!(wmi_country_region('J'), Some((Some("Japan"), Region::Asia)));
        assert_eq!(
            wmi_country_region('2'),
            Some((Some("Canada"), Region::NorthAmerica))
        );
        // '6' is not inside Australia's A..W range.
        assert_eq!(wmi_country_region('6'), Some((None, Region::Oceania)));
        assert_eq!(wmi_country_region('G'), Some((None, Region::Africa)));
    }

    #[test]
    fn chart_has_one_entry_per_prefix() {
        for (i, a) in WMI_CHART.iter().enumerate() {
            assert!(VIN_ALPHABET.contains(a.prefix), "bad prefix {}", a.prefix);
            for b in &WMI_CHART[i + 1..] {
                assert_ne!(a.prefix, b.prefix, "duplicate prefix");
            }
        }
        assert_eq!(WMI_CHART.len(), 32);
    }

    #[test]
    fn region_names() {
        assert_eq!(Region::NorthAmerica.to_string(), "north_america");
        assert_eq!(Region::SouthAmerica.as_str(), "south_america");
    }
}
