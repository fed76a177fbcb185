use std::io::Write;

use vinkit::reference::*;
use vinkit::{ManufacturerTable, Vin};

fn write_table(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// Manufacturer table loading
// ---------------------------------------------------------------------------

#[test]
fn load_from_disk() {
    let file = write_table("code,name\nJM1,Mazda\nJT,Toyota\n");
    let table = ManufacturerTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 2);

    let vin = Vin::create("JTDKB20U793123456").unwrap();
    assert_eq!(vin.manufacturer_in(&table), Some("Toyota"));
}

#[test]
fn load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = ManufacturerTable::load(dir.path().join("makes.csv")).unwrap_err();
    assert!(matches!(err, ReferenceDataError::Io { .. }));
}

#[test]
fn load_malformed_file_fails() {
    let file = write_table("code,name\nJM1,Mazda\nJT\n");
    let err = ManufacturerTable::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ReferenceDataError::Malformed { line: 3, fields: 1 }
    ));
    assert_eq!(
        err.to_string(),
        "manufacturer table line 3: expected 2 fields, found 1"
    );
}

#[test]
fn load_file_with_blank_row_fails() {
    let file = write_table("code,name\nJM1,Mazda\n\nJT,Toyota\n");
    let err = ManufacturerTable::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ReferenceDataError::Malformed { line: 3, fields: 0 }
    ));
}

#[test]
fn load_invalid_utf8_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"code,name\nJM1,\xff\xfe\n").unwrap();
    file.flush().unwrap();
    let err = ManufacturerTable::load(file.path()).unwrap_err();
    assert!(matches!(err, ReferenceDataError::Csv(_)));
}

#[test]
fn load_empty_file_fails() {
    let file = write_table("");
    let err = ManufacturerTable::load(file.path()).unwrap_err();
    assert!(matches!(err, ReferenceDataError::MissingHeader));
}

#[cfg(feature = "bundled-makes")]
#[test]
fn bundled_two_character_fallback() {
    let makes = bundled_makes();
    // JT is listed, JTD is not.
    assert_eq!(makes.get("JTD"), None);
    assert_eq!(makes.lookup_wmi("JTD"), Some("Toyota"));
    assert_eq!(makes.lookup_wmi("0A4"), None);
}

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

#[test]
fn every_alphabet_character_but_zero_has_a_region() {
    for c in VIN_ALPHABET.chars() {
        assert_eq!(wmi_entry(c).is_some(), c != '0', "{c}");
    }
}

#[test]
fn country_region_lookup() {
    assert_eq!(
        wmi_country_region('W'),
        Some((Some("Germany"), Region::Europe))
    );
    assert_eq!(
        wmi_country_region('9'),
        Some((Some("Brazil"), Region::SouthAmerica))
    );
    assert_eq!(wmi_country_region('0'), None);
}

#[test]
fn year_tables_cover_1980_to_2039() {
    let mut years: Vec<u16> = YEAR_CODES
        .iter()
        .flat_map(|&c| [year_for_code(c, true), year_for_code(c, false)])
        .map(Option::unwrap)
        .collect();
    years.sort_unstable();
    assert_eq!(years, (PRE_2010_BASE..POST_2010_BASE + 30).collect::<Vec<_>>());
}

#[test]
fn region_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&Region::NorthAmerica).unwrap(),
        "\"north_america\""
    );
    let r: Region = serde_json::from_str("\"south_america\"").unwrap();
    assert_eq!(r, Region::SouthAmerica);
}
