//! WMI → manufacturer name table.
//!
//! The table comes from a two-column CSV resource (`code,name`) whose first
//! row is a header. Codes are 3-character WMIs or 2-character prefixes.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, warn};

use super::error::ReferenceDataError;

/// In-memory manufacturer name table. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManufacturerTable {
    names: HashMap<String, String>,
}

impl ManufacturerTable {
    /// Load a table from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse a table from any CSV source.
    ///
    /// The header row is discarded. Every data row must have exactly two
    /// fields; a blank line anywhere, before the header included, counts as
    /// a row with no fields. When a code repeats, the later row wins.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self, ReferenceDataError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(csv::Error::from)?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(buf.as_slice());

        let mut names = HashMap::new();
        let mut record = csv::StringRecord::new();
        let mut header_seen = false;
        loop {
            let (start, line) = record_start(&buf, rdr.position());
            if matches!(buf.get(start), Some(b'\n' | b'\r')) {
                return Err(ReferenceDataError::Malformed { line, fields: 0 });
            }
            if !rdr.read_record(&mut record)? {
                break;
            }
            if !header_seen {
                header_seen = true;
                continue;
            }
            if record.len() != 2 {
                return Err(ReferenceDataError::Malformed {
                    line,
                    fields: record.len(),
                });
            }
            let (code, name) = (&record[0], &record[1]);
            if let Some(previous) = names.insert(code.to_string(), name.to_string()) {
                warn!("manufacturer code {code} listed twice ({previous} replaced by {name})");
            }
        }

        if !header_seen {
            return Err(ReferenceDataError::MissingHeader);
        }
        debug!("loaded {} manufacturer codes", names.len());
        Ok(Self { names })
    }

    /// Exact lookup of a 2- or 3-character code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Manufacturer for a WMI: the full 3-character code first, then its
    /// 2-character prefix.
    pub fn lookup_wmi(&self, wmi: &str) -> Option<&str> {
        self.get(wmi).or_else(|| {
            let prefix_end = wmi.char_indices().nth(2).map(|(i, _)| i)?;
            self.get(&wmi[..prefix_end])
        })
    }

    /// Number of codes in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for ManufacturerTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Byte offset and line number where the next record begins.
///
/// The reader stops after the `\r` of a `\r\n` terminator, so a pending
/// `\n` belongs to the previous record.
fn record_start(buf: &[u8], pos: &csv::Position) -> (usize, u64) {
    let at = pos.byte() as usize;
    if at > 0 && buf.get(at - 1) == Some(&b'\r') && buf.get(at) == Some(&b'\n') {
        (at + 1, pos.line() + 1)
    } else {
        (at, pos.line())
    }
}

#[cfg(feature = "bundled-makes")]
static BUNDLED_CSV: &str = include_str!("../../data/makes.csv");

/// The manufacturer table shipped with the crate.
///
/// Parsed on first access and shared, read-only, for the rest of the
/// process.
///
/// # Panics
///
/// Panics on first access if the bundled resource is malformed. This is a
/// build defect, not a per-VIN condition.
#[cfg(feature = "bundled-makes")]
pub fn bundled_makes() -> &'static ManufacturerTable {
    static TABLE: std::sync::OnceLock<ManufacturerTable> = std::sync::OnceLock::new();
    TABLE.get_or_init(|| {
        ManufacturerTable::from_reader(BUNDLED_CSV.as_bytes())
            .unwrap_or_else(|e| panic!("bundled manufacturer table: {e}"))
    })
}
