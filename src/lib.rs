//! # vinkit
//!
//! Validation and decoding of 17-character Vehicle Identification Numbers
//! (ISO 3779 / NHTSA, model years 1981-2039).
//!
//! A VIN is split into its World Manufacturer Identifier (WMI), Vehicle
//! Descriptor Section (VDS) and Vehicle Identifier Section (VIS). Country,
//! region, model year and manufacturer are derived from static reference
//! tables. The check digit's character class is validated; the checksum
//! itself is not.
//!
//! ## Quick Start
//!
//! ```rust
//! use vinkit::{Region, Vin, VinError};
//!
//! let vin = Vin::create("2A4GM684X6R632476").unwrap();
//! assert_eq!(vin.wmi(), "2A4");
//! assert_eq!(vin.vds(), "GM684X");
//! assert_eq!(vin.vis(), "6R632476");
//! assert_eq!(vin.region(), Some(Region::NorthAmerica));
//! assert_eq!(vin.model_year(), Some(2006));
//! assert_eq!(vin.vehicle_sequential_number(), "632476");
//!
//! assert_eq!(Vin::create("").unwrap_err(), VinError::EmptyInput);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `bundled-makes` (default) | Built-in WMI → manufacturer table, `Vin::manufacturer()` |
//!
//! Without `bundled-makes`, load a table with
//! [`ManufacturerTable::load`] and use [`Vin::manufacturer_in`].

pub mod reference;
pub mod vin;

pub use crate::reference::{ManufacturerTable, ReferenceDataError, Region};
pub use crate::vin::*;
