//! Persistence of the directory to delimited text files.
//!
//! The on-disk format is one header line followed by one comma-separated
//! row per contact. Fields are never quoted or escaped.

pub mod csv_codec;

pub use csv_codec::{read_contacts, write_contacts, LoadReport, ParsedRows, RowDiagnostic, HEADER};
