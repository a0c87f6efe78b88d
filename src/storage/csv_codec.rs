//! Row codec for the contact file. Uses the `csv` crate with quoting disabled.
//!
//! Format: `Nome,Cognome,Telefono1,Telefono2,Telefono3,Email1,Email2,Email3`
//!
//! Writing pads every contact to three phone and three email slots. Reading
//! trims each field, treats missing trailing fields as empty and ignores
//! anything past the eighth field. Rows that cannot be decoded, or that have
//! neither a name nor a surname (blank lines included), are skipped and
//! reported instead of failing the whole read.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::error::RowParseError;
use crate::models::{Contact, MAX_EMAILS, MAX_PHONES};
use std::fmt;
use std::io::{self, BufRead};
use tracing::{debug, warn};

/// Fixed first line of every contact file.
pub const HEADER: [&str; 8] = [
    "Nome",
    "Cognome",
    "Telefono1",
    "Telefono2",
    "Telefono3",
    "Email1",
    "Email2",
    "Email3",
];

const NAME: usize = 0;
const SURNAME: usize = 1;
const FIRST_PHONE: usize = 2;
const FIRST_EMAIL: usize = FIRST_PHONE + MAX_PHONES;

/// A row that was skipped while reading, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    pub line: u64,
    pub reason: RowParseError,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Outcome of decoding a whole file.
#[derive(Debug, Default)]
pub struct ParsedRows {
    /// Accepted contacts, in file order.
    pub contacts: Vec<Contact>,
    pub skipped: Vec<RowDiagnostic>,
}

/// Summary returned by [`Directory::load`](crate::Directory::load).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub accepted: usize,
    pub skipped: Vec<RowDiagnostic>,
}

/// Write the header and one row per contact, in the order given.
///
/// # Errors
///
/// Returns the underlying I/O error if any write or the final flush fails.
pub fn write_contacts<W: io::Write>(writer: W, contacts: &[Contact]) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADER)?;

    for contact in contacts {
        wtr.write_record(row_fields(contact))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read every line after the first one.
///
/// The first physical line is the header and is discarded even when it is
/// blank. Every later line is one row: a blank line counts as a row with
/// neither a name nor a surname and is reported like any other skipped row.
///
/// # Errors
///
/// Only I/O failures of the underlying reader are returned. Per-row problems
/// end up in [`ParsedRows::skipped`].
pub fn read_contacts<R: io::Read>(reader: R) -> io::Result<ParsedRows> {
    let mut parsed = ParsedRows::default();

    for (index, segment) in io::BufReader::new(reader).split(b'\n').enumerate() {
        let mut bytes = segment?;
        if index == 0 {
            continue;
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = index as u64 + 1;
        let outcome = split_row(&bytes)
            .map_err(|err| RowParseError::Malformed(err.to_string()))
            .and_then(|record| parse_row(&record));
        match outcome {
            Ok(contact) => parsed.contacts.push(contact),
            Err(reason) => skip(&mut parsed, line, reason),
        }
    }

    Ok(parsed)
}

/// Split one line into fields. An empty line yields an empty record.
fn split_row(line: &[u8]) -> Result<csv::StringRecord, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(line);

    let mut record = csv::StringRecord::new();
    rdr.read_record(&mut record)?;
    Ok(record)
}

fn skip(parsed: &mut ParsedRows, line: u64, reason: RowParseError) {
    warn!(line, %reason, "Skipping contact row");
    parsed.skipped.push(RowDiagnostic { line, reason });
}

fn row_fields(contact: &Contact) -> Vec<&str> {
    let mut fields = Vec::with_capacity(HEADER.len());
    fields.push(contact.name());
    fields.push(contact.surname());
    fields.extend((0..MAX_PHONES).map(|i| contact.phones().get(i).map_or("", PhoneNumber::as_str)));
    fields.extend((0..MAX_EMAILS).map(|i| contact.emails().get(i).map_or("", EmailAddress::as_str)));
    fields
}

fn parse_row(record: &csv::StringRecord) -> Result<Contact, RowParseError> {
    let field = |i: usize| record.get(i).map_or("", str::trim);

    if record.len() > HEADER.len() {
        debug!(
            fields = record.len(),
            "Row has extra fields, ignoring everything past the eighth"
        );
    }

    let phones = (FIRST_PHONE..FIRST_EMAIL)
        .map(|i| PhoneNumber::new(field(i)))
        .collect();
    let emails = (FIRST_EMAIL..FIRST_EMAIL + MAX_EMAILS)
        .map(|i| EmailAddress::new(field(i)))
        .collect();

    let contact = Contact::new(field(NAME), field(SURNAME), phones, emails)
        .map_err(|e| RowParseError::Malformed(e.to_string()))?;
    if !contact.has_name() {
        return Err(RowParseError::MissingName);
    }
    Ok(contact)
}
