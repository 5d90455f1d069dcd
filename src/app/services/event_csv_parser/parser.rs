//! Streaming reader over tab-delimited export input
//!
//! This module wraps a CSV reader configured for the export conventions
//! (tab delimiter, no header row, default quoting) and drives the record
//! parser row by row, preserving file order.

use std::io::Read;

use csv::StringRecord;
use tracing::debug;

use super::record_parser::parse_event_record;
use crate::app::models::Event;
use crate::{Error, Result};

/// Streaming event reader for GDELT export tables
///
/// Rows are decoded in file order. Decoding is strict: any CSV-layer read
/// failure or malformed row is surfaced to the caller, and [`read_all`]
/// aborts on the first error with no partial result.
///
/// [`read_all`]: EventCsvReader::read_all
#[derive(Debug)]
pub struct EventCsvReader<R: Read> {
    csv_reader: csv::Reader<R>,
    record: StringRecord,
    rows_read: u64,
}

impl<R: Read> EventCsvReader<R> {
    /// Create a reader over tab-delimited export input
    pub fn new(reader: R) -> Self {
        // flexible: row width is enforced by the record parser so that the
        // error names the actual column count
        let csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        Self {
            csv_reader,
            record: StringRecord::new(),
            rows_read: 0,
        }
    }

    /// Read and decode the next event record, or `None` at end of input
    pub fn read_event(&mut self) -> Option<Result<Event>> {
        match self.csv_reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                self.rows_read += 1;
                Some(parse_event_record(&self.record))
            }
            Err(e) => Some(Err(Error::csv_parsing(
                format!("failed to read row {}", self.rows_read + 1),
                Some(e),
            ))),
        }
    }

    /// Decode every row into an ordered sequence of events
    ///
    /// The result preserves physical file order; no deduplication or sorting
    /// is applied. The first error aborts the decode.
    pub fn read_all(mut self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        while let Some(result) = self.read_event() {
            events.push(result?);
        }
        debug!("Decoded {} event records", events.len());
        Ok(events)
    }
}

impl<R: Read> Iterator for EventCsvReader<R> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_event()
    }
}
