//! Field parsing utilities for GDELT export records
//!
//! This module provides helper functions for converting raw export columns to
//! their target types. Values are taken verbatim - the export format never
//! pads fields, so no trimming is applied anywhere.

use crate::{Error, Result};
use csv::StringRecord;

/// Get a raw field value from an export record
pub fn get_field<'a>(
    record: &'a StringRecord,
    index: usize,
    field_name: &str,
) -> Result<&'a str> {
    record
        .get(index)
        .ok_or_else(|| Error::field_parsing(field_name, format!("<missing column {index}>")))
}

/// Parse an unsigned 64-bit decimal field
pub fn parse_u64_field(record: &StringRecord, index: usize, field_name: &str) -> Result<u64> {
    let value = get_field(record, index, field_name)?;
    value
        .parse::<u64>()
        .map_err(|_| Error::field_parsing(field_name, value))
}

/// Parse a signed 64-bit decimal field
pub fn parse_i64_field(record: &StringRecord, index: usize, field_name: &str) -> Result<i64> {
    let value = get_field(record, index, field_name)?;
    value
        .parse::<i64>()
        .map_err(|_| Error::field_parsing(field_name, value))
}

/// Parse a decimal float field
pub fn parse_f64_field(record: &StringRecord, index: usize, field_name: &str) -> Result<f64> {
    let value = get_field(record, index, field_name)?;
    value
        .parse::<f64>()
        .map_err(|_| Error::field_parsing(field_name, value))
}

/// Parse an optionally-empty decimal float field
///
/// An empty field is absent, with no parse attempt; non-empty text that does
/// not parse is an error carrying the raw value.
pub fn parse_nullable_f64_field(
    record: &StringRecord,
    index: usize,
    field_name: &str,
) -> Result<Option<f64>> {
    let value = get_field(record, index, field_name)?;
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| Error::field_parsing(field_name, value))
}

/// Copy a field verbatim into an owned string
pub fn string_field(record: &StringRecord, index: usize, field_name: &str) -> Result<String> {
    get_field(record, index, field_name).map(str::to_string)
}
