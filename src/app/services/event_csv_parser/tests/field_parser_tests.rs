//! Tests for field parsing utility functions

use crate::Error;
use crate::app::services::event_csv_parser::field_parsers::{
    get_field, parse_f64_field, parse_i64_field, parse_nullable_f64_field, parse_u64_field,
    string_field,
};
use csv::StringRecord;

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_get_field_in_range() {
    let record = record(&["a", "b"]);
    assert_eq!(get_field(&record, 1, "second").unwrap(), "b");
}

#[test]
fn test_get_field_out_of_range() {
    let record = record(&["a"]);
    let err = get_field(&record, 5, "missing").unwrap_err();
    match err {
        Error::FieldParsing { field, .. } => assert_eq!(field, "missing"),
        other => panic!("expected FieldParsing error, got {other:?}"),
    }
}

#[test]
fn test_parse_u64_field() {
    let record = record(&["20230615120000"]);
    assert_eq!(
        parse_u64_field(&record, 0, "date_added").unwrap(),
        20230615120000
    );
}

#[test]
fn test_parse_u64_field_rejects_negative() {
    let record = record(&["-1"]);
    assert!(parse_u64_field(&record, 0, "date_added").is_err());
}

#[test]
fn test_parse_i64_field() {
    let record = record(&["-42", "7"]);
    assert_eq!(parse_i64_field(&record, 0, "tone").unwrap(), -42);
    assert_eq!(parse_i64_field(&record, 1, "count").unwrap(), 7);
}

#[test]
fn test_parse_i64_field_rejects_empty() {
    let record = record(&[""]);
    let err = parse_i64_field(&record, 0, "count").unwrap_err();
    match err {
        Error::FieldParsing { field, value } => {
            assert_eq!(field, "count");
            assert_eq!(value, "");
        }
        other => panic!("expected FieldParsing error, got {other:?}"),
    }
}

#[test]
fn test_parse_f64_field() {
    let record = record(&["-1.53"]);
    assert_eq!(parse_f64_field(&record, 0, "avg_tone").unwrap(), -1.53);
}

#[test]
fn test_parse_nullable_f64_field_empty() {
    let record = record(&[""]);
    assert_eq!(parse_nullable_f64_field(&record, 0, "lat").unwrap(), None);
}

#[test]
fn test_parse_nullable_f64_field_present() {
    let record = record(&["38.8951"]);
    assert_eq!(
        parse_nullable_f64_field(&record, 0, "lat").unwrap(),
        Some(38.8951)
    );
}

#[test]
fn test_parse_nullable_f64_field_invalid() {
    let record = record(&["north"]);
    assert!(parse_nullable_f64_field(&record, 0, "lat").is_err());
}

#[test]
fn test_string_field_is_verbatim() {
    // No trimming: the export format never pads fields
    let record = record(&[" padded "]);
    assert_eq!(string_field(&record, 0, "name").unwrap(), " padded ");
}
