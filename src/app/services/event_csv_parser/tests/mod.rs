//! Tests for the event CSV parser

pub mod field_parser_tests;

use csv::StringRecord;

/// Build a well-formed 61-column export row as raw field values
pub fn test_row_fields() -> Vec<String> {
    let mut fields: Vec<String> = Vec::with_capacity(61);

    // Identity and calendar columns
    fields.extend(
        ["1037207561", "20230615", "202306", "2023", "2023.4521"]
            .iter()
            .map(|s| s.to_string()),
    );

    // Actor1 block
    fields.extend(
        ["USA", "UNITED STATES", "USA", "", "", "", "", "GOV", "", ""]
            .iter()
            .map(|s| s.to_string()),
    );

    // Actor2 block
    fields.extend(
        ["RUS", "RUSSIA", "RUS", "", "", "", "", "GOV", "", ""]
            .iter()
            .map(|s| s.to_string()),
    );

    // Event classification and counts
    fields.extend(
        ["1", "0251", "025", "02", "1", "-2", "10", "2", "10", "-1.53"]
            .iter()
            .map(|s| s.to_string()),
    );

    // Actor1 geography block
    fields.extend(
        [
            "3",
            "Washington, District of Columbia, United States",
            "US",
            "USDC",
            "",
            "38.8951",
            "-77.0364",
            "531871",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    // Actor2 geography block
    fields.extend(
        ["1", "Russia", "RS", "RS", "", "60", "100", "RS"]
            .iter()
            .map(|s| s.to_string()),
    );

    // Action geography block
    fields.extend(
        [
            "4",
            "Moscow, Moskva, Russia",
            "RS",
            "RS48",
            "",
            "55.7522",
            "37.6156",
            "-2960561",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    // Ingestion timestamp and source
    fields.push("20230615120000".to_string());
    fields.push("https://example.com/article".to_string());

    assert_eq!(fields.len(), 61);
    fields
}

/// Build a well-formed export row as a CSV record
pub fn test_record() -> StringRecord {
    StringRecord::from(test_row_fields())
}

/// Build a well-formed export row as a tab-joined line
pub fn test_row_line() -> String {
    test_row_fields().join("\t")
}
