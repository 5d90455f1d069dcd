//! GDELT Fetcher Library
//!
//! A Rust library for fetching the latest GDELT v2 event export snapshot and
//! decoding it into strongly-typed event records.
//!
//! This library provides tools for:
//! - Resolving the latest export snapshot reference from the GDELT update manifest
//! - Downloading the Zip-compressed export file and verifying its MD5 checksum
//! - Extracting the single `.export.CSV` entry from the archive
//! - Decoding the fixed 61-column tab-separated export schema into typed records
//! - Translating legacy FIPS 10-4 country codes into ISO 3166-1 alpha-2 codes
//! - Comprehensive error handling with field-level diagnostics

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod country_registry;
        pub mod event_csv_parser;
        pub mod snapshot_fetcher;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ActorData, Event, GeoData, GeoType};
pub use app::services::country_registry::CountryRegistry;
pub use app::services::snapshot_fetcher::{SnapshotFetcher, SnapshotReference, get_latest_events};

/// Result type alias for the GDELT fetcher
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for GDELT fetching and decoding operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport failure
    #[error("HTTP GET '{url}' failed: {message}")]
    Http { url: String, message: String },

    /// HTTP request completed with a non-success status
    #[error("HTTP GET '{url}' returned status code {status}")]
    HttpStatus { url: String, status: u16 },

    /// The update manifest did not contain exactly one export snapshot reference
    #[error("expected exactly 1 export CSV Zip reference in manifest, found {matches}: {content:?}")]
    ManifestReference { matches: usize, content: String },

    /// Downloaded content does not match the expected MD5 checksum
    #[error("MD5 checksum mismatch: expected {expected}, actual {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// The Zip container could not be opened or read
    #[error("Zip archive error: {message}")]
    ZipArchive {
        message: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// More than one `.export.CSV` entry found in the archive
    #[error("multiple export CSV entries in Zip archive: '{first}' and '{second}'")]
    AmbiguousArchive { first: String, second: String },

    /// CSV-layer read error
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A row did not have the expected number of columns
    #[error("expected {expected} CSV columns, actual {found}")]
    FieldCount { expected: usize, found: usize },

    /// A field value could not be converted to its target type
    #[error("parse error for field '{field}': invalid value {value:?}")]
    FieldParsing { field: String, value: String },

    /// A geographic resolution type outside the closed set {0..5}
    #[error("invalid geographic resolution type for '{field}': {value}")]
    InvalidGeoType { field: String, value: i64 },

    /// A date_added value whose zero-padded form is not a valid UTC timestamp
    #[error("invalid date_added timestamp: {value}")]
    InvalidDateAdded { value: u64 },

    /// A non-empty FIPS 10-4 country code missing from the translation table
    #[error("unknown FIPS 10-4 country code {code:?}")]
    UnknownCountryCode { code: String },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    JsonSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP transport error with the request URL
    pub fn http(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Http {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a non-success HTTP status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a manifest reference match-count error
    pub fn manifest_reference(matches: usize, content: impl Into<String>) -> Self {
        Self::ManifestReference {
            matches,
            content: content.into(),
        }
    }

    /// Create a checksum mismatch error
    pub fn checksum_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ChecksumMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a Zip archive error with context
    pub fn zip_archive(message: impl Into<String>, source: zip::result::ZipError) -> Self {
        Self::ZipArchive {
            message: message.into(),
            source,
        }
    }

    /// Create an ambiguous archive error naming both entries
    pub fn ambiguous_archive(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::AmbiguousArchive {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a column-count error naming the actual width
    pub fn field_count(expected: usize, found: usize) -> Self {
        Self::FieldCount { expected, found }
    }

    /// Create a field parse error with the offending raw text
    pub fn field_parsing(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldParsing {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid geographic resolution type error
    pub fn invalid_geo_type(field: impl Into<String>, value: i64) -> Self {
        Self::InvalidGeoType {
            field: field.into(),
            value,
        }
    }

    /// Create an invalid date_added error
    pub fn invalid_date_added(value: u64) -> Self {
        Self::InvalidDateAdded { value }
    }

    /// Create an unknown country code error
    pub fn unknown_country_code(code: impl Into<String>) -> Self {
        Self::UnknownCountryCode { code: code.into() }
    }

    /// Create a JSON serialization error with context
    pub fn json_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonSerialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonSerialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
