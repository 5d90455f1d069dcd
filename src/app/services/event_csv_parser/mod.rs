//! Tab-separated event parser for GDELT v2 export tables
//!
//! This module provides a strict parser for the fixed 61-column export schema.
//! Unlike lenient ingestion pipelines there is no skip-and-continue policy:
//! the first malformed row aborts the whole decode and no partial result is
//! returned, so callers never observe half a snapshot.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Streaming reader over tab-delimited input
//! - [`record_parser`] - Individual export row processing
//! - [`field_parsers`] - Utility functions for field parsing and validation

pub mod field_parsers;
pub mod parser;
pub mod record_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::EventCsvReader;
pub use record_parser::parse_event_record;
