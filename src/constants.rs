//! Application constants for GDELT fetcher
//!
//! This module contains the manifest and archive conventions of the GDELT v2
//! export distribution, plus the fixed column layout of the export schema.

// =============================================================================
// Snapshot Distribution Conventions
// =============================================================================

/// Default URL of the GDELT v2 "last update" manifest
pub const DEFAULT_LAST_UPDATE_URL: &str = "http://data.gdeltproject.org/gdeltv2/lastupdate.txt";

/// Manifest line shape naming the latest export snapshot:
/// `<decimal size> <32 lowercase hex chars> <url of a dated .export.CSV.zip>`
pub const EXPORT_CSV_ZIP_PATTERN: &str = r"(?P<size>\d+) (?P<md5sum>[0-9a-f]{32}) (?P<url>http://data\.gdeltproject\.org/gdeltv2/\d{14}\.export\.CSV\.zip)";

/// Suffix of the single archive entry holding the export table
pub const EXPORT_CSV_SUFFIX: &str = ".export.CSV";

// =============================================================================
// Export Schema Layout
// =============================================================================

/// Number of tab-separated columns in every export row
pub const EXPORT_FIELD_COUNT: usize = 61;

/// Column offsets of the 61-field export schema
pub mod columns {
    pub const GLOBAL_EVENT_ID: usize = 0;
    pub const DAY: usize = 1;
    pub const MONTH_YEAR: usize = 2;
    pub const YEAR: usize = 3;
    pub const FRACTION_DATE: usize = 4;

    /// First column of the Actor1 block
    pub const ACTOR1: usize = 5;
    /// First column of the Actor2 block
    pub const ACTOR2: usize = 15;
    /// Width of an actor block
    pub const ACTOR_BLOCK_LEN: usize = 10;

    pub const IS_ROOT_EVENT: usize = 25;
    pub const EVENT_CODE: usize = 26;
    pub const EVENT_BASE_CODE: usize = 27;
    pub const EVENT_ROOT_CODE: usize = 28;
    pub const QUAD_CLASS: usize = 29;
    pub const GOLDSTEIN_SCALE: usize = 30;
    pub const NUM_MENTIONS: usize = 31;
    pub const NUM_SOURCES: usize = 32;
    pub const NUM_ARTICLES: usize = 33;
    pub const AVG_TONE: usize = 34;

    /// First column of the Actor1 geography block
    pub const ACTOR1_GEO: usize = 35;
    /// First column of the Actor2 geography block
    pub const ACTOR2_GEO: usize = 43;
    /// First column of the action geography block
    pub const ACTION_GEO: usize = 51;
    /// Width of a geography block
    pub const GEO_BLOCK_LEN: usize = 8;

    pub const DATE_ADDED: usize = 59;
    pub const SOURCE_URL: usize = 60;
}

// =============================================================================
// Timestamp Conventions
// =============================================================================

/// chrono format of the decimal-encoded `date_added` timestamp
pub const DATE_ADDED_FORMAT: &str = "%Y%m%d%H%M%S";

/// Digit count of a well-formed `date_added` value after zero-padding
pub const DATE_ADDED_DIGITS: usize = 14;
