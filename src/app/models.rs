//! Data models for GDELT event records
//!
//! This module contains the core data structures for representing GDELT v2
//! export records, following the GDELT Event Database codebook: the aggregate
//! event record, its two actor blocks, and its three geography blocks.

use crate::app::services::country_registry::CountryRegistry;
use crate::constants::{DATE_ADDED_DIGITS, DATE_ADDED_FORMAT};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Geographic Resolution Type
// =============================================================================

/// Geographic resolution of a location match
///
/// GDELT encodes the granularity of every geographic match as a small integer.
/// Any value outside the closed set {0..5} is rejected during decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GeoType {
    /// No geographic match for this block
    #[default]
    Unspecified = 0,

    /// Country-level match
    Country = 1,

    /// US state-level match
    UsState = 2,

    /// US city or landmark match
    UsCity = 3,

    /// Non-US city or landmark match
    WorldCity = 4,

    /// Non-US state or province match
    WorldState = 5,
}

impl GeoType {
    /// Get the codebook name of this resolution type (empty for unspecified)
    pub fn name(self) -> &'static str {
        match self {
            GeoType::Unspecified => "",
            GeoType::Country => "COUNTRY",
            GeoType::UsState => "USSTATE",
            GeoType::UsCity => "USCITY",
            GeoType::WorldCity => "WORLDCITY",
            GeoType::WorldState => "WORLDSTATE",
        }
    }

    /// Get all possible resolution type values
    pub fn all_values() -> [GeoType; 6] {
        [
            GeoType::Unspecified,
            GeoType::Country,
            GeoType::UsState,
            GeoType::UsCity,
            GeoType::WorldCity,
            GeoType::WorldState,
        ]
    }
}

impl TryFrom<i64> for GeoType {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(GeoType::Unspecified),
            1 => Ok(GeoType::Country),
            2 => Ok(GeoType::UsState),
            3 => Ok(GeoType::UsCity),
            4 => Ok(GeoType::WorldCity),
            5 => Ok(GeoType::WorldState),
            _ => Err(Error::invalid_geo_type("geo_type", value)),
        }
    }
}

impl FromStr for GeoType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::field_parsing("geo_type", s))?;
        GeoType::try_from(value)
    }
}

impl From<GeoType> for u8 {
    fn from(geo_type: GeoType) -> Self {
        geo_type as u8
    }
}

impl std::fmt::Display for GeoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

// =============================================================================
// Actor Block Structure
// =============================================================================

/// Actor descriptor decoded from 10 consecutive export columns
///
/// All fields are free-form CAMEO codes or names; an empty string is a legal
/// "absent" value for each, so no validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorData {
    /// Complete raw CAMEO actor code
    pub code: String,

    /// Actual name of the actor (e.g. "UNITED STATES")
    pub name: String,

    /// 3-character CAMEO country code of the actor
    pub country_code: String,

    /// CAMEO code for known IGOs, NGOs and rebel groups
    pub known_group_code: String,

    /// CAMEO ethnic affiliation code, when specified
    pub ethnic_code: String,

    /// Primary CAMEO religious affiliation code
    pub religion1_code: String,

    /// Secondary CAMEO religious affiliation code
    pub religion2_code: String,

    /// Primary actor type/role code (e.g. "GOV", "MED")
    pub type1_code: String,

    /// Secondary actor type/role code
    pub type2_code: String,

    /// Tertiary actor type/role code
    pub type3_code: String,
}

// =============================================================================
// Geography Block Structure
// =============================================================================

/// Geographic descriptor decoded from 8 consecutive export columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoData {
    /// Geographic resolution of the match
    pub geo_type: GeoType,

    /// Full human-readable name of the matched location
    ///
    /// For a country it is simply the country name; for US and world states
    /// it is "State, Country Name"; for all other matches it is
    /// "City/Landmark, State, Country".
    pub full_name: String,

    /// 2-character FIPS 10-4 country code of the location
    pub country_code: String,

    /// FIPS 10-4 administrative division 1 code
    pub adm1_code: String,

    /// Administrative division 2 code, when available
    pub adm2_code: String,

    /// Centroid latitude of the landmark, absent when no coordinates matched
    pub lat: Option<f64>,

    /// Centroid longitude of the landmark, absent when no coordinates matched
    pub long: Option<f64>,

    /// GNS or GNIS feature identifier of the landmark
    pub feature_id: String,
}

impl GeoData {
    /// Translate the legacy FIPS 10-4 country code into ISO 3166-1 alpha-2
    ///
    /// The translation table is an injected read-only dependency. An empty
    /// country code yields `Ok(None)`; a non-empty code missing from the
    /// table is an error.
    pub fn country_code_iso3166_1(
        &self,
        registry: &CountryRegistry,
    ) -> Result<Option<&'static str>> {
        if self.country_code.is_empty() {
            return Ok(None);
        }
        registry
            .lookup(&self.country_code)
            .map(Some)
            .ok_or_else(|| Error::unknown_country_code(&self.country_code))
    }

    /// Check whether this block carries both centroid coordinates
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.long.is_some()
    }
}

// =============================================================================
// Event Record Structure
// =============================================================================

/// A single GDELT v2 event record decoded from one export row
///
/// Records are created fresh per decoded row and never mutated after
/// construction; ownership stays with the caller collecting results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Globally unique identifier of the event in the GDELT master dataset
    pub global_event_id: u64,

    /// Date the event took place, in YYYYMMDD format
    pub day: i64,

    /// Year and month the event took place, in YYYYMM format
    pub month_year: i64,

    /// Year the event took place
    pub year: i64,

    /// Alternative representation of the event date as a fractional year
    pub fraction_date: f64,

    /// First actor block
    pub actor1: ActorData,

    /// Second actor block
    pub actor2: ActorData,

    /// Whether the event was the root of its source document (0/1 semantics,
    /// preserved as an integer as published)
    pub is_root_event: i64,

    /// Raw CAMEO action code describing the action Actor1 performed upon Actor2
    pub event_code: String,

    /// Level-two CAMEO category of the event code
    ///
    /// CAMEO event codes form a three-level taxonomy. For a level-three code
    /// such as "0251" ("Appeal for easing of administrative sanctions") this
    /// holds "025" ("Appeal to yield"); for level-one or level-two codes it
    /// repeats the event code itself.
    pub event_base_code: String,

    /// Root-level CAMEO category of the event code
    ///
    /// For "0251" this holds "02" ("Appeal"); for level-one or level-two
    /// codes it repeats the event code itself.
    pub event_root_code: String,

    /// Primary event classification (verbal/material cooperation/conflict)
    pub quad_class: i64,

    /// Goldstein scale score of the event's theoretical impact
    pub goldstein_scale: Option<f64>,

    /// Total number of mentions across all source documents
    pub num_mentions: i64,

    /// Number of information sources containing one or more mentions
    pub num_sources: i64,

    /// Number of source documents containing one or more mentions
    pub num_articles: i64,

    /// Average tone of all documents containing one or more mentions
    pub avg_tone: f64,

    /// Geography block of the first actor
    pub actor1_geo: GeoData,

    /// Geography block of the second actor
    pub actor2_geo: GeoData,

    /// Geography block closest to the statement of action
    ///
    /// This is the best location to use for placing the event on a map or in
    /// other spatial context.
    pub action_geo: GeoData,

    /// Date the event was added to the master database, as a decimal-encoded
    /// UTC timestamp in YYYYMMDDHHMMSS format
    pub date_added: u64,

    /// URL or citation of the first news report the event was found in
    pub source_url: String,
}

impl Event {
    /// Convert the decimal-encoded `date_added` value to a UTC instant
    ///
    /// The value is zero-padded to 14 digits and parsed as YYYYMMDDHHMMSS.
    /// Values that do not form a valid calendar timestamp are an error.
    pub fn date_added_time(&self) -> Result<DateTime<Utc>> {
        let digits = format!("{:0width$}", self.date_added, width = DATE_ADDED_DIGITS);
        if digits.len() != DATE_ADDED_DIGITS {
            return Err(Error::invalid_date_added(self.date_added));
        }
        NaiveDateTime::parse_from_str(&digits, DATE_ADDED_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| Error::invalid_date_added(self.date_added))
    }

    /// Return the unique CAMEO category codes of this event, most general first
    ///
    /// Built from the root, base and leaf codes: the root code is kept when
    /// non-empty, the base code when non-empty and distinct from the root,
    /// and the leaf code when non-empty and distinct from both. Yields 0-3
    /// codes ordered from most general to most specific.
    pub fn all_cameo_event_codes(&self) -> Vec<&str> {
        let mut codes = Vec::with_capacity(3);
        if self.event_root_code.is_empty() {
            return codes;
        }
        codes.push(self.event_root_code.as_str());
        if self.event_base_code == self.event_root_code || self.event_base_code.is_empty() {
            return codes;
        }
        codes.push(self.event_base_code.as_str());
        if self.event_code == self.event_base_code
            || self.event_code == self.event_root_code
            || self.event_code.is_empty()
        {
            return codes;
        }
        codes.push(self.event_code.as_str());
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_event() -> Event {
        Event {
            global_event_id: 1037207561,
            day: 20230615,
            month_year: 202306,
            year: 2023,
            fraction_date: 2023.4521,
            event_code: "0251".to_string(),
            event_base_code: "025".to_string(),
            event_root_code: "02".to_string(),
            quad_class: 1,
            goldstein_scale: Some(-2.0),
            num_mentions: 10,
            num_sources: 2,
            num_articles: 10,
            avg_tone: -1.53,
            date_added: 20230615120000,
            source_url: "https://example.com/article".to_string(),
            ..Default::default()
        }
    }

    mod geo_type_tests {
        use super::*;

        #[test]
        fn test_geo_type_from_i64() {
            assert_eq!(GeoType::try_from(0i64).unwrap(), GeoType::Unspecified);
            assert_eq!(GeoType::try_from(1i64).unwrap(), GeoType::Country);
            assert_eq!(GeoType::try_from(2i64).unwrap(), GeoType::UsState);
            assert_eq!(GeoType::try_from(3i64).unwrap(), GeoType::UsCity);
            assert_eq!(GeoType::try_from(4i64).unwrap(), GeoType::WorldCity);
            assert_eq!(GeoType::try_from(5i64).unwrap(), GeoType::WorldState);
        }

        #[test]
        fn test_geo_type_rejects_out_of_range() {
            assert!(GeoType::try_from(-1i64).is_err());
            assert!(GeoType::try_from(6i64).is_err());
            assert!(GeoType::try_from(42i64).is_err());
        }

        #[test]
        fn test_geo_type_from_string() {
            assert_eq!(GeoType::from_str("3").unwrap(), GeoType::UsCity);
            assert!(GeoType::from_str("9").is_err());
            assert!(GeoType::from_str("city").is_err());
        }

        #[test]
        fn test_geo_type_names() {
            assert_eq!(GeoType::Unspecified.name(), "");
            assert_eq!(GeoType::Country.name(), "COUNTRY");
            assert_eq!(GeoType::WorldState.name(), "WORLDSTATE");
        }

        #[test]
        fn test_geo_type_to_u8() {
            assert_eq!(u8::from(GeoType::Unspecified), 0);
            assert_eq!(u8::from(GeoType::WorldState), 5);
        }

        #[test]
        fn test_geo_type_all_values() {
            let all = GeoType::all_values();
            assert_eq!(all.len(), 6);
            assert!(all.contains(&GeoType::Country));
            assert!(all.contains(&GeoType::WorldCity));
        }
    }

    mod geo_data_tests {
        use super::*;

        #[test]
        fn test_country_code_translation() {
            let registry = CountryRegistry::new();
            let geo = GeoData {
                geo_type: GeoType::Country,
                country_code: "UK".to_string(),
                ..Default::default()
            };
            assert_eq!(
                geo.country_code_iso3166_1(&registry).unwrap(),
                Some("GB")
            );
        }

        #[test]
        fn test_country_code_translation_empty() {
            let registry = CountryRegistry::new();
            let geo = GeoData::default();
            assert_eq!(geo.country_code_iso3166_1(&registry).unwrap(), None);
        }

        #[test]
        fn test_country_code_translation_unknown() {
            let registry = CountryRegistry::new();
            let geo = GeoData {
                country_code: "ZZ".to_string(),
                ..Default::default()
            };
            assert!(geo.country_code_iso3166_1(&registry).is_err());
        }

        #[test]
        fn test_has_coordinates() {
            let mut geo = GeoData {
                lat: Some(51.5),
                long: Some(-0.12),
                ..Default::default()
            };
            assert!(geo.has_coordinates());

            // Partial coordinates are legal but incomplete
            geo.long = None;
            assert!(!geo.has_coordinates());
        }
    }

    mod date_added_tests {
        use super::*;

        #[test]
        fn test_date_added_time_valid() {
            let event = create_test_event();
            let instant = event.date_added_time().unwrap();
            assert_eq!(
                instant,
                Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap()
            );
        }

        #[test]
        fn test_date_added_time_invalid_month() {
            let mut event = create_test_event();
            event.date_added = 20231315120000; // month 13
            assert!(event.date_added_time().is_err());
        }

        #[test]
        fn test_date_added_time_short_value() {
            let mut event = create_test_event();
            // Zero-pads to "00000000000123", which is not a valid date
            event.date_added = 123;
            assert!(event.date_added_time().is_err());
        }

        #[test]
        fn test_date_added_time_too_many_digits() {
            let mut event = create_test_event();
            event.date_added = 920230615120000; // 15 digits
            assert!(event.date_added_time().is_err());
        }
    }

    mod cameo_code_tests {
        use super::*;

        #[test]
        fn test_all_codes_distinct() {
            let event = create_test_event();
            assert_eq!(event.all_cameo_event_codes(), vec!["02", "025", "0251"]);
        }

        #[test]
        fn test_all_codes_identical() {
            let mut event = create_test_event();
            event.event_code = "02".to_string();
            event.event_base_code = "02".to_string();
            event.event_root_code = "02".to_string();
            assert_eq!(event.all_cameo_event_codes(), vec!["02"]);
        }

        #[test]
        fn test_all_codes_empty() {
            let mut event = create_test_event();
            event.event_code = String::new();
            event.event_base_code = String::new();
            event.event_root_code = String::new();
            assert!(event.all_cameo_event_codes().is_empty());
        }

        #[test]
        fn test_leaf_matches_root() {
            let mut event = create_test_event();
            event.event_code = "02".to_string();
            event.event_base_code = "025".to_string();
            event.event_root_code = "02".to_string();
            assert_eq!(event.all_cameo_event_codes(), vec!["02", "025"]);
        }

        #[test]
        fn test_empty_root_suppresses_all() {
            let mut event = create_test_event();
            event.event_root_code = String::new();
            assert!(event.all_cameo_event_codes().is_empty());
        }
    }

    #[test]
    fn test_serde_serialization() {
        let event = create_test_event();

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
