//! Country code registry service for O(1) legacy code translation
//!
//! GDELT geography blocks carry 2-character FIPS 10-4 country codes, a legacy
//! scheme distinct from ISO 3166-1. This module provides a read-only registry
//! translating FIPS 10-4 codes into ISO 3166-1 alpha-2 codes, indexed for
//! O(1) lookups. The registry is an injected dependency of the geography
//! model rather than a hidden global.

use std::collections::HashMap;

pub mod table;

#[cfg(test)]
pub mod tests;

/// Registry translating FIPS 10-4 country codes into ISO 3166-1 alpha-2
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    /// ISO codes indexed by FIPS 10-4 code for O(1) lookups
    codes: HashMap<&'static str, &'static str>,
}

impl CountryRegistry {
    /// Create a registry loaded with the bundled translation table
    pub fn new() -> Self {
        Self {
            codes: table::FIPS104_TO_ISO31661.iter().copied().collect(),
        }
    }

    /// Get the ISO 3166-1 alpha-2 code for a FIPS 10-4 code (O(1) lookup)
    pub fn lookup(&self, fips_code: &str) -> Option<&'static str> {
        self.codes.get(fips_code).copied()
    }

    /// Check if a FIPS 10-4 code exists in the registry
    pub fn contains(&self, fips_code: &str) -> bool {
        self.codes.contains_key(fips_code)
    }

    /// Get the total number of translations in the registry
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
