//! Tests for the country code registry service
