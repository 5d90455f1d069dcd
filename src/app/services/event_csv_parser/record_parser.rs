//! Individual export row parsing for GDELT event records
//!
//! This module decodes one pre-split 61-column row into an [`Event`],
//! applying the per-field rules of the export schema. The first failing
//! field wins and is reported with its logical name and raw text.

use csv::StringRecord;

use super::field_parsers::{
    get_field, parse_f64_field, parse_i64_field, parse_nullable_f64_field, parse_u64_field,
    string_field,
};
use crate::app::models::{ActorData, Event, GeoData, GeoType};
use crate::constants::{EXPORT_FIELD_COUNT, columns};
use crate::{Error, Result};

/// Parse a single event record from an export row
///
/// The row width is checked before any field: a row with other than 61
/// columns is a structural error naming the actual count. On any failure no
/// partial record is returned.
pub fn parse_event_record(record: &StringRecord) -> Result<Event> {
    if record.len() != EXPORT_FIELD_COUNT {
        return Err(Error::field_count(EXPORT_FIELD_COUNT, record.len()));
    }

    let event = Event {
        global_event_id: parse_u64_field(record, columns::GLOBAL_EVENT_ID, "global_event_id")?,
        day: parse_i64_field(record, columns::DAY, "day")?,
        month_year: parse_i64_field(record, columns::MONTH_YEAR, "month_year")?,
        year: parse_i64_field(record, columns::YEAR, "year")?,
        fraction_date: parse_f64_field(record, columns::FRACTION_DATE, "fraction_date")?,
        actor1: parse_actor_block(record, columns::ACTOR1, "actor1")?,
        actor2: parse_actor_block(record, columns::ACTOR2, "actor2")?,
        is_root_event: parse_i64_field(record, columns::IS_ROOT_EVENT, "is_root_event")?,
        event_code: string_field(record, columns::EVENT_CODE, "event_code")?,
        event_base_code: string_field(record, columns::EVENT_BASE_CODE, "event_base_code")?,
        event_root_code: string_field(record, columns::EVENT_ROOT_CODE, "event_root_code")?,
        quad_class: parse_i64_field(record, columns::QUAD_CLASS, "quad_class")?,
        goldstein_scale: parse_nullable_f64_field(
            record,
            columns::GOLDSTEIN_SCALE,
            "goldstein_scale",
        )?,
        num_mentions: parse_i64_field(record, columns::NUM_MENTIONS, "num_mentions")?,
        num_sources: parse_i64_field(record, columns::NUM_SOURCES, "num_sources")?,
        num_articles: parse_i64_field(record, columns::NUM_ARTICLES, "num_articles")?,
        avg_tone: parse_f64_field(record, columns::AVG_TONE, "avg_tone")?,
        actor1_geo: parse_geo_block(record, columns::ACTOR1_GEO, "actor1_geo")?,
        actor2_geo: parse_geo_block(record, columns::ACTOR2_GEO, "actor2_geo")?,
        action_geo: parse_geo_block(record, columns::ACTION_GEO, "action_geo")?,
        date_added: parse_u64_field(record, columns::DATE_ADDED, "date_added")?,
        source_url: string_field(record, columns::SOURCE_URL, "source_url")?,
    };

    // A date_added whose zero-padded form is not a valid calendar timestamp
    // is a decode error, not a latent one surfaced on first use.
    event.date_added_time()?;

    Ok(event)
}

/// Split 10 consecutive columns positionally into an actor block, verbatim
fn parse_actor_block(record: &StringRecord, offset: usize, block: &str) -> Result<ActorData> {
    Ok(ActorData {
        code: string_field(record, offset, &format!("{block}.code"))?,
        name: string_field(record, offset + 1, &format!("{block}.name"))?,
        country_code: string_field(record, offset + 2, &format!("{block}.country_code"))?,
        known_group_code: string_field(record, offset + 3, &format!("{block}.known_group_code"))?,
        ethnic_code: string_field(record, offset + 4, &format!("{block}.ethnic_code"))?,
        religion1_code: string_field(record, offset + 5, &format!("{block}.religion1_code"))?,
        religion2_code: string_field(record, offset + 6, &format!("{block}.religion2_code"))?,
        type1_code: string_field(record, offset + 7, &format!("{block}.type1_code"))?,
        type2_code: string_field(record, offset + 8, &format!("{block}.type2_code"))?,
        type3_code: string_field(record, offset + 9, &format!("{block}.type3_code"))?,
    })
}

/// Parse 8 consecutive columns into a geography block
///
/// The resolution type is parsed and validated first; latitude and longitude
/// are independently nullable, with empty text meaning absent.
fn parse_geo_block(record: &StringRecord, offset: usize, block: &str) -> Result<GeoData> {
    let type_field = format!("{block}.geo_type");
    let type_text = get_field(record, offset, &type_field)?;
    let type_value: i64 = type_text
        .parse()
        .map_err(|_| Error::field_parsing(&type_field, type_text))?;
    let geo_type = GeoType::try_from(type_value)
        .map_err(|_| Error::invalid_geo_type(&type_field, type_value))?;

    Ok(GeoData {
        geo_type,
        full_name: string_field(record, offset + 1, &format!("{block}.full_name"))?,
        country_code: string_field(record, offset + 2, &format!("{block}.country_code"))?,
        adm1_code: string_field(record, offset + 3, &format!("{block}.adm1_code"))?,
        adm2_code: string_field(record, offset + 4, &format!("{block}.adm2_code"))?,
        lat: parse_nullable_f64_field(record, offset + 5, &format!("{block}.lat"))?,
        long: parse_nullable_f64_field(record, offset + 6, &format!("{block}.long"))?,
        feature_id: string_field(record, offset + 7, &format!("{block}.feature_id"))?,
    })
}
