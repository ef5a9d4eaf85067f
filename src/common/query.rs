use crate::common::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Single-page selector shared by every listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: u32,
}

impl ListOptions {
    pub fn page(page: u32) -> Self {
        Self { page }
    }
}

/// Filters for `mapset/search`. Unset (zero) fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapsetSearchOptions {
    #[serde(flatten)]
    pub list: ListOptions,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub ranked_status: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_difficulty_rating: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_difficulty_rating: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_bpm: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_bpm: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_length: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_length: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_long_note_percent: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_long_note_percent: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_play_count: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_play_count: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_combo: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_combo: i64,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_date_submitted: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_date_submitted: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_last_updated: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_false")]
    pub show_explicit: bool,
}

pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Encodes `options` as a query string, parameters in field order.
pub fn encode<T: Serialize>(options: &T) -> Result<String> {
    Ok(serde_urlencoded::to_string(options)?)
}

/// Appends the encoded `options` to `path`, or returns `path` untouched when
/// every option is unset.
pub fn with_query<T: Serialize>(path: impl Into<String>, options: &T) -> Result<String> {
    let mut path = path.into();
    let query = encode(options)?;
    if !query.is_empty() {
        path.push(if path.contains('?') { '&' } else { '?' });
        path.push_str(&query);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zero_options_encode_to_nothing() {
        assert_eq!(encode(&ListOptions::default()).unwrap(), "");
        assert_eq!(encode(&MapsetSearchOptions::default()).unwrap(), "");
    }

    #[test]
    fn single_field() {
        assert_eq!(encode(&ListOptions::page(3)).unwrap(), "page=3");

        let opts = MapsetSearchOptions {
            min_bpm: 180.5,
            ..Default::default()
        };
        assert_eq!(encode(&opts).unwrap(), "min_bpm=180.5");
    }

    #[test]
    fn time_fields_are_unix_seconds() {
        let opts = MapsetSearchOptions {
            min_date_submitted: Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(encode(&opts).unwrap(), "min_date_submitted=1609459200");
    }

    #[test]
    fn field_order_is_stable() {
        let opts = MapsetSearchOptions {
            list: ListOptions::page(2),
            search: "camellia ghost".to_owned(),
            show_explicit: true,
            max_length: 120,
            ..Default::default()
        };
        let expected = "page=2&search=camellia+ghost&max_length=120&show_explicit=true";
        assert_eq!(encode(&opts).unwrap(), expected);
        assert_eq!(encode(&opts).unwrap(), expected);
    }

    #[test]
    fn appending_to_paths() {
        assert_eq!(
            with_query("multiplayer/games", &ListOptions::default()).unwrap(),
            "multiplayer/games"
        );
        assert_eq!(
            with_query("clan/5/activity", &ListOptions::page(1)).unwrap(),
            "clan/5/activity?page=1"
        );
        assert_eq!(
            with_query("leaderboard/global?mode=1", &ListOptions::page(4)).unwrap(),
            "leaderboard/global?mode=1&page=4"
        );
    }
}
