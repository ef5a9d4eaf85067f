use crate::common::de::null_as_default;
use crate::models::maps::Map;
use crate::models::users::UserCompact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapsetCompact {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub package_md5: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub creator_username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_submitted: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub date_last_updated: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_visible: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_explicit: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mapset {
    #[serde(flatten)]
    pub mapset: MapsetCompact,
    #[serde(deserialize_with = "null_as_default")]
    pub maps: Vec<Map>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapsetWithUser {
    #[serde(flatten)]
    pub mapset: Mapset,
    #[serde(deserialize_with = "null_as_default")]
    pub user: UserCompact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: i64,
}
