use crate::common::de::null_as_default;
use crate::models::maps::Map;
use crate::models::mapsets::MapsetCompact;
use crate::models::users::{User, UserCompact};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistCompact {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub map_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub time_last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    #[serde(flatten)]
    pub playlist: PlaylistCompact,
    #[serde(deserialize_with = "null_as_default")]
    pub user: UserCompact,
    #[serde(deserialize_with = "null_as_default")]
    pub mapsets: Vec<PlaylistMapset>,
}

impl Playlist {
    /// Every map in playlist order.
    pub fn maps(&self) -> impl Iterator<Item = &Map> {
        self.mapsets
            .iter()
            .flat_map(|mapset| mapset.maps.iter().map(|entry| &entry.map))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistMapset {
    #[serde(deserialize_with = "null_as_default")]
    pub playlist_mapset_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub mapset: MapsetCompact,
    #[serde(deserialize_with = "null_as_default")]
    pub maps: Vec<PlaylistMap>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistMap {
    #[serde(deserialize_with = "null_as_default")]
    pub playlist_map_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub map: Map,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistSearch {
    #[serde(deserialize_with = "null_as_default")]
    pub playlists: Vec<PlaylistCompact>,
    #[serde(deserialize_with = "null_as_default")]
    pub user: User,
}
