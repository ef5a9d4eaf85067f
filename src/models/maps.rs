use crate::common::de::null_as_default;
use crate::models::users::UserCompact;
use crate::models::{GameMode, RankedStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Map {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub mapset_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub md5: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alternative_md5: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub creator_username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub game_mode: GameMode,
    #[serde(deserialize_with = "null_as_default")]
    pub ranked_status: RankedStatus,
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
    pub difficulty_name: String,
    /// Milliseconds.
    #[serde(deserialize_with = "null_as_default")]
    pub length: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub bpm: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_hitobject_normal: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_hitobject_long: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub long_note_percentage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_combo: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub play_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fail_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub play_attempts: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mods_pending: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mods_accepted: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mods_denied: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mods_ignored: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub online_offset: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_clan_ranked: bool,
}

impl Map {
    /// `Artist - Title [Difficulty]`
    pub fn display_name(&self) -> String {
        format!("{} - {} [{}]", self.artist, self.title, self.difficulty_name)
    }

    pub fn pass_count(&self) -> i64 {
        self.play_count - self.fail_count
    }
}

/// A ranking-queue review left on a map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapModeration {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub map_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub author_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub map_timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: UserCompact,
    #[serde(deserialize_with = "null_as_default")]
    pub replies: Vec<MapModerationReply>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapModerationReply {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub map_mod_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub author_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub comments: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spam: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub author: UserCompact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_map() {
        let map: Map = serde_json::from_str(
            r#"{
                "id": 2,
                "mapset_id": 1,
                "md5": "a8f9e5c3",
                "game_mode": 2,
                "ranked_status": 2,
                "artist": "Camellia",
                "title": "Exit This Earth's Atomosphere",
                "difficulty_name": "Extra",
                "bpm": 170,
                "difficulty_rating": 31.2,
                "play_count": 10,
                "fail_count": 4
            }"#,
        )
        .unwrap();
        assert_eq!(map.game_mode, GameMode::Keys7);
        assert_eq!(map.ranked_status, RankedStatus::Ranked);
        assert_eq!(map.bpm, 170.0);
        assert_eq!(map.pass_count(), 6);
        assert_eq!(
            map.display_name(),
            "Camellia - Exit This Earth's Atomosphere [Extra]"
        );
    }

    #[test]
    fn decodes_moderation_with_replies() {
        let moderation: MapModeration = serde_json::from_str(
            r#"{
                "id": 11,
                "map_id": 2,
                "type": "Issue",
                "status": "Pending",
                "author": {"id": 5, "username": "checker"},
                "replies": [
                    {"id": 1, "map_mod_id": 11, "comments": "fixed", "author": {"id": 6}},
                    {"id": 2, "map_mod_id": 11, "spam": true}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(moderation.kind, "Issue");
        assert_eq!(moderation.author.username, "checker");
        assert_eq!(moderation.replies.len(), 2);
        assert_eq!(moderation.replies[0].author.id, 6);
        assert!(moderation.replies[1].spam);
    }

    #[test]
    fn null_fields_read_as_zero_values() {
        let moderation: MapModeration = serde_json::from_str(
            r#"{"id": 12, "comment": null, "author": null, "replies": null}"#,
        )
        .unwrap();
        assert_eq!(moderation.comment, "");
        assert_eq!(moderation.author, UserCompact::default());
        assert!(moderation.replies.is_empty());

        let map: Map =
            serde_json::from_str(r#"{"id": 3, "artist": null, "game_mode": null}"#).unwrap();
        assert_eq!(map.artist, "");
        assert_eq!(map.game_mode, GameMode::Keys4);
    }
}
