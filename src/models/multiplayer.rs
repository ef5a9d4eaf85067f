use crate::common::de::null_as_default;
use crate::models::GameMode;
use crate::models::maps::Map;
use crate::models::modifiers::Modifiers;
use crate::models::users::UserCompact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplayerGame {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unique_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_created: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub matches: Vec<MultiplayerMatch>,
}

/// Game listing entry; its matches carry no scores.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplayerGameCompact {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unique_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_created: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub matches: Vec<MultiplayerGameMatch>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplayerMatch {
    #[serde(flatten)]
    pub details: MultiplayerGameMatch,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub scores: Vec<MultiplayerMatchScore>,
}

impl MultiplayerMatch {
    pub fn winners(&self) -> impl Iterator<Item = &MultiplayerMatchScore> {
        self.scores.iter().filter(|score| score.won)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplayerGameMatch {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub game_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub time_played: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub map_md5: String,
    #[serde(deserialize_with = "null_as_default")]
    pub map_string: String,
    #[serde(deserialize_with = "null_as_default")]
    pub host_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub game_mode: GameMode,
    #[serde(deserialize_with = "null_as_default")]
    pub global_modifiers: Modifiers,
    #[serde(deserialize_with = "null_as_default")]
    pub free_mod_type: i8,
    #[serde(deserialize_with = "null_as_default")]
    pub aborted: bool,
    pub map: Option<Map>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplayerMatchScore {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub match_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub modifiers: Modifiers,
    #[serde(deserialize_with = "null_as_default")]
    pub performance_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub accuracy: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_combo: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_marvelous: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_perfect: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_great: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_good: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_okay: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_miss: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub won: bool,
    pub user: Option<UserCompact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME_JSON: &str = r#"{
        "id": 40,
        "unique_id": "3c4a",
        "name": "4K Tourney Lobby",
        "time_created": "2022-10-10T20:00:00Z",
        "matches": [
            {
                "id": 1,
                "game_id": 40,
                "map_md5": "a8f9e5c3",
                "game_mode": 1,
                "global_modifiers": 8,
                "map": null,
                "scores": [
                    {"id": 1, "user_id": 2, "won": true, "user": {"id": 2}},
                    {"id": 2, "user_id": 3, "won": false}
                ]
            },
            {"id": 2, "game_id": 40, "aborted": true}
        ]
    }"#;

    #[test]
    fn full_game_keeps_match_order_and_scores() {
        let game: MultiplayerGame = serde_json::from_str(GAME_JSON).unwrap();
        assert_eq!(game.matches.len(), 2);
        let first = &game.matches[0];
        assert_eq!(first.details.global_modifiers, Modifiers::Speed07X);
        assert_eq!(first.details.map, None);
        assert_eq!(first.scores.len(), 2);
        assert_eq!(first.winners().map(|s| s.user_id).collect::<Vec<_>>(), vec![2]);
        assert!(game.matches[1].details.aborted);
        assert!(game.matches[1].scores.is_empty());
    }

    #[test]
    fn match_without_scores_omits_the_field() {
        let game: MultiplayerGame = serde_json::from_str(GAME_JSON).unwrap();
        let json = serde_json::to_value(&game.matches[1]).unwrap();
        assert!(json.get("scores").is_none());
        assert_eq!(json["aborted"], true);
    }
}
