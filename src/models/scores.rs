use crate::common::de::null_as_default;
use crate::models::Grade;
use crate::models::maps::Map;
use crate::models::modifiers::Modifiers;
use crate::models::users::UserCompact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub map_md5: String,
    #[serde(deserialize_with = "null_as_default")]
    pub replay_md5: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_personal_best: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub performance_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub modifiers: Modifiers,
    #[serde(deserialize_with = "null_as_default")]
    pub failed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub total_score: i64,
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
    pub grade: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scroll_speed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_donator_score: bool,
    pub tournament_game_id: Option<u64>,
    pub clan_id: Option<u64>,
}

impl Score {
    /// `None` when the service sent a grade this crate does not know.
    pub fn grade(&self) -> Option<Grade> {
        self.grade.parse().ok()
    }

    pub fn total_judgements(&self) -> i64 {
        self.count_marvelous
            + self.count_perfect
            + self.count_great
            + self.count_good
            + self.count_okay
            + self.count_miss
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWithMap {
    #[serde(flatten)]
    pub score: Score,
    #[serde(deserialize_with = "null_as_default")]
    pub map: Map,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWithUser {
    #[serde(flatten)]
    pub score: Score,
    #[serde(deserialize_with = "null_as_default")]
    pub user: UserCompact,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORE_JSON: &str = r#"{
        "id": 901,
        "user_id": 2,
        "map_md5": "a8f9e5c3",
        "timestamp": "2023-07-14T19:02:11Z",
        "performance_rating": 41.07,
        "modifiers": 128,
        "accuracy": 99.12,
        "count_marvelous": 1500,
        "count_perfect": 300,
        "count_great": 12,
        "count_miss": 1,
        "grade": "SS",
        "tournament_game_id": null,
        "clan_id": 7,
        "user": {"id": 2, "username": "Swan", "avatar_url": ""}
    }"#;

    #[test]
    fn decodes_score_with_user() {
        let score: ScoreWithUser = serde_json::from_str(SCORE_JSON).unwrap();
        assert_eq!(score.score.id, 901);
        assert_eq!(score.score.modifiers, Modifiers::Speed12X);
        assert_eq!(score.score.grade(), Some(Grade::SS));
        assert_eq!(score.score.total_judgements(), 1813);
        assert_eq!(score.score.tournament_game_id, None);
        assert_eq!(score.score.clan_id, Some(7));
        assert_eq!(score.user.avatar_url.as_deref(), Some(""));
    }

    #[test]
    fn round_trip_keeps_optionals() {
        let score: ScoreWithUser = serde_json::from_str(SCORE_JSON).unwrap();
        let json = serde_json::to_string(&score).unwrap();
        let decoded: ScoreWithUser = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, score);
        assert_eq!(decoded.score.tournament_game_id, None);
        assert_eq!(decoded.score.clan_id, Some(7));
        assert_eq!(decoded.user.avatar_url.as_deref(), Some(""));
        assert_eq!(decoded.user.title, None);
    }

    #[test]
    fn unknown_grade() {
        let score = Score {
            grade: "Q".to_owned(),
            ..Default::default()
        };
        assert_eq!(score.grade(), None);
    }
}
