use crate::common::de::null_as_default;
use crate::models::GameMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCompact {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub steam_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_registered: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub privileges: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub usergroups: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mute_end_time: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub latest_activity: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    pub avatar_url: Option<String>,
    pub twitter: Option<String>,
    pub title: Option<String>,
    pub userpage: Option<String>,
    pub twitch_username: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub donator_end_time: DateTime<Utc>,
    pub discord_id: Option<String>,
    pub misc_information: Option<UserInformation>,
    pub clan_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub clan_leave_time: DateTime<Utc>,
    pub client_status: Option<UserClientStatus>,
}

impl UserCompact {
    pub fn is_muted(&self, now: DateTime<Utc>) -> bool {
        self.mute_end_time > now
    }

    pub fn is_donator(&self, now: DateTime<Utc>) -> bool {
        self.donator_end_time > now
    }
}

/// Full profile: the compact fields plus per-mode statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(flatten)]
    pub profile: UserCompact,
    #[serde(rename = "stats_keys4", deserialize_with = "null_as_default")]
    pub stats_4k: Statistics,
    #[serde(rename = "stats_keys7", deserialize_with = "null_as_default")]
    pub stats_7k: Statistics,
}

impl User {
    pub fn stats(&self, mode: GameMode) -> &Statistics {
        match mode {
            GameMode::Keys4 => &self.stats_4k,
            GameMode::Keys7 => &self.stats_7k,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ranks {
    #[serde(deserialize_with = "null_as_default")]
    pub global: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub country: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_hits: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    #[serde(deserialize_with = "null_as_default")]
    pub ranks: Ranks,
    #[serde(deserialize_with = "null_as_default")]
    pub total_score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ranked_score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_accuracy: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_performance_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub play_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fail_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_combo: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_marvelous: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_perfect: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_great: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_good: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_okay: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_miss: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_grade_x: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_grade_ss: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_grade_s: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_grade_a: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_grade_b: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_grade_c: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count_grade_d: i64,
}

impl Statistics {
    pub fn total_hits(&self) -> i64 {
        self.total_marvelous
            + self.total_perfect
            + self.total_great
            + self.total_good
            + self.total_okay
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInformation {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub discord: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub twitter: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub twitch: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub youtube: String,
    #[serde(
        rename = "notif_action_mapset",
        skip_serializing_if = "std::ops::Not::not",
        deserialize_with = "null_as_default"
    )]
    pub notify_mapset_actions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<GameMode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserClientStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub steam_api_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: u64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mapset_id: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Badge {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rank {
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_performance_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "null_as_default")]
    pub developers: Vec<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub administrators: Vec<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub moderators: Vec<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub ranking_supervisors: Vec<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub contributors: Vec<User>,
}
