use crate::common::de::null_as_default;
use crate::models::GameMode;
use crate::models::users::UserCompact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A clan. The service sends its times as Unix milliseconds; the calendar
/// forms are derived from those and cannot be set separately.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Clan {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: i64,
    pub about_me: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub favorite_mode: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name_change_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Vec<ClanStats>,
}

impl Clan {
    pub fn created_at_time(&self) -> DateTime<Utc> {
        from_unix_millis(self.created_at)
    }

    pub fn last_name_change_at(&self) -> DateTime<Utc> {
        from_unix_millis(self.last_name_change_time)
    }

    pub fn stats(&self, mode: GameMode) -> Option<&ClanStats> {
        self.stats.iter().find(|stats| stats.mode == mode)
    }
}

fn from_unix_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClanStats {
    #[serde(deserialize_with = "null_as_default")]
    pub clan_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: GameMode,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_accuracy: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_performance_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_marv: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_perf: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_great: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_good: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_okay: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_miss: i64,
}

#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i8")]
pub enum ClanActivityType {
    #[default]
    None = 0,
    Created = 1,
    UserJoined = 2,
    UserLeft = 3,
    UserKicked = 4,
    OwnershipTransferred = 5,
}

impl From<i64> for ClanActivityType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Created,
            2 => Self::UserJoined,
            3 => Self::UserLeft,
            4 => Self::UserKicked,
            5 => Self::OwnershipTransferred,
            _ => Self::None,
        }
    }
}

impl From<ClanActivityType> for i8 {
    fn from(value: ClanActivityType) -> Self {
        value as i8
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClanActivity {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub clan_id: u64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: ClanActivityType,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub map_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    pub user: Option<UserCompact>,
}
