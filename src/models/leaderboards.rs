use crate::common::de::null_as_default;
use crate::models::users::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Leaderboard {
    #[serde(deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}
