use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::de::null_as_default;
use crate::common::error::Result;
use crate::common::query::{ListOptions, with_query};
use crate::models::clans::{Clan, ClanActivity};
use crate::models::users::User;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Clans {
    transport: Arc<Transport>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ClanResponse {
    #[serde(deserialize_with = "null_as_default")]
    clan: Clan,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ActivityResponse {
    #[serde(deserialize_with = "null_as_default")]
    activity: Vec<ClanActivity>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MembersResponse {
    #[serde(deserialize_with = "null_as_default")]
    members: Vec<User>,
}

impl Clans {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, ctx: &Context, clan_id: u64) -> Result<Clan> {
        let path = format!("clan/{clan_id}");
        let response: ClanResponse = self.transport.get(ctx, &path).await?;
        Ok(response.clan)
    }

    pub async fn list_activity(
        &self,
        ctx: &Context,
        clan_id: u64,
        options: &ListOptions,
    ) -> Result<Vec<ClanActivity>> {
        let path = with_query(format!("clan/{clan_id}/activity"), options)?;
        let response: ActivityResponse = self.transport.get(ctx, &path).await?;
        Ok(response.activity)
    }

    pub async fn list_members(&self, ctx: &Context, clan_id: u64) -> Result<Vec<User>> {
        let path = format!("clan/{clan_id}/members");
        let response: MembersResponse = self.transport.get(ctx, &path).await?;
        Ok(response.members)
    }
}
