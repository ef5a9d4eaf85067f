use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::de::null_as_default;
use crate::common::error::Result;
use crate::models::maps::{Map, MapModeration};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Maps {
    transport: Arc<Transport>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MapResponse {
    #[serde(deserialize_with = "null_as_default")]
    map: Map,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ModsResponse {
    #[serde(deserialize_with = "null_as_default")]
    mods: Vec<MapModeration>,
}

impl Maps {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get_by_id(&self, ctx: &Context, map_id: u64) -> Result<Map> {
        self.fetch(ctx, &map_id.to_string()).await
    }

    pub async fn get_by_md5(&self, ctx: &Context, md5: &str) -> Result<Map> {
        self.fetch(ctx, md5).await
    }

    async fn fetch(&self, ctx: &Context, key: &str) -> Result<Map> {
        let path = format!("map/{key}");
        let response: MapResponse = self.transport.get(ctx, &path).await?;
        Ok(response.map)
    }

    /// Moderation threads (issues, suggestions, comments) left on a map.
    pub async fn list_mods(&self, ctx: &Context, map_id: u64) -> Result<Vec<MapModeration>> {
        let path = format!("map/{map_id}/mods");
        let response: ModsResponse = self.transport.get(ctx, &path).await?;
        Ok(response.mods)
    }
}
