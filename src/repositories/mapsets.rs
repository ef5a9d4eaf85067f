use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::de::null_as_default;
use crate::common::error::Result;
use crate::common::query::{MapsetSearchOptions, with_query};
use crate::models::mapsets::{Mapset, MapsetWithUser, Offset};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Mapsets {
    transport: Arc<Transport>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MapsetResponse {
    #[serde(deserialize_with = "null_as_default")]
    mapset: MapsetWithUser,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RankedResponse {
    #[serde(deserialize_with = "null_as_default")]
    ranked_mapsets: Vec<u64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct OffsetsResponse {
    #[serde(deserialize_with = "null_as_default")]
    online_offsets: Vec<Offset>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    mapsets: Vec<Mapset>,
}

impl Mapsets {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, ctx: &Context, mapset_id: u64) -> Result<MapsetWithUser> {
        let path = format!("mapset/{mapset_id}");
        let response: MapsetResponse = self.transport.get(ctx, &path).await?;
        Ok(response.mapset)
    }

    /// Ids of every ranked mapset.
    pub async fn list_ranked(&self, ctx: &Context) -> Result<Vec<u64>> {
        let response: RankedResponse = self.transport.get(ctx, "mapset/ranked").await?;
        Ok(response.ranked_mapsets)
    }

    pub async fn list_offsets(&self, ctx: &Context) -> Result<Vec<Offset>> {
        let response: OffsetsResponse = self.transport.get(ctx, "mapset/offsets").await?;
        Ok(response.online_offsets)
    }

    pub async fn search(&self, ctx: &Context, options: &MapsetSearchOptions) -> Result<Vec<Mapset>> {
        let path = with_query("mapset/search", options)?;
        let response: SearchResponse = self.transport.get(ctx, &path).await?;
        Ok(response.mapsets)
    }
}
