use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::de::null_as_default;
use crate::common::error::Result;
use crate::models::server_stats::{CountryStats, ServerStats as Stats};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ServerStats {
    transport: Arc<Transport>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CountriesResponse {
    #[serde(deserialize_with = "null_as_default")]
    countries: CountryStats,
}

impl ServerStats {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, ctx: &Context) -> Result<Stats> {
        self.transport.get(ctx, "server/stats").await
    }

    pub async fn country_players(&self, ctx: &Context) -> Result<CountryStats> {
        let response: CountriesResponse = self.transport.get(ctx, "server/stats/country").await?;
        Ok(response.countries)
    }
}
