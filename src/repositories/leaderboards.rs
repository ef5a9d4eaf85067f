use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::error::Result;
use crate::common::query::{ListOptions, with_query};
use crate::models::GameMode;
use crate::models::leaderboards::Leaderboard;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Leaderboards {
    transport: Arc<Transport>,
}

impl Leaderboards {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn global(
        &self,
        ctx: &Context,
        mode: GameMode,
        options: &ListOptions,
    ) -> Result<Leaderboard> {
        let path = with_query(format!("leaderboard/global?mode={mode}"), options)?;
        self.transport.get(ctx, &path).await
    }

    /// `country` is a two letter code and goes into the URL as given.
    pub async fn country(
        &self,
        ctx: &Context,
        country: &str,
        mode: GameMode,
        options: &ListOptions,
    ) -> Result<Leaderboard> {
        let path = with_query(
            format!("leaderboard/country?country={country}&mode={mode}"),
            options,
        )?;
        self.transport.get(ctx, &path).await
    }

    pub async fn hits(&self, ctx: &Context, options: &ListOptions) -> Result<Leaderboard> {
        let path = with_query("leaderboard/hits", options)?;
        self.transport.get(ctx, &path).await
    }
}
