use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::de::null_as_default;
use crate::common::error::{Error, Result};
use crate::models::modifiers::Modifiers;
use crate::models::scores::ScoreWithUser;
use serde::Deserialize;
use std::sync::Arc;

const NOT_RATE_ONLY: &str = "modifiers must be rate modifiers";

#[derive(Debug, Clone)]
pub struct Scores {
    transport: Arc<Transport>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ScoresResponse {
    #[serde(deserialize_with = "null_as_default")]
    scores: Vec<ScoreWithUser>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ScoreResponse {
    #[serde(deserialize_with = "null_as_default")]
    score: ScoreWithUser,
}

fn ensure_rate_only(modifiers: Modifiers) -> Result<()> {
    match modifiers.is_rate_only() {
        true => Ok(()),
        false => Err(Error::Precondition(NOT_RATE_ONLY)),
    }
}

impl Scores {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    async fn list(&self, ctx: &Context, path: &str) -> Result<Vec<ScoreWithUser>> {
        let response: ScoresResponse = self.transport.get(ctx, path).await?;
        Ok(response.scores)
    }

    async fn single(&self, ctx: &Context, path: &str) -> Result<ScoreWithUser> {
        let response: ScoreResponse = self.transport.get(ctx, path).await?;
        Ok(response.score)
    }

    /// Global leaderboard of a map.
    pub async fn list_map_global(&self, ctx: &Context, md5: &str) -> Result<Vec<ScoreWithUser>> {
        self.list(ctx, &format!("scores/{md5}/global")).await
    }

    /// Global leaderboard of a map restricted to an exact modifier combination.
    pub async fn list_map_global_with_mods(
        &self,
        ctx: &Context,
        md5: &str,
        modifiers: Modifiers,
    ) -> Result<Vec<ScoreWithUser>> {
        self.list(ctx, &format!("scores/{md5}/mods/{modifiers}"))
            .await
    }

    /// Global leaderboard of a map at one playback rate. Fails without a
    /// request unless `modifiers` holds rate modifiers only.
    pub async fn list_map_global_with_rate(
        &self,
        ctx: &Context,
        md5: &str,
        modifiers: Modifiers,
    ) -> Result<Vec<ScoreWithUser>> {
        ensure_rate_only(modifiers)?;
        self.list(ctx, &format!("scores/{md5}/rate/{modifiers}"))
            .await
    }

    pub async fn user_map_best(
        &self,
        ctx: &Context,
        md5: &str,
        user_id: u64,
    ) -> Result<ScoreWithUser> {
        self.single(ctx, &format!("scores/{md5}/{user_id}/global"))
            .await
    }

    pub async fn user_map_all(
        &self,
        ctx: &Context,
        md5: &str,
        user_id: u64,
    ) -> Result<ScoreWithUser> {
        self.single(ctx, &format!("scores/{md5}/{user_id}/all"))
            .await
    }

    pub async fn user_map_best_with_mods(
        &self,
        ctx: &Context,
        md5: &str,
        user_id: u64,
        modifiers: Modifiers,
    ) -> Result<ScoreWithUser> {
        self.single(ctx, &format!("scores/{md5}/{user_id}/mods/{modifiers}"))
            .await
    }

    pub async fn user_map_best_with_rate(
        &self,
        ctx: &Context,
        md5: &str,
        user_id: u64,
        modifiers: Modifiers,
    ) -> Result<ScoreWithUser> {
        ensure_rate_only(modifiers)?;
        self.single(ctx, &format!("scores/{md5}/{user_id}/rate/{modifiers}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_precondition() {
        assert!(ensure_rate_only(Modifiers::Speed12X).is_ok());
        assert!(matches!(
            ensure_rate_only(Modifiers::Speed12X | Modifiers::Mirror),
            Err(Error::Precondition(NOT_RATE_ONLY))
        ));
        assert!(ensure_rate_only(Modifiers::None).is_err());
    }
}
