use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::de::null_as_default;
use crate::common::error::Result;
use crate::common::query::{ListOptions, with_query};
use crate::models::multiplayer::{MultiplayerGame, MultiplayerGameCompact};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Multiplayer {
    transport: Arc<Transport>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GameResponse {
    #[serde(deserialize_with = "null_as_default")]
    game: MultiplayerGame,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GamesResponse {
    #[serde(deserialize_with = "null_as_default")]
    games: Vec<MultiplayerGameCompact>,
}

impl Multiplayer {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get_game(&self, ctx: &Context, game_id: u64) -> Result<MultiplayerGame> {
        let path = format!("multiplayer/game/{game_id}");
        let response: GameResponse = self.transport.get(ctx, &path).await?;
        Ok(response.game)
    }

    pub async fn list_games(
        &self,
        ctx: &Context,
        options: &ListOptions,
    ) -> Result<Vec<MultiplayerGameCompact>> {
        let path = with_query("multiplayer/games", options)?;
        let response: GamesResponse = self.transport.get(ctx, &path).await?;
        Ok(response.games)
    }
}
