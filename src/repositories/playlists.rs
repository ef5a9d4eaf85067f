use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::de::null_as_default;
use crate::common::error::Result;
use crate::common::query::{ListOptions, with_query};
use crate::models::playlists::{Playlist, PlaylistSearch};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Playlists {
    transport: Arc<Transport>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PlaylistResponse {
    #[serde(deserialize_with = "null_as_default")]
    playlist: Playlist,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ContainsResponse {
    #[serde(deserialize_with = "null_as_default")]
    exists: bool,
}

impl Playlists {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn search(
        &self,
        ctx: &Context,
        query: &str,
        options: &ListOptions,
    ) -> Result<PlaylistSearch> {
        let path = with_query(format!("playlists/search?query={query}"), options)?;
        self.transport.get(ctx, &path).await
    }

    pub async fn get(&self, ctx: &Context, playlist_id: u64) -> Result<Playlist> {
        let path = format!("playlists/{playlist_id}");
        let response: PlaylistResponse = self.transport.get(ctx, &path).await?;
        Ok(response.playlist)
    }

    pub async fn contains_map(&self, ctx: &Context, playlist_id: u64, map_id: u64) -> Result<bool> {
        let path = format!("playlists/{playlist_id}/contains/{map_id}");
        let response: ContainsResponse = self.transport.get(ctx, &path).await?;
        Ok(response.exists)
    }
}
