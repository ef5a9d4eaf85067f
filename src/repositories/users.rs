use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::de::null_as_default;
use crate::common::error::Result;
use crate::common::query::{ListOptions, with_query};
use crate::models::playlists::PlaylistCompact;
use crate::models::scores::ScoreWithMap;
use crate::models::users::{Achievement, Activity, Badge, Rank, Team, User};
use crate::models::{GameMode, Grade, mapsets::Mapset};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Users {
    transport: Arc<Transport>,
}

/// Score listings available under `user/{id}/scores/{mode}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    Best,
    Recent,
    FirstPlace,
}

impl ScoreKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScoreKind::Best => "best",
            ScoreKind::Recent => "recent",
            ScoreKind::FirstPlace => "firstplace",
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct UserResponse {
    #[serde(deserialize_with = "null_as_default")]
    user: User,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct AchievementsResponse {
    #[serde(deserialize_with = "null_as_default")]
    achievements: Vec<Achievement>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ActivitiesResponse {
    #[serde(deserialize_with = "null_as_default")]
    activities: Vec<Activity>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct BadgesResponse {
    #[serde(deserialize_with = "null_as_default")]
    badges: Vec<Badge>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MapsetsResponse {
    #[serde(deserialize_with = "null_as_default")]
    mapsets: Vec<Mapset>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PlaylistsResponse {
    #[serde(deserialize_with = "null_as_default")]
    playlists: Vec<PlaylistCompact>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ScoresResponse {
    #[serde(deserialize_with = "null_as_default")]
    scores: Vec<ScoreWithMap>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RanksResponse {
    #[serde(deserialize_with = "null_as_default")]
    ranks: Vec<Rank>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    users: Vec<User>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TeamResponse {
    #[serde(deserialize_with = "null_as_default")]
    team: Team,
}

impl Users {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    async fn fetch<T: DeserializeOwned>(&self, ctx: &Context, path: &str) -> Result<T> {
        self.transport.get(ctx, path).await
    }

    pub async fn get_by_id(&self, ctx: &Context, user_id: u64) -> Result<User> {
        let response: UserResponse = self.fetch(ctx, &format!("user/{user_id}")).await?;
        Ok(response.user)
    }

    pub async fn get_by_name(&self, ctx: &Context, username: &str) -> Result<User> {
        let response: UserResponse = self.fetch(ctx, &format!("user/{username}")).await?;
        Ok(response.user)
    }

    pub async fn list_achievements(&self, ctx: &Context, user_id: u64) -> Result<Vec<Achievement>> {
        let path = format!("user/{user_id}/achievements");
        let response: AchievementsResponse = self.fetch(ctx, &path).await?;
        Ok(response.achievements)
    }

    pub async fn list_activity(
        &self,
        ctx: &Context,
        user_id: u64,
        options: &ListOptions,
    ) -> Result<Vec<Activity>> {
        let path = with_query(format!("user/{user_id}/activity"), options)?;
        let response: ActivitiesResponse = self.fetch(ctx, &path).await?;
        Ok(response.activities)
    }

    pub async fn list_badges(&self, ctx: &Context, user_id: u64) -> Result<Vec<Badge>> {
        let path = format!("user/{user_id}/badges");
        let response: BadgesResponse = self.fetch(ctx, &path).await?;
        Ok(response.badges)
    }

    /// Mapsets uploaded by the user.
    pub async fn list_mapsets(&self, ctx: &Context, user_id: u64) -> Result<Vec<Mapset>> {
        let path = format!("user/{user_id}/mapsets");
        let response: MapsetsResponse = self.fetch(ctx, &path).await?;
        Ok(response.mapsets)
    }

    pub async fn list_playlists(&self, ctx: &Context, user_id: u64) -> Result<Vec<PlaylistCompact>> {
        let path = format!("user/{user_id}/playlists");
        let response: PlaylistsResponse = self.fetch(ctx, &path).await?;
        Ok(response.playlists)
    }

    pub async fn list_scores(
        &self,
        ctx: &Context,
        user_id: u64,
        mode: GameMode,
        kind: ScoreKind,
        options: &ListOptions,
    ) -> Result<Vec<ScoreWithMap>> {
        let path = with_query(format!("user/{user_id}/scores/{mode}/{kind}"), options)?;
        let response: ScoresResponse = self.fetch(ctx, &path).await?;
        Ok(response.scores)
    }

    pub async fn list_best_scores(
        &self,
        ctx: &Context,
        user_id: u64,
        mode: GameMode,
        options: &ListOptions,
    ) -> Result<Vec<ScoreWithMap>> {
        self.list_scores(ctx, user_id, mode, ScoreKind::Best, options)
            .await
    }

    pub async fn list_recent_scores(
        &self,
        ctx: &Context,
        user_id: u64,
        mode: GameMode,
        options: &ListOptions,
    ) -> Result<Vec<ScoreWithMap>> {
        self.list_scores(ctx, user_id, mode, ScoreKind::Recent, options)
            .await
    }

    pub async fn list_first_place_scores(
        &self,
        ctx: &Context,
        user_id: u64,
        mode: GameMode,
        options: &ListOptions,
    ) -> Result<Vec<ScoreWithMap>> {
        self.list_scores(ctx, user_id, mode, ScoreKind::FirstPlace, options)
            .await
    }

    pub async fn list_grade_scores(
        &self,
        ctx: &Context,
        user_id: u64,
        mode: GameMode,
        grade: Grade,
        options: &ListOptions,
    ) -> Result<Vec<ScoreWithMap>> {
        let path = with_query(
            format!("user/{user_id}/scores/{mode}/grades/{grade}"),
            options,
        )?;
        let response: ScoresResponse = self.fetch(ctx, &path).await?;
        Ok(response.scores)
    }

    /// Historical rank snapshots for one game mode.
    pub async fn list_rank_statistics(
        &self,
        ctx: &Context,
        user_id: u64,
        mode: GameMode,
    ) -> Result<Vec<Rank>> {
        let path = format!("user/{user_id}/statistics/{mode}/rank");
        let response: RanksResponse = self.fetch(ctx, &path).await?;
        Ok(response.ranks)
    }

    /// `query` is placed in the path as given.
    pub async fn search(&self, ctx: &Context, query: &str) -> Result<Vec<User>> {
        let path = format!("user/search/{query}");
        let response: SearchResponse = self.fetch(ctx, &path).await?;
        Ok(response.users)
    }

    pub async fn list_team(&self, ctx: &Context) -> Result<Team> {
        let response: TeamResponse = self.fetch(ctx, "user/team/members").await?;
        Ok(response.team)
    }
}
