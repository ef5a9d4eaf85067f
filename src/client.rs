use crate::adapters::http::HttpClient;
use crate::adapters::transport::Transport;
use crate::common::error::Result;
use crate::repositories::clans::Clans;
use crate::repositories::download::Download;
use crate::repositories::leaderboards::Leaderboards;
use crate::repositories::maps::Maps;
use crate::repositories::mapsets::Mapsets;
use crate::repositories::multiplayer::Multiplayer;
use crate::repositories::playlists::Playlists;
use crate::repositories::scores::Scores;
use crate::repositories::server_stats::ServerStats;
use crate::repositories::users::Users;
use crate::settings::Settings;
use std::sync::Arc;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.quavergame.com/v2/";
pub const DEFAULT_USER_AGENT: &str = "quaver-api-rs";

/// Entry point to the Quaver web API. Cloning is cheap and every clone shares
/// one HTTP client.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
    clans: Clans,
    download: Download,
    leaderboards: Leaderboards,
    maps: Maps,
    mapsets: Mapsets,
    multiplayer: Multiplayer,
    playlists: Playlists,
    scores: Scores,
    server_stats: ServerStats,
    users: Users,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::builder()
            .base_url(&settings.base_url)
            .user_agent(&settings.user_agent)
            .build()
    }

    fn from_transport(transport: Transport) -> Self {
        let transport = Arc::new(transport);
        Self {
            clans: Clans::new(transport.clone()),
            download: Download::new(transport.clone()),
            leaderboards: Leaderboards::new(transport.clone()),
            maps: Maps::new(transport.clone()),
            mapsets: Mapsets::new(transport.clone()),
            multiplayer: Multiplayer::new(transport.clone()),
            playlists: Playlists::new(transport.clone()),
            scores: Scores::new(transport.clone()),
            server_stats: ServerStats::new(transport.clone()),
            users: Users::new(transport.clone()),
            transport,
        }
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub fn user_agent(&self) -> &str {
        self.transport.user_agent()
    }

    pub fn clans(&self) -> &Clans {
        &self.clans
    }

    pub fn download(&self) -> &Download {
        &self.download
    }

    pub fn leaderboards(&self) -> &Leaderboards {
        &self.leaderboards
    }

    pub fn maps(&self) -> &Maps {
        &self.maps
    }

    pub fn mapsets(&self) -> &Mapsets {
        &self.mapsets
    }

    pub fn multiplayer(&self) -> &Multiplayer {
        &self.multiplayer
    }

    pub fn playlists(&self) -> &Playlists {
        &self.playlists
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn server_stats(&self) -> &ServerStats {
        &self.server_stats
    }

    pub fn users(&self) -> &Users {
        &self.users
    }
}

#[derive(Default)]
pub struct ClientBuilder {
    http: Option<Arc<dyn HttpClient>>,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Replaces the default `reqwest::Client`.
    pub fn http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// A missing trailing `/` is added, so `https://host/v2` and
    /// `https://host/v2/` resolve paths the same way.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => Arc::new(reqwest::Client::builder().build()?),
        };
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

        Ok(Client::from_transport(Transport::new(
            http, base_url, user_agent,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let client = Client::builder().build().unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = Client::builder()
            .base_url("http://localhost:8080/v2")
            .user_agent("tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/v2/");
        assert_eq!(client.user_agent(), "tests");
    }

    #[test]
    fn invalid_base_url() {
        let err = Client::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, crate::common::error::Error::Url(_)));
    }
}
