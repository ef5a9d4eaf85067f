use crate::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::common::env::FromEnv;
use std::time::Duration;
use tracing::Level;

pub struct Settings {
    pub level: Level,

    pub base_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Settings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let level = Level::from_env_or("LOG_LEVEL", Level::INFO)?;

        let base_url = String::from_env_or("QUAVER_BASE_URL", DEFAULT_BASE_URL.to_owned())?;
        let user_agent = String::from_env_or("QUAVER_USER_AGENT", DEFAULT_USER_AGENT.to_owned())?;
        let request_timeout_secs = u64::from_env_or("QUAVER_TIMEOUT_SECS", 30)?;
        let request_timeout = Duration::from_secs(request_timeout_secs);

        Ok(Settings {
            level,

            base_url,
            user_agent,
            request_timeout,
        })
    }
}
