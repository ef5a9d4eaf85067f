use crate::adapters::http::{HttpClient, HttpResponse, read_body};
use crate::common::context::Context;
use crate::common::error::{Error, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Shared request pipeline: base URL, user agent and the HTTP client.
pub struct Transport {
    http: Arc<dyn HttpClient>,
    base_url: Url,
    user_agent: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorResponse {
    error: String,
}

impl Transport {
    /// `base_url` must end with `/`; relative paths are appended to it verbatim.
    pub fn new(http: Arc<dyn HttpClient>, base_url: Url, user_agent: String) -> Self {
        Self {
            http,
            base_url,
            user_agent,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn make_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    pub(crate) async fn send(&self, path: &str) -> Result<Box<dyn HttpResponse>> {
        let url = self.make_url(path)?;
        debug!(%url, "GET");
        let response = self.http.get(url, &self.user_agent).await?;
        debug!(status = response.status().as_u16(), path, "response");
        Ok(response)
    }

    /// Fetches `path` and decodes a 200 body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, ctx: &Context, path: &str) -> Result<T> {
        ctx.run(async {
            let mut response = self.send(path).await?;
            match response.status() {
                StatusCode::OK => {
                    let body = read_body(&mut *response).await?;
                    Ok(serde_json::from_slice(&body)?)
                }
                StatusCode::NOT_FOUND => {
                    let body = read_body(&mut *response).await?;
                    let ErrorResponse { error } = serde_json::from_slice(&body)?;
                    Err(Error::NotFound(error))
                }
                status => Err(Error::UnexpectedStatus(status)),
            }
        })
        .await
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
