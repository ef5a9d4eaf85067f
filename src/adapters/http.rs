use crate::common::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use url::Url;

/// The HTTP layer underneath [`Transport`](crate::adapters::transport::Transport).
///
/// Implementations must be safe for concurrent use; `reqwest::Client` is.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: Url, user_agent: &str) -> Result<Box<dyn HttpResponse>>;
}

#[async_trait]
pub trait HttpResponse: Send {
    fn status(&self) -> StatusCode;

    /// Next piece of the body, `None` once it is exhausted.
    async fn chunk(&mut self) -> Result<Option<Bytes>>;
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn get(&self, url: Url, user_agent: &str) -> Result<Box<dyn HttpResponse>> {
        let response = reqwest::Client::get(self, url)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;
        Ok(Box::new(response))
    }
}

#[async_trait]
impl HttpResponse for reqwest::Response {
    fn status(&self) -> StatusCode {
        reqwest::Response::status(self)
    }

    async fn chunk(&mut self) -> Result<Option<Bytes>> {
        Ok(reqwest::Response::chunk(self).await?)
    }
}

pub async fn read_body(response: &mut dyn HttpResponse) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
