use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::error::{Error, Result};
use reqwest::StatusCode;
use std::fmt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownloadKind {
    Map,
    Replay,
}

impl DownloadKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DownloadKind::Map => "map",
            DownloadKind::Replay => "replay",
        }
    }
}

impl fmt::Display for DownloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Transport {
    /// Streams `download/{kind}/{id}` into `dst` and returns the number of
    /// bytes written. Nothing is written unless the service answers 200.
    pub async fn download<W>(
        &self,
        ctx: &Context,
        dst: &mut W,
        kind: DownloadKind,
        id: u64,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let path = format!("download/{kind}/{id}");
        ctx.run(async {
            let mut response = self.send(&path).await?;
            match response.status() {
                StatusCode::OK => {}
                StatusCode::NOT_FOUND => return Err(Error::DownloadNotFound(kind)),
                status => return Err(Error::DownloadFailed { kind, status }),
            }

            let mut written = 0u64;
            while let Some(chunk) = response.chunk().await? {
                dst.write_all(&chunk).await?;
                written += chunk.len() as u64;
            }
            dst.flush().await?;
            debug!(%kind, id, written, "download complete");
            Ok(written)
        })
        .await
    }
}
