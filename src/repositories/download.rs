use crate::adapters::download::DownloadKind;
use crate::adapters::transport::Transport;
use crate::common::context::Context;
use crate::common::error::Result;
use std::sync::Arc;
use tokio::io::AsyncWrite;

/// Raw map (`.qua`) and replay (`.qr`) downloads.
#[derive(Debug, Clone)]
pub struct Download {
    transport: Arc<Transport>,
}

impl Download {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn map<W>(&self, ctx: &Context, dst: &mut W, map_id: u64) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        self.transport
            .download(ctx, dst, DownloadKind::Map, map_id)
            .await
    }

    pub async fn replay<W>(&self, ctx: &Context, dst: &mut W, replay_id: u64) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        self.transport
            .download(ctx, dst, DownloadKind::Replay, replay_id)
            .await
    }
}
