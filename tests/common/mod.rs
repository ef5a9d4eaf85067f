#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use quaver_api::Client;
use quaver_api::Result;
use quaver_api::adapters::http::{HttpClient, HttpResponse};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const BASE_URL: &str = "https://quaver.test/v2/";

/// Canned-response HTTP client that records what was requested.
pub struct MockHttp {
    status: StatusCode,
    body: Vec<u8>,
    delay: Option<Duration>,
    urls: Mutex<Vec<String>>,
    user_agents: Mutex<Vec<String>>,
    body_reads: Arc<AtomicUsize>,
}

impl MockHttp {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            delay: None,
            urls: Mutex::default(),
            user_agents: Mutex::default(),
            body_reads: Arc::default(),
        })
    }

    pub fn json(body: serde_json::Value) -> Arc<Self> {
        Self::new(200, body.to_string())
    }

    /// Answers only after `delay`, for cancellation tests.
    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            status: StatusCode::OK,
            body: b"{}".to_vec(),
            delay: Some(delay),
            urls: Mutex::default(),
            user_agents: Mutex::default(),
            body_reads: Arc::default(),
        })
    }

    pub fn calls(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn last_url(&self) -> String {
        self.urls().pop().expect("no request was made")
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }

    pub fn body_reads(&self) -> usize {
        self.body_reads.load(Ordering::SeqCst)
    }

    pub fn client(self: &Arc<Self>) -> Client {
        Client::builder()
            .http_client(self.clone())
            .base_url(BASE_URL)
            .user_agent("quaver-tests")
            .build()
            .unwrap()
    }
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn get(&self, url: Url, user_agent: &str) -> Result<Box<dyn HttpResponse>> {
        self.urls.lock().unwrap().push(url.to_string());
        self.user_agents.lock().unwrap().push(user_agent.to_owned());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        // two chunks so streaming readers see more than one piece
        let mid = self.body.len() / 2;
        let chunks = [&self.body[..mid], &self.body[mid..]]
            .into_iter()
            .filter(|chunk| !chunk.is_empty())
            .map(Bytes::copy_from_slice)
            .collect();
        Ok(Box::new(MockResponse {
            status: self.status,
            chunks,
            reads: self.body_reads.clone(),
        }))
    }
}

struct MockResponse {
    status: StatusCode,
    chunks: VecDeque<Bytes>,
    reads: Arc<AtomicUsize>,
}

#[async_trait]
impl HttpResponse for MockResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    async fn chunk(&mut self) -> Result<Option<Bytes>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.chunks.pop_front())
    }
}
