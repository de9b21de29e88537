use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use avs_relay_types::{AudioAnswer, ContinuationRequest, Part};
use secrecy::ExposeSecret;

use crate::answers::{self, DurationProbe};
use crate::continuation::{self, ContinuationSender};
use crate::error::{BoxError, Error, Result};
use crate::multipart;

mod config;
mod consts;
mod stats;
mod utils;

pub use config::{Config, ConfigBuilder};
pub use stats::Stats;
pub use consts::{BASE_URL, NEXT_ITEM_PATH, RECOGNIZE_PATH};

/// HTTP client for the speech service.
pub struct Client {
    http: reqwest::Client,
    config: Config,
    stats: Arc<Mutex<Stats>>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::new())
    }
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            stats: Arc::new(Mutex::new(Stats::new())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stats(&self) -> Stats {
        match self.stats.lock() {
            Ok(stats) => stats.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Sends audio (16 kHz mono L16) for recognition and decodes the reply.
    pub async fn recognize(&self, audio: Vec<u8>) -> Result<Vec<Part>> {
        let form = utils::build_recognize_form(&self.config, audio)?;
        let response = self
            .http
            .post(format!("{}{}", self.config.base_url(), consts::RECOGNIZE_PATH))
            .bearer_auth(self.config.access_token().expose_secret())
            .multipart(form)
            .send()
            .await?;
        self.read_parts(response, false).await
    }

    /// Asks for the next item of a playlist.
    pub async fn next_item(&self, request: &ContinuationRequest) -> Result<Vec<Part>> {
        let response = self
            .http
            .post(format!("{}{}", self.config.base_url(), consts::NEXT_ITEM_PATH))
            .bearer_auth(self.config.access_token().expose_secret())
            .json(request)
            .send()
            .await?;
        self.read_parts(response, true).await
    }

    /// Recognizes `audio`, follows every continuation and measures each
    /// spoken answer.
    pub async fn answers<P>(&self, audio: Vec<u8>, probe: &P) -> Result<Vec<AudioAnswer>>
    where
        P: DurationProbe + ?Sized,
    {
        let initial = self.recognize(audio).await?;
        let parts = continuation::exhaust(initial, self).await?;
        answers::extract(parts, probe).await
    }

    async fn read_parts(&self, response: reqwest::Response, continuation: bool) -> Result<Vec<Part>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }

        let headers = utils::to_headers(response.headers());
        let body = response.bytes().await?;
        let parts = multipart::decode_response(headers, body)?;
        tracing::debug!(%status, parts = parts.len(), continuation, "received response");

        match self.stats.lock() {
            Ok(mut stats) => stats.record_request(continuation, parts.len()),
            Err(_) => tracing::warn!("failed to update stats"),
        }
        Ok(parts)
    }
}

#[async_trait]
impl ContinuationSender for Client {
    async fn send(&self, request: ContinuationRequest) -> Result<Vec<Part>, BoxError> {
        Ok(self.next_item(&request).await?)
    }
}
