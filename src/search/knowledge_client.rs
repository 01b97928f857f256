//! HTTP client for the upstream knowledge service.
//!
//! Lists every entry via `GET {base_url}/api/entries`. One attempt per call,
//! bounded by the configured timeout.

use super::{service_trait::EntrySource, KnowledgeEntry};
use crate::{config::GatewayConfig, errors::UpstreamError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

pub struct KnowledgeServiceClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl KnowledgeServiceClient {
    pub fn new(base_url: &str, timeout: Duration, tls_verify: bool) -> Result<Self> {
        if !tls_verify {
            warn!(base_url, "TLS certificate verification disabled for knowledge service");
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!tls_verify)
            .build()
            .context("Failed to create knowledge service HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Self::new(
            &config.knowledge_service_url,
            config.request_timeout(),
            config.tls_verify,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn entries_url(&self) -> String {
        format!("{}/api/entries", self.base_url)
    }
}

#[async_trait]
impl EntrySource for KnowledgeServiceClient {
    fn id(&self) -> &'static str {
        "knowledge-service"
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_all_entries(&self) -> Result<Vec<KnowledgeEntry>, UpstreamError> {
        let url = self.entries_url();
        debug!(%url, "Fetching knowledge entries");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::from_transport(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_transport(e, self.timeout))?;

        let entries: Vec<KnowledgeEntry> = serde_json::from_slice(&body)
            .map_err(|e| UpstreamError::Deserialization(e.to_string()))?;

        debug!(count = entries.len(), "Fetched knowledge entries");
        Ok(entries)
    }
}
