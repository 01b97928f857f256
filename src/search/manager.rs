// Search Manager - fetches entries, ranks them and builds the response
use super::{ranker, service_trait::EntrySource, KnowledgeEntry};
use crate::errors::{GatewayResult, SearchError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<KnowledgeEntry>,
    pub total_count: usize,
}

/// Built once at startup and shared by every request.
pub struct SearchManager {
    source: Arc<dyn EntrySource>,
}

impl SearchManager {
    pub fn new(source: Arc<dyn EntrySource>) -> Self {
        Self { source }
    }

    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }

    /// Run a keyword search. `query` is echoed back untouched; matching uses
    /// its trimmed form. `total_count` is the number of returned results,
    /// after `limit` is applied.
    #[tracing::instrument(skip(self), fields(source = self.source.id()))]
    pub async fn search(&self, query: &str, limit: i64) -> GatewayResult<SearchResponse> {
        let needle = query.trim();
        if needle.is_empty() {
            return Err(SearchError::InvalidQuery);
        }

        let entries = self.source.fetch_all_entries().await.map_err(|e| {
            error!(error = %e, "Failed to fetch knowledge entries");
            SearchError::from(e)
        })?;
        let fetched = entries.len();

        let results = ranker::rank(entries, needle, limit);
        let total_count = results.len();

        info!(fetched, total_count, "Search completed");

        Ok(SearchResponse {
            query: query.to_string(),
            results,
            total_count,
        })
    }
}
