// Entry Source Trait - where the search manager gets its candidate entries
use crate::{errors::UpstreamError, search::KnowledgeEntry};
use async_trait::async_trait;

#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Source identifier used in logs
    fn id(&self) -> &'static str;

    /// Fetch the complete entry collection in upstream order
    async fn fetch_all_entries(&self) -> Result<Vec<KnowledgeEntry>, UpstreamError>;
}
