// Search Module - upstream retrieval, keyword ranking and orchestration
pub mod entry;
pub mod knowledge_client;
pub mod manager;
pub mod ranker;
pub mod service_trait;

pub use entry::KnowledgeEntry;
pub use knowledge_client::KnowledgeServiceClient;
pub use manager::{SearchManager, SearchResponse, DEFAULT_LIMIT};
pub use service_trait::EntrySource;
