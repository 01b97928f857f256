// Knowledge Search Gateway
// Keyword search over the entries held by the upstream knowledge service

pub mod api;
pub mod config;
pub mod errors;
pub mod search;

pub use config::{GatewayConfig, LogFormat};
pub use errors::{GatewayResult, SearchError, UpstreamError};
pub use search::{KnowledgeServiceClient, SearchManager};
