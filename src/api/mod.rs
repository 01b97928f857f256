//! REST API for the knowledge search gateway
//!
//! `GET /`, `GET /health` and `GET /search?query=&limit=`.

pub mod search;

pub use search::{configure, SearchParams};

use actix_cors::Cors;

/// CORS policy for the public endpoints; an empty list allows any origin.
pub fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
