//! HTTP endpoints for keyword search over knowledge entries

use actix_web::{
    error::{InternalError, QueryPayloadError},
    web, HttpRequest, HttpResponse,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::{ErrorResponse, GatewayResult};
use crate::search::{SearchManager, SearchResponse, DEFAULT_LIMIT};

/// `GET /search` query string
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Knowledge Search API is running"
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "knowledge-search-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn search(
    manager: web::Data<SearchManager>,
    params: web::Query<SearchParams>,
) -> GatewayResult<web::Json<SearchResponse>> {
    let SearchParams { query, limit } = params.into_inner();
    info!(query = %query, limit, "Search request");

    let response = manager.search(&query, limit).await?;
    Ok(web::Json(response))
}

/// Missing or unparsable query parameters are a 422, not actix's default 400.
fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = req.path(), error = %err, "Rejected search parameters");
    let response =
        HttpResponse::UnprocessableEntity().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Register the gateway routes. The caller supplies `web::Data<SearchManager>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health))
        .route("/search", web::get().to(search));
}
