//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub posts: usize,
}

/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        posts: state.posts.count().await?,
    };

    Ok(HttpResponse::Ok().json(response))
}
