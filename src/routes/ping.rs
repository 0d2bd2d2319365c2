//! src/routes/ping.rs

use actix_web::HttpResponse;
use serde_json::json;

/// Liveness probe. Answers unconditionally and never touches storage, so
/// orchestration can poll it cheaply. Cross-origin headers are permissive on
/// this route only.
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .json(json!({ "status": "alive" }))
}
