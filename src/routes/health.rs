//! Health route

use actix_web::{get, HttpResponse, Responder, Result};

/// Simple liveness route
///
/// # Path
///   `GET /health`
///
/// # Responses
///   - `200`: [String]
///
#[utoipa::path(
    responses(
        (status = 200, description = "OK", body = String),
    ),
)]
#[get("/health")]
pub async fn health() -> Result<impl Responder> {
    // says nothing about the gateway, only that we are serving
    Ok(HttpResponse::Ok().body("OK"))
}
