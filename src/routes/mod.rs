// Route exports
pub mod interested;
pub mod notify;

use crate::core::InterestMatcher;
use crate::models::HealthResponse;
use crate::services::{FcmClient, SupabaseClient};
use actix_web::{error, web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Backend clients are optional: an unconfigured deployment still serves
/// the endpoints and reports the missing configuration per request.
#[derive(Clone)]
pub struct AppState {
    pub supabase: Option<Arc<SupabaseClient>>,
    pub fcm: Option<Arc<FcmClient>>,
    pub matcher: InterestMatcher,
    pub service_role_key: Option<String>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/functions/v1")
            .route(
                "/find-interested-users",
                web::post().to(interested::find_interested_users),
            )
            .route(
                "/send-push-notification",
                web::post().to(notify::send_push_notification),
            ),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// JSON error response for malformed payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    #[serde(skip)]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(
            actix_web::http::StatusCode::from_u16(self.status_code)
                .unwrap_or(actix_web::http::StatusCode::BAD_REQUEST),
        )
        .content_type("application/json")
        .json(self)
    }
}

/// Map body deserialization failures to the wire error contract
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "Invalid JSON body".to_string(),
        status_code: 400,
    }
    .into()
}
