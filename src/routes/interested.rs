use crate::auth::{extract_bearer_token, is_service_credential};
use crate::models::{ErrorResponse, InterestMatchesResponse, InterestQueryRequest};
use crate::routes::AppState;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

/// Admin interest-query endpoint
///
/// POST /functions/v1/find-interested-users
///
/// Request body:
/// ```json
/// {
///   "category": "string",
///   "city": "string",
///   "keywords": ["string"]
/// }
/// ```
///
/// Only administrators and the service-role credential may call this;
/// the filters are forwarded verbatim to the backend procedure.
pub async fn find_interested_users(
    state: web::Data<AppState>,
    req: web::Json<InterestQueryRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    let (Some(supabase), Some(service_role_key)) =
        (state.supabase.as_ref(), state.service_role_key.as_ref())
    else {
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Missing Supabase environment variables"));
    };

    let auth_header = http_req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok());
    let token = extract_bearer_token(auth_header);

    let privileged = token
        .as_deref()
        .map(|t| is_service_credential(t, service_role_key))
        .unwrap_or(false);

    if !privileged {
        let Some(token) = token else {
            return HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized"));
        };

        let user_id = match supabase.resolve_user(&token).await {
            Ok(id) => id,
            Err(e) => {
                tracing::info!("Rejecting interest query, token did not resolve: {}", e);
                return HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized"));
            }
        };

        match supabase.fetch_role(&user_id).await {
            Ok(Some(role)) if role == "admin" => {}
            Ok(_) => {
                tracing::info!("Rejecting interest query from non-admin user {}", user_id);
                return HttpResponse::Forbidden().json(ErrorResponse::new("Forbidden"));
            }
            Err(e) => {
                tracing::error!("Role lookup failed for {}: {}", user_id, e);
                return HttpResponse::Forbidden().json(ErrorResponse::new("Forbidden"));
            }
        }
    }

    let filter = req.normalize();
    if filter.is_empty() {
        // Nothing to search for; skip the backend round-trip entirely
        return HttpResponse::Ok().json(InterestMatchesResponse {
            data: serde_json::json!([]),
        });
    }

    match supabase.find_interested_users(&filter).await {
        Ok(data) => HttpResponse::Ok().json(InterestMatchesResponse { data }),
        Err(e) => {
            tracing::error!("Interest procedure call failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::with_details("RPC failed", e.to_string()))
        }
    }
}
