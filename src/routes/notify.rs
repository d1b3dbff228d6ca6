use crate::core::content;
use crate::models::{DispatchSummary, ErrorResponse, PushDispatchRequest};
use crate::routes::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Push dispatch endpoint
///
/// POST /functions/v1/send-push-notification
///
/// Request body:
/// ```json
/// {
///   "notificationType": "new_request",
///   "requestId": "string",
///   "requestTitle": "string",
///   "categories": ["string"],
///   "city": "string",
///   "authorId": "string"
/// }
/// ```
///
/// For `new_request` the matched audience is computed in-process from all
/// profiles; the direct kinds address `recipientId` only. Sends are
/// strictly sequential and best-effort: a failed token is counted and the
/// loop keeps going.
pub async fn send_push_notification(
    state: web::Data<AppState>,
    req: web::Json<PushDispatchRequest>,
) -> impl Responder {
    let Some(supabase) = state.supabase.as_ref() else {
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Missing Supabase environment variables"));
    };
    let Some(fcm) = state.fcm.as_ref() else {
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("FCM service account not configured"));
    };

    if req.validate().is_err() {
        let missing = req.missing_fields();
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let kind = req.notification_type;
    tracing::info!(
        "Processing {} push dispatch for request {}",
        kind.tag(),
        req.request_id
    );

    // Pick the audience: a single recipient for direct kinds, the matched
    // interest set for a new request
    let targets = if kind.is_direct() {
        match req
            .recipient_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        {
            Some(recipient) => vec![recipient.to_string()],
            None => {
                tracing::warn!("{} dispatch without recipientId", kind.tag());
                return HttpResponse::Ok().json(DispatchSummary::skipped("No target users found"));
            }
        }
    } else {
        let profiles = match supabase.profiles_except(&req.author_id).await {
            Ok(profiles) => profiles,
            Err(e) => {
                // Same observable behavior as an empty audience
                tracing::error!("Failed to fetch profiles: {}", e);
                return HttpResponse::Ok().json(DispatchSummary::skipped("No target users found"));
            }
        };

        let outcome =
            state
                .matcher
                .match_profiles(&profiles, &req.categories, req.city.as_deref());

        tracing::info!(
            "Matched {} of {} profiles for request {}",
            outcome.interested.len(),
            outcome.total_profiles,
            req.request_id
        );

        outcome.interested
    };

    if targets.is_empty() {
        return HttpResponse::Ok().json(DispatchSummary::skipped("No target users found"));
    }

    let tokens = match supabase.tokens_for_users(&targets).await {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::error!("Failed to fetch push tokens: {}", e);
            Vec::new()
        }
    };

    if tokens.is_empty() {
        return HttpResponse::Ok()
            .json(DispatchSummary::skipped("No tokens found for target users"));
    }

    let content = content::render(kind, &req);

    let mut sent = 0usize;
    let mut failed = 0usize;
    for push_token in &tokens {
        match fcm
            .send(&push_token.token, &content.title, &content.body, &content.data)
            .await
        {
            Ok(()) => sent += 1,
            Err(e) => {
                failed += 1;
                tracing::warn!("Push send failed for user {}: {}", push_token.user_id, e);
            }
        }
    }

    tracing::info!(
        "Push dispatch complete for request {}: {} sent, {} failed of {} tokens",
        req.request_id,
        sent,
        failed,
        tokens.len()
    );

    HttpResponse::Ok().json(DispatchSummary::completed(
        sent,
        failed,
        tokens.len(),
        targets.len(),
    ))
}
