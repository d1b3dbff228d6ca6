use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Role claim value that marks a privileged backend credential
pub const SERVICE_ROLE: &str = "service_role";

#[derive(Debug, Deserialize)]
struct RoleClaims {
    #[serde(default)]
    role: Option<String>,
    #[serde(default, rename = "https://supabase.io/jwt/claims")]
    nested: Option<NestedClaims>,
}

#[derive(Debug, Deserialize)]
struct NestedClaims {
    #[serde(default)]
    role: Option<String>,
}

/// Pull the credential out of an `Authorization` header value
///
/// Accepts both `Bearer <token>` and a bare token, the way the original
/// endpoints did.
pub fn extract_bearer_token(header: Option<&str>) -> Option<String> {
    let header = header?.trim();
    if header.is_empty() {
        return None;
    }

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
            Some(token.to_string())
        }
        _ => Some(header.to_string()),
    }
}

/// Read the role claim out of a JWT payload without verifying it
///
/// The claim is only a routing hint: a forged `service_role` token still
/// reaches the backend with this server's own key, and any other forgery
/// goes through the auth API. Checks the top-level `role` first, then the
/// nested Supabase claims object.
pub fn role_from_jwt(token: &str) -> Option<String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation.algorithms = vec![Algorithm::HS256, Algorithm::RS256, Algorithm::ES256];

    let data = decode::<RoleClaims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    data.claims
        .role
        .or_else(|| data.claims.nested.and_then(|nested| nested.role))
}

/// Whether a bearer credential is privileged
///
/// Either the literal service-role key, or a JWT whose role claim says so.
pub fn is_service_credential(token: &str, service_role_key: &str) -> bool {
    token == service_role_key || role_from_jwt(token).as_deref() == Some(SERVICE_ROLE)
}
