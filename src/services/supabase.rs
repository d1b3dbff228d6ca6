use crate::models::{InterestFilter, Profile, PushToken};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the Supabase backend
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid access token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Table names on the backend
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub profiles: String,
    pub push_tokens: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            profiles: "profiles".to_string(),
            push_tokens: "fcm_tokens".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RoleRow {
    #[serde(default)]
    role: Option<String>,
}

/// Supabase API client
///
/// Handles all communication with the managed backend:
/// - resolving user access tokens to account ids (GoTrue)
/// - reading profile and push-token rows (PostgREST)
/// - invoking the `find_interested_users` stored procedure
pub struct SupabaseClient {
    base_url: String,
    service_role_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    /// Create a new client using the service-role credential
    pub fn new(base_url: String, service_role_key: String, tables: SupabaseTables) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            service_role_key,
            client,
            tables,
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            table
        )
    }

    /// Resolve a user access token to the account id behind it
    pub async fn resolve_user(&self, access_token: &str) -> Result<String, SupabaseError> {
        let url = format!("{}/auth/v1/user", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.service_role_key)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED || response.status() == StatusCode::FORBIDDEN
        {
            return Err(SupabaseError::Unauthorized);
        }

        if !response.status().is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to resolve user: {}",
                response.status()
            )));
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse user: {e}")))?;

        Ok(user.id)
    }

    /// Stored role for an account, if the profile exists
    pub async fn fetch_role(&self, user_id: &str) -> Result<Option<String>, SupabaseError> {
        let url = format!(
            "{}?id=eq.{}&select=role",
            self.rest_url(&self.tables.profiles),
            urlencoding::encode(user_id)
        );

        let rows: Vec<RoleRow> = self.get_json(&url).await?;

        Ok(rows.into_iter().next().and_then(|row| row.role))
    }

    /// Every profile except the author's, with its interest lists
    pub async fn profiles_except(&self, author_id: &str) -> Result<Vec<Profile>, SupabaseError> {
        let url = format!(
            "{}?id=neq.{}&select=id,interested_categories,interested_cities",
            self.rest_url(&self.tables.profiles),
            urlencoding::encode(author_id)
        );

        let profiles: Vec<Profile> = self.get_json(&url).await?;

        tracing::debug!("Fetched {} candidate profiles", profiles.len());

        Ok(profiles)
    }

    /// Push tokens registered for any of the given users
    pub async fn tokens_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<PushToken>, SupabaseError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}?user_id={}&select=user_id,token",
            self.rest_url(&self.tables.push_tokens),
            urlencoding::encode(&in_filter(user_ids))
        );

        let tokens: Vec<PushToken> = self.get_json(&url).await?;

        tracing::debug!(
            "Found {} push tokens for {} users",
            tokens.len(),
            user_ids.len()
        );

        Ok(tokens)
    }

    /// Invoke the interest-matching stored procedure
    pub async fn find_interested_users(
        &self,
        filter: &InterestFilter,
    ) -> Result<Value, SupabaseError> {
        let url = format!(
            "{}/rest/v1/rpc/find_interested_users",
            self.base_url.trim_end_matches('/')
        );

        let payload = json!({
            "p_category": filter.category,
            "p_city": filter.city,
            "p_keywords": if filter.keywords.is_empty() {
                Value::Null
            } else {
                json!(filter.keywords)
            },
        });

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.service_role_key)
            .header("Authorization", format!("Bearer {}", self.service_role_key))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Interest procedure failed: {} - {}", status, body);
            return Err(SupabaseError::ApiError(body));
        }

        response
            .json()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse result: {e}")))
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, SupabaseError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.service_role_key)
            .header("Authorization", format!("Bearer {}", self.service_role_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Backend read failed: {} - {}", status, body);
            return Err(SupabaseError::ApiError(format!(
                "Backend read failed: {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse rows: {e}")))
    }
}

/// PostgREST `in.(...)` filter over quoted values
fn in_filter(values: &[String]) -> String {
    let list = values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({list})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SupabaseClient::new(
            "https://project.supabase.co/".to_string(),
            "service-key".to_string(),
            SupabaseTables::default(),
        );

        assert_eq!(client.rest_url("profiles"), "https://project.supabase.co/rest/v1/profiles");
        assert_eq!(client.tables.push_tokens, "fcm_tokens");
    }

    #[test]
    fn test_in_filter_quotes_values() {
        let filter = in_filter(&["U1".to_string(), "U2".to_string()]);
        assert_eq!(filter, "in.(\"U1\",\"U2\")");
    }
}
