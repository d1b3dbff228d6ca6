use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result envelope for the interest-matching procedure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestMatchesResponse {
    pub data: Value,
}

/// Outcome of a push dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchSummary {
    pub success: bool,
    pub sent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,
    #[serde(rename = "totalTokens", skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<usize>,
    #[serde(rename = "interestedUsers", skip_serializing_if = "Option::is_none")]
    pub interested_users: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DispatchSummary {
    /// Nothing to send; still a success, with an explanation
    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            success: true,
            sent: 0,
            failed: None,
            total_tokens: None,
            interested_users: None,
            message: Some(message.into()),
        }
    }

    /// Fan-out completed; partial failure is reported, not hidden
    pub fn completed(sent: usize, failed: usize, total_tokens: usize, interested_users: usize) -> Self {
        Self {
            success: true,
            sent,
            failed: Some(failed),
            total_tokens: Some(total_tokens),
            interested_users: Some(interested_users),
            message: None,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_summary_uses_wire_names() {
        let summary = DispatchSummary::completed(3, 1, 4, 2);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["sent"], 3);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["totalTokens"], 4);
        assert_eq!(json["interestedUsers"], 2);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_skipped_summary_omits_counters() {
        let summary = DispatchSummary::skipped("No target users found");
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["sent"], 0);
        assert_eq!(json["message"], "No target users found");
        assert!(json.get("totalTokens").is_none());
    }

    #[test]
    fn test_error_response_detail_is_optional() {
        let plain = serde_json::to_value(ErrorResponse::new("Unauthorized")).unwrap();
        assert_eq!(plain, serde_json::json!({"error": "Unauthorized"}));

        let detailed =
            serde_json::to_value(ErrorResponse::with_details("RPC failed", "boom")).unwrap();
        assert_eq!(detailed["details"], "boom");
    }
}
