use crate::core::filters::clip_chars;
use crate::models::domain::NotificationKind;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest category/city filter value forwarded to the backend
pub const MAX_FILTER_CHARS: usize = 100;
/// Keyword filters are capped to keep the procedure call bounded
pub const MAX_KEYWORDS: usize = 20;

/// Admin query forwarded to the interest-matching procedure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestQueryRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl InterestQueryRequest {
    /// Trim and cap the raw filters; blank values collapse to absent
    pub fn normalize(&self) -> InterestFilter {
        let clip = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| clip_chars(v, MAX_FILTER_CHARS))
        };

        let keywords = self
            .keywords
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .take(MAX_KEYWORDS)
            .map(str::to_string)
            .collect();

        InterestFilter {
            category: clip(&self.category),
            city: clip(&self.city),
            keywords,
        }
    }
}

/// Normalized filter set handed to the backend procedure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestFilter {
    pub category: Option<String>,
    pub city: Option<String>,
    pub keywords: Vec<String>,
}

impl InterestFilter {
    /// An all-empty filter short-circuits without a backend call
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.city.is_none() && self.keywords.is_empty()
    }
}

/// Request to dispatch push notifications for a marketplace event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PushDispatchRequest {
    #[serde(default, alias = "notification_type", rename = "notificationType")]
    pub notification_type: NotificationKind,
    #[validate(length(min = 1))]
    #[serde(default, alias = "request_id", rename = "requestId")]
    pub request_id: String,
    #[validate(length(min = 1))]
    #[serde(default, alias = "request_title", rename = "requestTitle")]
    pub request_title: String,
    #[serde(default, alias = "request_description", rename = "requestDescription")]
    pub request_description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "author_id", rename = "authorId")]
    pub author_id: String,
    #[serde(default, alias = "recipient_id", rename = "recipientId")]
    pub recipient_id: Option<String>,
    #[serde(default, alias = "offer_id", rename = "offerId")]
    pub offer_id: Option<String>,
    #[serde(default, alias = "provider_name", rename = "providerName")]
    pub provider_name: Option<String>,
    #[serde(default, alias = "message_content", rename = "messageContent")]
    pub message_content: Option<String>,
    #[serde(default, alias = "sender_name", rename = "senderName")]
    pub sender_name: Option<String>,
}

impl PushDispatchRequest {
    /// Wire names of the mandatory fields that are absent or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.request_id.trim().is_empty() {
            missing.push("requestId");
        }
        if self.request_title.trim().is_empty() {
            missing.push("requestTitle");
        }
        if self.author_id.trim().is_empty() {
            missing.push("authorId");
        }
        missing
    }
}
