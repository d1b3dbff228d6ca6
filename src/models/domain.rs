use serde::{Deserialize, Deserializer, Serialize};

/// A user profile row with its declared notification interests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub interested_categories: Vec<String>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub interested_cities: Vec<String>,
}

impl Profile {
    /// A profile with no declared categories never matches anything
    pub fn has_interests(&self) -> bool {
        !self.interested_categories.is_empty()
    }
}

// Backend rows store unset interest lists as NULL
fn null_to_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A registered device push token; one user may hold several
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushToken {
    pub user_id: String,
    pub token: String,
}

/// Kind of push notification being dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewOffer,
    OfferAccepted,
    NewMessage,
    NegotiationStarted,
    /// Fan-out to every interested user; also the fallback for unknown tags
    #[serde(other)]
    NewRequest,
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::NewRequest
    }
}

impl NotificationKind {
    /// Tag carried in the push data payload
    pub fn tag(&self) -> &'static str {
        match self {
            NotificationKind::NewRequest => "new_request",
            NotificationKind::NewOffer => "new_offer",
            NotificationKind::OfferAccepted => "offer_accepted",
            NotificationKind::NewMessage => "new_message",
            NotificationKind::NegotiationStarted => "negotiation_started",
        }
    }

    /// Direct kinds address a single recipient instead of the matched set
    pub fn is_direct(&self) -> bool {
        !matches!(self, NotificationKind::NewRequest)
    }
}
