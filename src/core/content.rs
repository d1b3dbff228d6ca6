use crate::core::filters::clip_chars;
use crate::models::{NotificationKind, PushDispatchRequest};
use std::collections::HashMap;

/// Push bodies are capped so long request titles stay readable on device
pub const MAX_BODY_CHARS: usize = 100;

/// Rendered push content for one dispatch
#[derive(Debug, Clone)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub data: HashMap<String, String>,
}

/// Render the fixed title/body template for a notification kind
///
/// All copy is Arabic, matching the marketplace audience. The structured
/// data payload always carries the request id and the kind tag so the
/// app can route the tap.
pub fn render(kind: NotificationKind, request: &PushDispatchRequest) -> NotificationContent {
    let (title, body) = match kind {
        NotificationKind::NewRequest => (
            "🎯 طلب جديد يطابق اهتماماتك!".to_string(),
            request.request_title.clone(),
        ),
        NotificationKind::NewOffer => (
            "🎁 عرض جديد متاح!".to_string(),
            format!(
                "وصلك عرض من {} لطلبك: {}",
                request.provider_name.as_deref().unwrap_or("خبير"),
                request.request_title
            ),
        ),
        NotificationKind::OfferAccepted => (
            "🎉 تم قبول عرضك!".to_string(),
            format!("مبروك! تم قبول عرضك للطلب: {}", request.request_title),
        ),
        NotificationKind::NewMessage => (
            format!(
                "💬 رسالة من {}",
                request.sender_name.as_deref().unwrap_or("مستخدم")
            ),
            request
                .message_content
                .clone()
                .unwrap_or_else(|| "رسالة جديدة وصلت".to_string()),
        ),
        NotificationKind::NegotiationStarted => (
            "🤝 بدأ التفاوض!".to_string(),
            format!(
                "{} يريد التفاوض معك بخصوص عرضك.",
                request.sender_name.as_deref().unwrap_or("العميل")
            ),
        ),
    };

    let mut data = HashMap::new();
    data.insert("requestId".to_string(), request.request_id.clone());
    data.insert(
        "offerId".to_string(),
        request.offer_id.clone().unwrap_or_default(),
    );
    data.insert("type".to_string(), kind.tag().to_string());

    NotificationContent {
        title,
        body: clip_chars(&body, MAX_BODY_CHARS),
        data,
    }
}
