// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{NotificationKind, Profile, PushToken};
pub use requests::{InterestFilter, InterestQueryRequest, PushDispatchRequest, MAX_FILTER_CHARS, MAX_KEYWORDS};
pub use responses::{DispatchSummary, ErrorResponse, HealthResponse, InterestMatchesResponse};
