//! ServiceLink Match - interest matching and push notification service
//!
//! Finds the marketplace users whose declared category/city interests
//! overlap a newly posted service request and fans out one FCM push per
//! registered device, plus an admin-only interest query endpoint backed
//! by a database-side procedure.

pub mod auth;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{InterestMatcher, MatchOutcome, DEFAULT_CITY_WILDCARD};
pub use crate::models::{
    DispatchSummary, ErrorResponse, InterestQueryRequest, Profile, PushDispatchRequest, PushToken,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = InterestMatcher::new();
        let outcome = matcher.match_profiles(&[], &[], None);
        assert_eq!(outcome.total_profiles, 0);
    }
}
