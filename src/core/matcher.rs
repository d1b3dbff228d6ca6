use crate::core::filters::{matches_categories, matches_city};
use crate::models::Profile;

/// Sentinel a profile stores to mean "notify me for every city"
pub const DEFAULT_CITY_WILDCARD: &str = "كل المدن";

/// Result of one matching pass
#[derive(Debug)]
pub struct MatchOutcome {
    pub interested: Vec<String>,
    pub total_profiles: usize,
}

/// In-process interest matcher
///
/// Scans the full profile set once per request and keeps the ids whose
/// declared category/city interests overlap it. The asymmetry is
/// deliberate: a request without categories matches everyone, a profile
/// without categories matches nothing.
#[derive(Debug, Clone)]
pub struct InterestMatcher {
    city_wildcard: String,
}

impl InterestMatcher {
    pub fn new() -> Self {
        Self::with_wildcard(DEFAULT_CITY_WILDCARD)
    }

    pub fn with_wildcard(wildcard: impl Into<String>) -> Self {
        Self {
            city_wildcard: wildcard.into(),
        }
    }

    /// Collect the ids of profiles interested in a request
    ///
    /// # Arguments
    /// * `profiles` - every candidate profile (the author is excluded upstream)
    /// * `categories` - the request's category list, possibly empty
    /// * `city` - the request's city, if any
    pub fn match_profiles(
        &self,
        profiles: &[Profile],
        categories: &[String],
        city: Option<&str>,
    ) -> MatchOutcome {
        let interested = profiles
            .iter()
            .filter(|profile| profile.has_interests())
            .filter(|profile| matches_categories(&profile.interested_categories, categories))
            .filter(|profile| {
                matches_city(&profile.interested_cities, city, &self.city_wildcard)
            })
            .map(|profile| profile.id.clone())
            .collect();

        MatchOutcome {
            interested,
            total_profiles: profiles.len(),
        }
    }
}

impl Default for InterestMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, categories: &[&str], cities: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            role: None,
            interested_categories: categories.iter().map(|c| c.to_string()).collect(),
            interested_cities: cities.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_plumber_request_matches_interested_profile_only() {
        let matcher = InterestMatcher::new();
        let profiles = vec![
            profile("U2", &["سباكة"], &["Riyadh"]),
            profile("U3", &[], &["Riyadh"]),
        ];

        let outcome =
            matcher.match_profiles(&profiles, &["سباكة".to_string()], Some("Riyadh"));

        assert_eq!(outcome.interested, vec!["U2"]);
        assert_eq!(outcome.total_profiles, 2);
    }

    #[test]
    fn test_empty_interest_profile_never_matches() {
        let matcher = InterestMatcher::new();
        let profiles = vec![profile("U3", &[], &[DEFAULT_CITY_WILDCARD])];

        // Even a categoryless request skips profiles with no interests
        let outcome = matcher.match_profiles(&profiles, &[], None);

        assert!(outcome.interested.is_empty());
    }

    #[test]
    fn test_request_without_categories_matches_any_interested_profile() {
        let matcher = InterestMatcher::new();
        let profiles = vec![
            profile("U2", &["تصوير"], &[]),
            profile("U4", &["سباكة"], &["جدة"]),
        ];

        let outcome = matcher.match_profiles(&profiles, &[], Some("جدة"));

        assert_eq!(outcome.interested, vec!["U2", "U4"]);
    }

    #[test]
    fn test_city_mismatch_excludes_profile() {
        let matcher = InterestMatcher::new();
        let profiles = vec![profile("U2", &["سباكة"], &["جدة"])];

        let outcome =
            matcher.match_profiles(&profiles, &["سباكة".to_string()], Some("Riyadh"));

        assert!(outcome.interested.is_empty());
    }

    #[test]
    fn test_wildcard_city_profile_matches_any_request_city() {
        let matcher = InterestMatcher::new();
        let profiles = vec![profile("U5", &["سباكة"], &[DEFAULT_CITY_WILDCARD])];

        let outcome =
            matcher.match_profiles(&profiles, &["سباكة".to_string()], Some("الدمام"));

        assert_eq!(outcome.interested, vec!["U5"]);
    }

    #[test]
    fn test_partial_category_overlap_matches() {
        let matcher = InterestMatcher::new();
        let profiles = vec![profile("U6", &["قانوني"], &[])];

        let outcome = matcher.match_profiles(&profiles, &["قانون".to_string()], None);

        assert_eq!(outcome.interested, vec!["U6"]);
    }
}
