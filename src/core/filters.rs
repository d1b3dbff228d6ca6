/// Case-insensitive symmetric substring containment
///
/// Interest values are free-form user input, so "قانون" and "قانوني"
/// must match in either direction.
#[inline]
pub fn fuzzy_contains(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Category condition for a profile against a request
///
/// A request without categories matches every profile; a profile category
/// matches when it overlaps ANY of the request's categories.
#[inline]
pub fn matches_categories(interested: &[String], requested: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }

    requested
        .iter()
        .any(|req| interested.iter().any(|own| fuzzy_contains(own, req)))
}

/// City condition for a profile against a request
///
/// True when the request carries no city, the profile declares no city
/// preference, the profile opted into the wildcard sentinel, or any
/// declared city overlaps the request's city.
#[inline]
pub fn matches_city(interested: &[String], requested: Option<&str>, wildcard: &str) -> bool {
    let Some(city) = requested.map(str::trim).filter(|c| !c.is_empty()) else {
        return true;
    };

    if interested.is_empty() {
        return true;
    }

    if interested.iter().any(|own| own == wildcard) {
        return true;
    }

    interested.iter().any(|own| fuzzy_contains(own, city))
}

/// Truncate to at most `max` characters, never splitting a codepoint
pub fn clip_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::DEFAULT_CITY_WILDCARD;

    fn cities(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_fuzzy_contains_is_symmetric() {
        assert!(fuzzy_contains("قانون", "قانوني"));
        assert!(fuzzy_contains("قانوني", "قانون"));
        assert!(!fuzzy_contains("سباكة", "تصوير"));
    }

    #[test]
    fn test_fuzzy_contains_ignores_case() {
        assert!(fuzzy_contains("Riyadh", "riyadh"));
        assert!(fuzzy_contains("riyadh city", "Riyadh"));
    }

    #[test]
    fn test_request_without_categories_matches_vacuously() {
        assert!(matches_categories(&cities(&["سباكة"]), &[]));
    }

    #[test]
    fn test_any_request_category_is_enough() {
        let interested = cities(&["كهرباء"]);
        let requested = cities(&["سباكة", "كهرباء"]);
        assert!(matches_categories(&interested, &requested));
        assert!(!matches_categories(&interested, &cities(&["سباكة"])));
    }

    #[test]
    fn test_city_wildcard_always_matches() {
        let interested = cities(&[DEFAULT_CITY_WILDCARD]);
        assert!(matches_city(&interested, Some("جدة"), DEFAULT_CITY_WILDCARD));
        assert!(matches_city(&interested, Some("Riyadh"), DEFAULT_CITY_WILDCARD));
    }

    #[test]
    fn test_no_city_preference_matches() {
        assert!(matches_city(&[], Some("Riyadh"), DEFAULT_CITY_WILDCARD));
    }

    #[test]
    fn test_absent_or_blank_request_city_matches() {
        let interested = cities(&["جدة"]);
        assert!(matches_city(&interested, None, DEFAULT_CITY_WILDCARD));
        assert!(matches_city(&interested, Some("  "), DEFAULT_CITY_WILDCARD));
        assert!(!matches_city(&interested, Some("Riyadh"), DEFAULT_CITY_WILDCARD));
    }

    #[test]
    fn test_clip_chars_respects_codepoints() {
        assert_eq!(clip_chars("سباكة", 3), "سبا");
        assert_eq!(clip_chars("abc", 10), "abc");
    }
}
