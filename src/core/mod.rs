// Core matching exports
pub mod content;
pub mod filters;
pub mod matcher;

pub use content::{render, NotificationContent, MAX_BODY_CHARS};
pub use filters::{clip_chars, fuzzy_contains, matches_categories, matches_city};
pub use matcher::{InterestMatcher, MatchOutcome, DEFAULT_CITY_WILDCARD};
