//! Well-known preference keys. All session-layer state the store carries
//! lives under one of these.

/// Bearer token of the authenticated session.
pub const TOKEN: &str = "token";
/// Serialized profile of the session user.
pub const USER_PROFILE: &str = "user_profile";
/// Currently selected city.
pub const SELECTED_CITY: &str = "selected_city";
/// Recently selected cities, most recent first.
pub const CITY_HISTORY: &str = "city_history";
/// Recent search terms, most recent first.
pub const SEARCH_HISTORY: &str = "search_history";
/// "More mode" feature flag.
pub const MORE_MODE: &str = "more_mode";
