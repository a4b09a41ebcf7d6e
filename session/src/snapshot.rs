use courtside_types::{City, UserProfile};

/// Where the session is in its authentication lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    LoggedOut,
    Authenticating,
    LoggedIn,
}

/// Complete, immutable snapshot of session state.
/// Sent to subscribers on every state change and on subscribe.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub auth: AuthPhase,
    pub token: Option<String>,
    pub profile: Option<UserProfile>,
    /// Message of the last failed login; cleared when the next attempt
    /// starts.
    pub last_error: Option<String>,
    pub selected_city: City,
    /// Recently selected cities, most recent first, capped at 5.
    pub city_history: Vec<City>,
    /// Recent search terms, most recent first, capped at 20.
    pub search_history: Vec<String>,
    pub more_mode: bool,
}

impl SessionSnapshot {
    /// Token presence is the sole determinant of being authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
