use std::sync::Arc;

use courtside_api::TokenCell;
use courtside_store::{keys, PrefStore};
use courtside_types::{City, LoginData, UserProfile};

use super::commands::SessionError;
use super::snapshot::{AuthPhase, SessionSnapshot};

pub(crate) const CITY_HISTORY_CAP: usize = 5;
pub(crate) const SEARCH_HISTORY_CAP: usize = 20;

/// Internal mutable state, owned entirely by the session actor. No locks.
///
/// The store is the source of truth across restarts; this struct is the
/// in-memory mirror. Every mutation persists before it is observable
/// through a snapshot, and a failed remote call never touches the store.
pub(crate) struct SessionState {
    store: Arc<PrefStore>,
    token_cell: TokenCell,
    auth: AuthPhase,
    token: Option<String>,
    profile: Option<UserProfile>,
    last_error: Option<String>,
    selected_city: City,
    city_history: Vec<City>,
    search_history: Vec<String>,
    more_mode: bool,
}

impl SessionState {
    /// Reconcile in-memory state to whatever the store holds. A persisted
    /// token puts the session straight into `LoggedIn` and republishes the
    /// token to the transport's cell.
    pub fn hydrate(store: Arc<PrefStore>, token_cell: TokenCell) -> Self {
        let token = store.get_string(keys::TOKEN);
        let profile = store.get_json::<UserProfile>(keys::USER_PROFILE);
        let selected_city = store.get_json::<City>(keys::SELECTED_CITY).unwrap_or_default();
        let city_history = store.get_json::<Vec<City>>(keys::CITY_HISTORY).unwrap_or_default();
        let search_history = store
            .get_json::<Vec<String>>(keys::SEARCH_HISTORY)
            .unwrap_or_default();
        let more_mode = store.get_bool(keys::MORE_MODE).unwrap_or(false);

        let auth = match token {
            Some(ref t) => {
                token_cell.set(t.clone());
                AuthPhase::LoggedIn
            }
            None => {
                token_cell.clear();
                AuthPhase::LoggedOut
            }
        };

        Self {
            store,
            token_cell,
            auth,
            token,
            profile,
            last_error: None,
            selected_city,
            city_history,
            search_history,
            more_mode,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            auth: self.auth,
            token: self.token.clone(),
            profile: self.profile.clone(),
            last_error: self.last_error.clone(),
            selected_city: self.selected_city.clone(),
            city_history: self.city_history.clone(),
            search_history: self.search_history.clone(),
            more_mode: self.more_mode,
        }
    }

    /// A login attempt is starting: clear the previous failure message.
    pub fn begin_login(&mut self) -> SessionSnapshot {
        self.auth = AuthPhase::Authenticating;
        self.last_error = None;
        self.snapshot()
    }

    /// Persist and adopt a successful login. The store is written first;
    /// if that fails the session stays logged out and the error surfaces.
    pub fn complete_login(&mut self, data: LoginData) -> Result<SessionSnapshot, SessionError> {
        let persist = self
            .store
            .set_string(keys::TOKEN, &data.token)
            .and_then(|()| self.store.set_json(keys::USER_PROFILE, &data.user));
        if let Err(e) = persist {
            self.auth = AuthPhase::LoggedOut;
            self.last_error = Some(e.to_string());
            return Err(e.into());
        }

        self.token_cell.set(data.token.clone());
        self.auth = AuthPhase::LoggedIn;
        self.token = Some(data.token);
        self.profile = Some(data.user);
        Ok(self.snapshot())
    }

    /// Record a failed login. Nothing is persisted.
    pub fn fail_login(&mut self, message: String) -> SessionSnapshot {
        self.auth = AuthPhase::LoggedOut;
        self.last_error = Some(message);
        self.snapshot()
    }

    /// Drop the authenticated session from memory, the transport cell and
    /// the store. Memory and the cell are cleared even when the store
    /// removal fails, so a stale token can never outlive a logout locally.
    pub fn clear_session(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.token_cell.clear();
        self.auth = AuthPhase::LoggedOut;
        self.token = None;
        self.profile = None;

        self.store.remove(keys::TOKEN)?;
        self.store.remove(keys::USER_PROFILE)?;
        Ok(self.snapshot())
    }

    /// Select a city and record it in the bounded history (dedup by id).
    pub fn set_selected_city(&mut self, city: City) -> Result<SessionSnapshot, SessionError> {
        self.store.set_json(keys::SELECTED_CITY, &city)?;
        let history = self.store.append_bounded(
            keys::CITY_HISTORY,
            city.clone(),
            CITY_HISTORY_CAP,
            |a: &City, b: &City| a.id == b.id,
        )?;

        self.selected_city = city;
        self.city_history = history;
        Ok(self.snapshot())
    }

    /// Record a search term (exact-match dedup, blanks rejected).
    pub fn add_search_term(&mut self, term: &str) -> Result<SessionSnapshot, SessionError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(SessionError::Validation(
                "search term must not be blank".to_string(),
            ));
        }

        let history = self.store.append_bounded(
            keys::SEARCH_HISTORY,
            term.to_string(),
            SEARCH_HISTORY_CAP,
            |a: &String, b: &String| a == b,
        )?;
        self.search_history = history;
        Ok(self.snapshot())
    }

    pub fn clear_search_history(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.store.remove(keys::SEARCH_HISTORY)?;
        self.search_history.clear();
        Ok(self.snapshot())
    }

    pub fn set_more_mode(&mut self, enabled: bool) -> Result<SessionSnapshot, SessionError> {
        self.store.set_bool(keys::MORE_MODE, enabled)?;
        self.more_mode = enabled;
        Ok(self.snapshot())
    }

    /// Adopt a freshly fetched profile.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<SessionSnapshot, SessionError> {
        self.store.set_json(keys::USER_PROFILE, &profile)?;
        self.profile = Some(profile);
        Ok(self.snapshot())
    }

    /// Wipe the store and return every field to its first-run default.
    pub fn reset(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.store.clear()?;
        self.token_cell.clear();
        self.auth = AuthPhase::LoggedOut;
        self.token = None;
        self.profile = None;
        self.last_error = None;
        self.selected_city = City::default();
        self.city_history.clear();
        self.search_history.clear();
        self.more_mode = false;
        Ok(self.snapshot())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}
