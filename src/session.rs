//! Login gate for the dashboard pages.
//!
//! Any non-empty username/password pair is accepted and the outcome is only
//! remembered in a client-side key-value store. The track endpoints never see it,
//! so a real deployment needs server-side session checks in front of them.

use std::collections::HashMap;

use thiserror::Error;

pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USERNAME_KEY: &str = "username";

/// Client-side key-value store, shaped like browser local storage
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemorySessionStorage {
    items: HashMap<String, String>,
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated { username: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please fill in all fields")]
    MissingCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Index,
    Login,
    Dashboard,
    Upload,
    TrackDetail(String),
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Page::Index => "/".to_string(),
            Page::Login => "/login".to_string(),
            Page::Dashboard => "/dashboard".to_string(),
            Page::Upload => "/upload".to_string(),
            Page::TrackDetail(id) => format!("/track/{id}"),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Page::Dashboard | Page::Upload | Page::TrackDetail(_)
        )
    }
}

/// What the client should do when a page loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Page),
    Redirect(Page),
}

pub struct SessionGate<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionGate<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn state(&self) -> SessionState {
        let logged_in = self.storage.get_item(IS_LOGGED_IN_KEY).as_deref() == Some("true");
        if !logged_in {
            return SessionState::Anonymous;
        }

        SessionState::Authenticated {
            username: self.storage.get_item(USERNAME_KEY).unwrap_or_default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Authenticated { .. })
    }

    /// Accepts any non-empty pair, nothing is checked against a credential source.
    pub fn login(&mut self, username: &str, password: &str) -> Result<SessionState, SessionError> {
        if username.is_empty() || password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }

        self.storage.set_item(IS_LOGGED_IN_KEY, "true");
        self.storage.set_item(USERNAME_KEY, username);
        log::info!("signed in as {username}");
        Ok(self.state())
    }

    pub fn logout(&mut self) {
        self.storage.remove_item(IS_LOGGED_IN_KEY);
        self.storage.remove_item(USERNAME_KEY);
    }

    /// Decides whether `page` may render for the current session.
    pub fn guard(&self, page: Page) -> Navigation {
        let authenticated = self.is_authenticated();

        match page {
            Page::Index if authenticated => Navigation::Redirect(Page::Dashboard),
            Page::Index => Navigation::Redirect(Page::Login),
            Page::Login if authenticated => Navigation::Redirect(Page::Dashboard),
            page if page.is_protected() && !authenticated => Navigation::Redirect(Page::Login),
            page => Navigation::Render(page),
        }
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate<MemorySessionStorage> {
        SessionGate::new(MemorySessionStorage::default())
    }

    fn protected_pages() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::Upload,
            Page::TrackDetail("3".to_string()),
        ]
    }

    #[test]
    fn test_starts_anonymous() {
        assert_eq!(gate().state(), SessionState::Anonymous);
    }

    #[test]
    fn test_login_accepts_any_credentials() {
        let mut gate = gate();
        let state = gate.login("luna", "whatever").unwrap();

        assert_eq!(
            state,
            SessionState::Authenticated {
                username: "luna".to_string()
            }
        );

        let storage = gate.into_storage();
        assert_eq!(storage.get_item(IS_LOGGED_IN_KEY).as_deref(), Some("true"));
        assert_eq!(storage.get_item(USERNAME_KEY).as_deref(), Some("luna"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut gate = gate();

        assert_eq!(gate.login("", "pw"), Err(SessionError::MissingCredentials));
        assert_eq!(gate.login("luna", ""), Err(SessionError::MissingCredentials));
        assert_eq!(gate.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_logout_clears_identity() {
        let mut gate = gate();
        gate.login("luna", "pw").unwrap();
        gate.logout();

        assert_eq!(gate.state(), SessionState::Anonymous);
        assert_eq!(gate.into_storage().get_item(USERNAME_KEY), None);
    }

    #[test]
    fn test_only_literal_true_counts_as_logged_in() {
        let mut storage = MemorySessionStorage::default();
        storage.set_item(IS_LOGGED_IN_KEY, "false");
        storage.set_item(USERNAME_KEY, "luna");

        assert_eq!(SessionGate::new(storage).state(), SessionState::Anonymous);
    }

    #[test]
    fn test_anonymous_is_redirected_from_protected_pages() {
        let gate = gate();

        for page in protected_pages() {
            assert_eq!(gate.guard(page), Navigation::Redirect(Page::Login));
        }
        assert_eq!(gate.guard(Page::Login), Navigation::Render(Page::Login));
        assert_eq!(gate.guard(Page::Index), Navigation::Redirect(Page::Login));
    }

    #[test]
    fn test_authenticated_renders_protected_pages() {
        let mut gate = gate();
        gate.login("luna", "pw").unwrap();

        for page in protected_pages() {
            assert_eq!(gate.guard(page.clone()), Navigation::Render(page));
        }
        assert_eq!(gate.guard(Page::Login), Navigation::Redirect(Page::Dashboard));
        assert_eq!(gate.guard(Page::Index), Navigation::Redirect(Page::Dashboard));
    }

    #[test]
    fn test_page_paths() {
        assert_eq!(Page::Index.path(), "/");
        assert_eq!(Page::Upload.path(), "/upload");
        assert_eq!(Page::TrackDetail("12".into()).path(), "/track/12");
    }
}
