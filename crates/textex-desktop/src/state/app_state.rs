//! # Application State
//!
//! Global state management using Dioxus signals and context.

use dioxus::prelude::*;

use textex_client::{ApiClient, LoginSession, SessionStore};

use crate::config::Config;

/// Global application state.
///
/// Shared across all components via Dioxus context. Use
/// `use_context::<AppState>()` to access in components.
///
/// The state is the single owner of the session: views call [`login`] and
/// [`logout`](AppState::logout), which update the signals and persist the
/// change through the session file.
///
/// [`login`]: AppState::login
#[derive(Clone, Copy)]
pub struct AppState {
    /// URL of the backend.
    pub api_url: Signal<String>,

    /// Whether the last connection check succeeded.
    pub connected: Signal<bool>,

    /// The active login session, if any.
    pub session: Signal<Option<LoginSession>>,
}

impl AppState {
    /// Creates the application state, loading the persisted config and any
    /// stored login session from disk.
    #[must_use]
    pub fn new() -> Self {
        let config = Config::load();
        let session = SessionStore::new().load();

        Self {
            api_url: Signal::new(config.api_url),
            connected: Signal::new(false),
            session: Signal::new(session),
        }
    }

    /// Saves the current configuration to disk.
    pub fn save_config(&self) {
        let config = Config {
            api_url: self.api_url.read().clone(),
        };
        if let Err(e) = config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    /// Creates an [`ApiClient`] for the current URL and session credentials.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        let client = ApiClient::new(self.api_url.read().clone());
        match self.session.read().as_ref() {
            Some(session) => client.with_credentials(session.credentials()),
            None => client,
        }
    }

    /// Updates the API URL, resetting the connection state if it changed.
    pub fn set_api_url(&mut self, url: String) {
        if *self.api_url.read() != url {
            self.api_url.set(url);
            self.connected.set(false);
        }
    }

    // ==================== Session ====================

    /// Establishes a session after a successful login and persists it.
    ///
    /// The last-login timestamp is refreshed here, so re-logging-in with a
    /// restored session also bumps it.
    pub fn login(&mut self, mut session: LoginSession) {
        session.touch();
        if let Err(e) = SessionStore::new().save(&session) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        self.session.set(Some(session));
    }

    /// Ends the session and clears the persisted login state.
    pub fn logout(&mut self) {
        if let Err(e) = SessionStore::new().clear() {
            tracing::warn!("Failed to clear session file: {}", e);
        }
        self.session.set(None);
    }

    /// Check if a user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_some()
    }

    /// Check if the logged-in user has the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session
            .read()
            .as_ref()
            .is_some_and(LoginSession::is_admin)
    }

    /// The logged-in username, if any.
    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.username.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
