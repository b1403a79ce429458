//! Authentication context and hooks for the UI.

use api::{ActionError, ApiClient, AuthState, SessionManager, User};
use dioxus::prelude::*;

use crate::platform;

/// Bumped by the HTTP client whenever the backend answers `401`.
///
/// [`AuthProvider`] watches it and signs the user out, which in turn sends
/// guarded routes back to the login view.
pub static SESSION_EXPIRED: GlobalSignal<u64> = Signal::global(|| 0);

/// Handle to the session, provided by [`AuthProvider`]. Cheap to copy into
/// event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Auth {
    state: Signal<AuthState>,
    manager: Signal<SessionManager>,
}

impl Auth {
    /// Current state; subscribes the caller.
    pub fn state(&self) -> AuthState {
        self.state.cloned()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().user().is_some_and(User::is_admin)
    }

    /// The client requests should go through. Carries the session token.
    pub fn client(&self) -> ApiClient {
        self.manager.peek().client().clone()
    }

    pub async fn login(mut self, identifier: String, password: String) -> Result<(), ActionError> {
        let manager = self.manager.cloned();
        let user = manager.login(&identifier, &password).await?;
        self.state.set(AuthState::Authenticated(user));
        Ok(())
    }

    pub async fn register(
        mut self,
        username: String,
        email: String,
        password: String,
    ) -> Result<(), ActionError> {
        let manager = self.manager.cloned();
        let user = manager.register(&username, &email, &password).await?;
        self.state.set(AuthState::Authenticated(user));
        Ok(())
    }

    pub fn logout(mut self) {
        self.manager.peek().logout();
        self.state.set(AuthState::Unauthenticated);
    }

    /// Delete the account. On failure the session stays as it was.
    pub async fn delete_account(mut self) -> Result<(), ActionError> {
        let manager = self.manager.cloned();
        manager.delete_account().await?;
        self.state.set(AuthState::Unauthenticated);
        Ok(())
    }
}

/// Get the session handle.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that owns the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let manager = use_signal(|| {
        platform::connect(|| {
            *SESSION_EXPIRED.write() += 1;
        })
    });
    let mut state = use_signal(AuthState::default);
    let auth = use_context_provider(|| Auth { state, manager });

    // Restore the stored session on mount
    use_effect(move || {
        let restored = manager.peek().restore();
        state.set(restored);
    });

    // Sign out when the backend rejects the token
    use_effect(move || {
        let expired = *SESSION_EXPIRED.read();
        if expired > 0 && state.peek().is_authenticated() {
            tracing::warn!("session expired, signing out");
            auth.logout();
        }
    });

    rsx! {
        {children}
    }
}
