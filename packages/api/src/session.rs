//! # Session lifecycle
//!
//! [`SessionManager`] owns the signed-in user across reloads. It pairs the
//! [`ApiClient`] (whose session store holds the token requests carry) with a
//! persistent store holding a snapshot of `{ user, token }`:
//!
//! | Operation | Network | On success | On failure |
//! |-----------|---------|------------|------------|
//! | [`restore`](SessionManager::restore) | none | `Authenticated` when both `user` and `token` are stored | `Unauthenticated` |
//! | [`login`](SessionManager::login) / [`register`](SessionManager::register) | one call | snapshot persisted | [`ActionError`], nothing stored |
//! | [`logout`](SessionManager::logout) | none | both stores cleared | none |
//! | [`delete_account`](SessionManager::delete_account) | one call | both stores cleared | [`ActionError`], session kept |
//!
//! The state machine itself is [`AuthState`]; the UI keeps one in a signal and
//! moves it with the results of these calls.

use std::sync::Arc;

use store::{KeyValueStore, TOKEN_KEY, USER_KEY};

use crate::client::ApiClient;
use crate::error::ActionError;
use crate::models::{LoginCredentials, RegisterData, User};

/// Where the client stands with respect to authentication.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    /// Stored session not inspected yet.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Login, registration, logout and account deletion with persistence.
#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
    persisted: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(client: ApiClient, persisted: Arc<dyn KeyValueStore>) -> Self {
        Self { client, persisted }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Rebuild the session from storage without touching the network.
    ///
    /// The stored token is copied into the client's session store so the
    /// restored session can make requests straight away.
    pub fn restore(&self) -> AuthState {
        let (Some(stored_user), Some(token)) =
            (self.persisted.get(USER_KEY), self.persisted.get(TOKEN_KEY))
        else {
            return AuthState::Unauthenticated;
        };

        match serde_json::from_str::<User>(&stored_user) {
            Ok(user) => {
                self.client.session().set(TOKEN_KEY, &token);
                tracing::info!(username = %user.username, "restored stored session");
                AuthState::Authenticated(user)
            }
            Err(e) => {
                tracing::warn!("discarding unreadable stored user: {e}");
                self.forget();
                AuthState::Unauthenticated
            }
        }
    }

    pub async fn login(&self, identifier: &str, password: &str) -> Result<User, ActionError> {
        let credentials = LoginCredentials {
            identifier: identifier.to_string(),
            password: password.to_string(),
        };
        let user = self
            .client
            .auth()
            .login(&credentials)
            .await
            .map_err(|e| e.into_action("Login failed"))?;
        self.persist(&user);
        tracing::info!(username = %user.username, "signed in");
        Ok(user)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ActionError> {
        let data = RegisterData {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = self
            .client
            .auth()
            .register(&data)
            .await
            .map_err(|e| e.into_action("Registration failed"))?;
        self.persist(&user);
        tracing::info!(username = %user.username, "registered");
        Ok(user)
    }

    /// Forget the session everywhere. Never fails and needs no network.
    pub fn logout(&self) {
        self.client.auth().logout();
        self.forget();
        tracing::info!("signed out");
    }

    /// Delete the account remotely, then forget the session.
    pub async fn delete_account(&self) -> Result<(), ActionError> {
        self.client
            .auth()
            .delete_account()
            .await
            .map_err(|e| e.into_action("Failed to delete account"))?;
        self.forget();
        tracing::info!("account deleted");
        Ok(())
    }

    fn persist(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.persisted.set(USER_KEY, &json),
            Err(e) => tracing::warn!("could not persist user: {e}"),
        }
        self.persisted.set(TOKEN_KEY, &user.token);
    }

    fn forget(&self) {
        self.persisted.remove(USER_KEY);
        self.persisted.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::client_for;
    use store::MemoryStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Harness {
        server: MockServer,
        session: MemoryStore,
        persisted: MemoryStore,
        manager: SessionManager,
    }

    async fn harness() -> Harness {
        let server = MockServer::start().await;
        let session = MemoryStore::new();
        let persisted = MemoryStore::new();
        let manager = SessionManager::new(client_for(&server, &session), Arc::new(persisted.clone()));
        Harness {
            server,
            session,
            persisted,
            manager,
        }
    }

    fn alice() -> User {
        User {
            id: String::new(),
            username: "alice".into(),
            email: "alice".into(),
            role: None,
            token: "abc".into(),
        }
    }

    #[tokio::test]
    async fn test_restore_without_network() {
        let h = harness().await;
        h.persisted.set(USER_KEY, &serde_json::to_string(&alice()).unwrap());
        h.persisted.set(TOKEN_KEY, "abc");

        assert_eq!(h.manager.restore(), AuthState::Authenticated(alice()));
        assert_eq!(h.session.get(TOKEN_KEY).as_deref(), Some("abc"));

        let requests = h.server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_restore_needs_user_and_token() {
        let h = harness().await;
        assert_eq!(h.manager.restore(), AuthState::Unauthenticated);

        h.persisted.set(TOKEN_KEY, "abc");
        assert_eq!(h.manager.restore(), AuthState::Unauthenticated);

        h.persisted.remove(TOKEN_KEY);
        h.persisted.set(USER_KEY, &serde_json::to_string(&alice()).unwrap());
        assert_eq!(h.manager.restore(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_restore_discards_corrupt_user() {
        let h = harness().await;
        h.persisted.set(USER_KEY, "{not json");
        h.persisted.set(TOKEN_KEY, "abc");

        assert_eq!(h.manager.restore(), AuthState::Unauthenticated);
        assert!(h.persisted.is_empty());
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let h = harness().await;
        Mock::given(method("POST"))
            .and(path("/api/Auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "ok",
                "data": { "token": "abc", "username": "alice" }
            })))
            .mount(&h.server)
            .await;

        let user = h.manager.login("alice", "secret").await.unwrap();
        assert_eq!(user.username, "alice");

        // A fresh manager over the same storage comes back signed in.
        let reloaded = SessionManager::new(
            client_for(&h.server, &MemoryStore::new()),
            Arc::new(h.persisted.clone()),
        );
        assert_eq!(reloaded.restore(), AuthState::Authenticated(alice()));
    }

    #[tokio::test]
    async fn test_failed_login_normalizes_error() {
        let h = harness().await;
        Mock::given(method("POST"))
            .and(path("/api/Auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "message": "",
                "data": null
            })))
            .mount(&h.server)
            .await;

        let err = h.manager.login("alice", "nope").await.unwrap_err();
        assert_eq!(err.message, "Login failed");
        assert!(h.persisted.is_empty());
    }

    #[tokio::test]
    async fn test_register_error_prefers_backend_message() {
        let h = harness().await;
        Mock::given(method("POST"))
            .and(path("/api/Auth/register"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({ "success": false, "message": "Username taken" })),
            )
            .mount(&h.server)
            .await;

        let err = h.manager.register("alice", "a@example.com", "secret").await.unwrap_err();
        assert_eq!(err.message, "Username taken");
    }

    #[tokio::test]
    async fn test_logout_without_backend() {
        let session = MemoryStore::new();
        let persisted = MemoryStore::new();
        let client = ApiClient::new("http://127.0.0.1:9/api", Arc::new(session.clone()));
        let manager = SessionManager::new(client, Arc::new(persisted.clone()));

        session.set(TOKEN_KEY, "abc");
        persisted.set(TOKEN_KEY, "abc");
        persisted.set(USER_KEY, &serde_json::to_string(&alice()).unwrap());

        manager.logout();
        assert!(session.is_empty());
        assert!(persisted.is_empty());
        assert_eq!(manager.restore(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_delete_account_keeps_session_on_failure() {
        let h = harness().await;
        h.persisted.set(USER_KEY, &serde_json::to_string(&alice()).unwrap());
        h.persisted.set(TOKEN_KEY, "abc");
        h.manager.restore();

        Mock::given(method("DELETE"))
            .and(path("/api/Auth/delete"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&h.server)
            .await;

        let err = h.manager.delete_account().await.unwrap_err();
        assert_eq!(err.message, "Request failed with status code 500");
        assert_eq!(h.manager.restore(), AuthState::Authenticated(alice()));

        Mock::given(method("DELETE"))
            .and(path("/api/Auth/delete"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&h.server)
            .await;

        h.manager.delete_account().await.unwrap();
        assert!(h.persisted.is_empty());
        assert!(h.session.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_delete_account_rejected_in_envelope() {
        let h = harness().await;
        h.persisted.set(USER_KEY, &serde_json::to_string(&alice()).unwrap());
        h.persisted.set(TOKEN_KEY, "abc");
        h.manager.restore();

        Mock::given(method("DELETE"))
            .and(path("/api/Auth/delete"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "message": "Admins cannot delete themselves"
            })))
            .expect(1)
            .mount(&h.server)
            .await;

        let err = h.manager.delete_account().await.unwrap_err();
        assert_eq!(err.message, "Admins cannot delete themselves");
        assert_eq!(h.persisted.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(h.session.get(TOKEN_KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn test_auth_state_accessors() {
        assert!(AuthState::default().is_loading());
        assert!(AuthState::Unauthenticated.user().is_none());
        let state = AuthState::Authenticated(alice());
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
    }
}
