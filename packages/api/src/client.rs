//! # HTTP client wrapper
//!
//! [`ApiClient`] is the single door to the backend. Every endpoint function in
//! [`crate::auth`], [`crate::tasks`] and [`crate::admin`] builds its request with
//! [`ApiClient::request`] and sends it with [`ApiClient::fetch`] or
//! [`ApiClient::execute`], which gives all of them the same behaviour:
//!
//! - the bearer token is read from the session store on every request and
//!   attached as `Authorization: Bearer <token>` when present;
//! - a `401` clears `token` and `user` from the session store and fires the
//!   auth-failure hook, so the host application can send the user back to the
//!   login view;
//! - any other non-2xx status becomes [`ApiError::Status`], carrying the
//!   backend's `message` when the body has one;
//! - there are no retries and no timeout beyond the transport's own.
//!
//! The hook is injected rather than hardwired so the client does not depend on
//! any particular navigation mechanism.

use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::{ClientConfig, KeyValueStore, TOKEN_KEY, USER_KEY};

use crate::admin::AdminApi;
use crate::auth::AuthApi;
use crate::error::ApiError;
use crate::models::Envelope;
use crate::tasks::TaskApi;

/// Called after a `401` has cleared the stored session.
pub type AuthFailureHook = Arc<dyn Fn() + Send + Sync>;

/// Configured HTTP client for the TaskDeck backend. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn KeyValueStore>,
    on_auth_failure: Option<AuthFailureHook>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url` reading its token from `session`.
    pub fn new(base_url: impl Into<String>, session: Arc<dyn KeyValueStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            on_auth_failure: None,
        }
    }

    pub fn from_config(config: &ClientConfig, session: Arc<dyn KeyValueStore>) -> Self {
        Self::new(config.api.base_url.clone(), session)
    }

    /// Builder method to install the hook run after a `401`.
    pub fn with_auth_failure_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_auth_failure = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store the bearer token is read from.
    pub fn session(&self) -> &Arc<dyn KeyValueStore> {
        &self.session
    }

    /// The token the next request will carry.
    pub fn token(&self) -> Option<String> {
        self.session.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Authentication endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Task endpoints.
    pub fn tasks(&self) -> TaskApi<'_> {
        TaskApi::new(self)
    }

    /// Admin endpoints.
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    /// Start a request to `path` (relative to the base URL) with the bearer token attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url).header(ACCEPT, "application/json");
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request whose envelope carries a payload.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let envelope: Envelope<T> = response.json().await?;
        envelope.into_data()
    }

    /// Send a request whose payload is not needed.
    ///
    /// An empty or non-JSON body counts as success; an envelope with
    /// `success: false` is still a rejection.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = self.send(request).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(());
        }
        match serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
            Ok(envelope) => envelope.into_outcome(),
            Err(_) => Ok(()),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%status, url = %response.url(), "backend responded");

        if status == StatusCode::UNAUTHORIZED {
            let message = error_message(response).await;
            self.expire_session();
            return Err(ApiError::Unauthorized { message });
        }
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Drop the token and user from the session store.
    pub(crate) fn clear_session(&self) {
        self.session.remove(TOKEN_KEY);
        self.session.remove(USER_KEY);
    }

    fn expire_session(&self) {
        tracing::warn!("backend rejected the session, signing out");
        self.clear_session();
        if let Some(hook) = &self.on_auth_failure {
            hook();
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

async fn error_message(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    serde_json::from_str::<ErrorBody>(&body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}
