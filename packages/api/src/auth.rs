//! Authentication endpoints.

use reqwest::Method;
use store::TOKEN_KEY;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthPayload, LoginCredentials, RegisterData, User};

/// `/Auth/*` endpoints, borrowed from an [`ApiClient`].
#[derive(Clone, Copy, Debug)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /Auth/login`. On success the token is written to the session store.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/Auth/login")
            .json(credentials);
        let payload: AuthPayload = self.client.fetch(request).await?;
        Ok(self.start_session(payload, &credentials.identifier))
    }

    /// `POST /Auth/register`. On success the token is written to the session store.
    pub async fn register(&self, data: &RegisterData) -> Result<User, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/Auth/register")
            .json(data);
        let payload: AuthPayload = self.client.fetch(request).await?;
        Ok(self.start_session(payload, &data.email))
    }

    /// Forget the session locally. There is no logout endpoint.
    pub fn logout(&self) {
        self.client.clear_session();
    }

    /// `DELETE /Auth/delete`, then forget the session.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        let request = self.client.request(Method::DELETE, "/Auth/delete");
        self.client.execute(request).await?;
        self.client.clear_session();
        Ok(())
    }

    fn start_session(&self, payload: AuthPayload, email: &str) -> User {
        self.client.session().set(TOKEN_KEY, &payload.token);
        User {
            id: String::new(),
            username: payload.username,
            email: email.to_string(),
            role: payload.role,
            token: payload.token,
        }
    }
}
