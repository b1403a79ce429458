//! # User models
//!
//! ## [`User`]
//!
//! The signed-in identity held by the session layer: the backend's username, the
//! email (or login identifier), an optional role and the bearer token. It is
//! persisted as JSON under [`store::USER_KEY`] so a reload can restore it.
//! [`User::is_admin`] is the one place that decides admin privilege.
//!
//! ## [`AdminUser`]
//!
//! Read-only row returned by the admin listing endpoint.
//!
//! ## Request bodies
//!
//! [`LoginCredentials`] and [`RegisterData`] are posted as-is to the auth
//! endpoints; [`AuthPayload`] is the `data` both of them answer with.

use serde::{Deserialize, Serialize};

const ADMIN_ROLE: &str = "admin";

/// The signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub token: String,
}

impl User {
    /// Admin privilege: an `admin` role, or an email that mentions `admin`.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE) || self.email.contains(ADMIN_ROLE)
    }

    /// Uppercased first letter of the username, for avatars.
    pub fn initial(&self) -> String {
        initial_of(&self.username)
    }
}

/// A user as listed by the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub created_at: String,
}

impl AdminUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn initial(&self) -> String {
        initial_of(&self.username)
    }
}

fn initial_of(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// Body of `POST /Auth/login`. `identifier` is a username or an email.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginCredentials {
    pub identifier: String,
    pub password: String,
}

/// Body of `POST /Auth/register`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `data` of a successful login or registration.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthPayload {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, role: Option<&str>) -> User {
        User {
            id: String::new(),
            username: "alice".into(),
            email: email.into(),
            role: role.map(str::to_string),
            token: "abc".into(),
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(user("alice@example.com", Some("admin")).is_admin());
        assert!(user("admin@example.com", None).is_admin());
        assert!(!user("alice@example.com", Some("user")).is_admin());
        assert!(!user("alice@example.com", None).is_admin());
    }

    #[test]
    fn test_initial() {
        assert_eq!(user("a@b.c", None).initial(), "A");
        let mut nameless = user("a@b.c", None);
        nameless.username.clear();
        assert_eq!(nameless.initial(), "");
    }

    #[test]
    fn test_stored_user_without_role_parses() {
        let stored = r#"{"id":"","username":"alice","email":"alice","token":"abc"}"#;
        let parsed: User = serde_json::from_str(stored).unwrap();
        assert_eq!(parsed, user("alice", None));
        assert!(!serde_json::to_string(&parsed).unwrap().contains("role"));
    }

    #[test]
    fn test_admin_user_wire_format() {
        let json = r#"{"id":"u1","username":"bob","email":null,"role":"user","createdAt":"2024-03-01T10:00:00Z"}"#;
        let parsed: AdminUser = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.email, "");
        assert_eq!(parsed.created_at, "2024-03-01T10:00:00Z");
        assert!(!parsed.is_admin());
    }
}
