//! Admin endpoints and the counters the admin panel shows.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::AdminUser;

/// `/Auth/admin/*` endpoints, borrowed from an [`ApiClient`].
#[derive(Clone, Copy, Debug)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /Auth/admin/users`
    pub async fn users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let request = self.client.request(Method::GET, "/Auth/admin/users");
        self.client.fetch(request).await
    }

    /// `DELETE /Auth/admin/users/{id}`
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/Auth/admin/users/{id}"));
        self.client.execute(request).await
    }
}

/// Head counts over a user listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub total: usize,
    pub admins: usize,
    pub regular: usize,
}

impl RoleCounts {
    pub fn of(users: &[AdminUser]) -> Self {
        let admins = users.iter().filter(|u| u.is_admin()).count();
        Self {
            total: users.len(),
            admins,
            regular: users.len() - admins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn admin_user(id: &str, role: &str) -> AdminUser {
        AdminUser {
            id: id.into(),
            username: format!("user-{id}"),
            email: format!("{id}@example.com"),
            role: role.into(),
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_role_counts() {
        let users = vec![admin_user("1", "admin"), admin_user("2", "user"), admin_user("3", "user")];
        assert_eq!(
            RoleCounts::of(&users),
            RoleCounts {
                total: 3,
                admins: 1,
                regular: 2
            }
        );
        assert_eq!(RoleCounts::of(&[]), RoleCounts::default());
    }

    #[tokio::test]
    async fn test_list_and_delete_users() {
        let (server, client, _session) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/Auth/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [
                    { "id": "a1", "username": "root", "email": "root@example.com", "role": "admin", "createdAt": "2024-01-01T00:00:00Z" },
                    { "id": "u2", "username": "bob", "email": "bob@example.com", "role": "user", "createdAt": "2024-02-01T00:00:00Z" }
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/Auth/admin/users/u2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let users = client.admin().users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].is_admin());

        client.admin().delete_user("u2").await.unwrap();
    }

    #[tokio::test]
    async fn test_forbidden_listing() {
        let (server, client, _session) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/Auth/admin/users"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(serde_json::json!({ "success": false, "message": "Admins only" })),
            )
            .mount(&server)
            .await;

        let err = client.admin().users().await.unwrap_err();
        assert_eq!(err.into_action("Failed to fetch users").message, "Admins only");
    }
}
