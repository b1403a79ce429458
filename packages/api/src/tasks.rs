//! Task endpoints.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Task, TaskCreate, TaskStats, TaskUpdate};

/// `/Task/*` endpoints, borrowed from an [`ApiClient`].
#[derive(Clone, Copy, Debug)]
pub struct TaskApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TaskApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /Task`
    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let request = self.client.request(Method::GET, "/Task");
        self.client.fetch(request).await
    }

    /// `GET /Task/{id}`
    pub async fn get(&self, id: i64) -> Result<Task, ApiError> {
        let request = self.client.request(Method::GET, &format!("/Task/{id}"));
        self.client.fetch(request).await
    }

    /// `POST /Task`
    pub async fn create(&self, task: &TaskCreate) -> Result<Task, ApiError> {
        let request = self.client.request(Method::POST, "/Task").json(task);
        self.client.fetch(request).await
    }

    /// `PUT /Task/{id}`
    pub async fn update(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        let request = self
            .client
            .request(Method::PUT, &format!("/Task/{id}"))
            .json(update);
        self.client.fetch(request).await
    }

    /// `PATCH /Task/{id}/toggle`
    pub async fn toggle(&self, id: i64) -> Result<Task, ApiError> {
        let request = self
            .client
            .request(Method::PATCH, &format!("/Task/{id}/toggle"));
        self.client.fetch(request).await
    }

    /// `DELETE /Task/{id}`
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self.client.request(Method::DELETE, &format!("/Task/{id}"));
        self.client.execute(request).await
    }

    /// `GET /Task/stats`
    pub async fn stats(&self) -> Result<TaskStats, ApiError> {
        let request = self.client.request(Method::GET, "/Task/stats");
        self.client.fetch(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{setup, task_json};
    use wiremock::matchers::{body_json, body_partial_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_list_and_get() {
        let (server, client, _session) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/Task"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [task_json(1, "Write report", false), task_json(2, "Call mom", true)]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/Task/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": task_json(2, "Call mom", true)
            })))
            .mount(&server)
            .await;

        let tasks = client.tasks().list().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Write report");

        let task = client.tasks().get(2).await.unwrap();
        assert!(task.is_completed);
    }

    #[tokio::test]
    async fn test_create_posts_title_and_description() {
        let (server, client, _session) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/Task"))
            .and(body_partial_json(serde_json::json!({ "title": "Buy milk", "description": "" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "success": true,
                "message": "Task created",
                "data": task_json(42, "Buy milk", false)
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = client.tasks().create(&TaskCreate::new("Buy milk", "")).await.unwrap();
        assert_eq!(task.id, 42);
        assert!(!task.is_completed);
    }

    #[tokio::test]
    async fn test_update_sends_only_set_fields() {
        let (server, client, _session) = setup().await;

        Mock::given(method("PUT"))
            .and(path("/api/Task/5"))
            .and(body_json(serde_json::json!({ "title": "Renamed", "description": "details" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Task updated",
                "data": task_json(5, "Renamed", false)
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = client
            .tasks()
            .update(5, &TaskUpdate::content("Renamed", "details"))
            .await
            .unwrap();
        assert_eq!(task.title, "Renamed");
    }

    #[tokio::test]
    async fn test_toggle_uses_patch() {
        let (server, client, _session) = setup().await;

        Mock::given(method("PATCH"))
            .and(path("/api/Task/7/toggle"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": task_json(7, "Walk dog", true)
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = client.tasks().toggle(7).await.unwrap();
        assert!(task.is_completed);
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let (server, client, _session) = setup().await;

        Mock::given(method("DELETE"))
            .and(path("/api/Task/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client.tasks().delete(7).await.unwrap();
    }
}
