//! # Task models
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`Task`] | A task as the backend returns it. Field names are camelCase on the wire (`isCompleted`, `createdAt`, `userId`). |
//! | [`TaskCreate`] | Body of `POST /Task`. Carries the client's creation timestamp. |
//! | [`TaskUpdate`] | Body of `PUT /Task/{id}`. Every field is optional and omitted when unset. |
//! | [`TaskStats`] | Server-computed completed/pending counts. |

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single task owned by the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub user_id: String,
}

impl Task {
    /// Calendar date the task was created on (`YYYY-MM-DD`).
    ///
    /// Accepts RFC 3339 timestamps and offset-less ones; anything else is shown
    /// up to the first `T`.
    pub fn created_date(&self) -> String {
        let raw = self.created_at.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return parsed.format("%Y-%m-%d").to_string();
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return parsed.format("%Y-%m-%d").to_string();
        }
        raw.split('T').next().unwrap_or_default().to_string()
    }
}

/// Body of `POST /Task`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    pub title: String,
    pub description: String,
    pub created_at: String,
}

impl TaskCreate {
    /// A new task stamped with the current time.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: now_iso(),
        }
    }
}

/// Body of `PUT /Task/{id}`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TaskUpdate {
    /// Change title and description, as the edit form does.
    pub fn content(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Builder method to stamp the update with the current time.
    pub fn stamped(mut self) -> Self {
        self.updated_at = Some(now_iso());
        self
    }
}

/// Completed/pending counts for the signed-in user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskStats {
    pub completed: u64,
    pub pending: u64,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
