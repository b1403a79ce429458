//! # Task board: the cached task list and its statistics
//!
//! The backend owns every task; [`TaskBoard`] is the client's cache of the
//! list plus the last [`TaskStats`] it was told about. [`TaskService`] runs the
//! user's actions against the backend and folds the outcome into a board.
//!
//! ## Where the board lives
//!
//! Services never hold a borrow of the board across a network call. They go
//! through [`BoardCell::update`], a short synchronous write, before and after
//! each request. A plain [`TaskBoard`] is its own cell (used by tests and
//! headless callers); the UI implements the trait over its reactive signal.
//!
//! ## Mutations
//!
//! | Action | Request | Local change after success |
//! |--------|---------|----------------------------|
//! | [`create`](TaskService::create) | `POST /Task` | returned task appended |
//! | [`update`](TaskService::update) | `PUT /Task/{id}` | task replaced by the returned one |
//! | [`toggle`](TaskService::toggle) | `PATCH /Task/{id}/toggle` | that task's `is_completed` flipped |
//! | [`delete`](TaskService::delete) | `DELETE /Task/{id}` | task removed |
//!
//! A successful mutation is followed by exactly one stats fetch. A failed one
//! leaves the board untouched and returns an [`ActionError`]. Stats are never
//! derived from the list, so they can lag behind it until that fetch lands.
//!
//! Background reads ([`refresh`](TaskService::refresh),
//! [`refresh_stats`](TaskService::refresh_stats)) log failures and keep the
//! stale data.

use crate::client::ApiClient;
use crate::error::ActionError;
use crate::models::{Task, TaskCreate, TaskStats, TaskUpdate};

/// Cached tasks and statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
    pub stats: Option<TaskStats>,
    /// A full list fetch is in flight.
    pub loading: bool,
}

/// The local effect of a confirmed mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskChange {
    Created(Task),
    Updated(Task),
    Toggled(i64),
    Deleted(i64),
}

impl TaskBoard {
    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn apply(&mut self, change: &TaskChange) {
        match change {
            TaskChange::Created(task) => self.tasks.push(task.clone()),
            TaskChange::Updated(task) => {
                if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
                    *existing = task.clone();
                }
            }
            TaskChange::Toggled(id) => {
                if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == *id) {
                    existing.is_completed = !existing.is_completed;
                }
            }
            TaskChange::Deleted(id) => self.tasks.retain(|t| t.id != *id),
        }
    }

    /// Drop everything, as when the user signs out.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Somewhere a [`TaskBoard`] can be updated in place.
pub trait BoardCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut TaskBoard) -> R) -> R;
}

impl BoardCell for TaskBoard {
    fn update<R>(&mut self, f: impl FnOnce(&mut TaskBoard) -> R) -> R {
        f(self)
    }
}

/// Runs task actions against the backend.
#[derive(Clone, Debug)]
pub struct TaskService {
    client: ApiClient,
}

impl TaskService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Reload the list, then the stats.
    ///
    /// A reply that lands after the session has ended is dropped, so a board
    /// cleared on logout stays empty.
    pub async fn refresh(&self, board: &mut impl BoardCell) {
        board.update(|b| b.loading = true);
        match self.client.tasks().list().await {
            Ok(tasks) if self.signed_out() => {
                tracing::debug!(count = tasks.len(), "dropping tasks fetched for an ended session");
            }
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "fetched tasks");
                board.update(|b| b.tasks = tasks);
            }
            Err(e) => tracing::error!("failed to fetch tasks: {e}"),
        }
        board.update(|b| b.loading = false);
        if !self.signed_out() {
            self.refresh_stats(board).await;
        }
    }

    pub async fn refresh_stats(&self, board: &mut impl BoardCell) {
        match self.client.tasks().stats().await {
            Ok(_) if self.signed_out() => {}
            Ok(stats) => board.update(|b| b.stats = Some(stats)),
            Err(e) => tracing::error!("failed to fetch stats: {e}"),
        }
    }

    fn signed_out(&self) -> bool {
        self.client.token().is_none()
    }

    pub async fn create(
        &self,
        board: &mut impl BoardCell,
        title: &str,
        description: &str,
    ) -> Result<(), ActionError> {
        let task = self
            .client
            .tasks()
            .create(&TaskCreate::new(title, description))
            .await
            .map_err(|e| e.into_action("Failed to create task"))?;
        self.commit(board, TaskChange::Created(task)).await;
        Ok(())
    }

    pub async fn update(
        &self,
        board: &mut impl BoardCell,
        id: i64,
        update: &TaskUpdate,
    ) -> Result<(), ActionError> {
        let task = self
            .client
            .tasks()
            .update(id, update)
            .await
            .map_err(|e| e.into_action("Failed to update task"))?;
        self.commit(board, TaskChange::Updated(task)).await;
        Ok(())
    }

    /// Flip completion. The local flag changes only once the backend agrees.
    pub async fn toggle(&self, board: &mut impl BoardCell, id: i64) -> Result<(), ActionError> {
        self.client
            .tasks()
            .toggle(id)
            .await
            .map_err(|e| e.into_action("Failed to toggle task"))?;
        self.commit(board, TaskChange::Toggled(id)).await;
        Ok(())
    }

    pub async fn delete(&self, board: &mut impl BoardCell, id: i64) -> Result<(), ActionError> {
        self.client
            .tasks()
            .delete(id)
            .await
            .map_err(|e| e.into_action("Failed to delete task"))?;
        self.commit(board, TaskChange::Deleted(id)).await;
        Ok(())
    }

    async fn commit(&self, board: &mut impl BoardCell, change: TaskChange) {
        board.update(|b| b.apply(&change));
        self.refresh_stats(board).await;
    }
}
