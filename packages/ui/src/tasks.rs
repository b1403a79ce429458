//! Task board context: the signed-in user's tasks and stats.

use api::{ActionError, BoardCell, Task, TaskBoard, TaskService, TaskStats, TaskUpdate};
use dioxus::prelude::*;

use crate::use_auth;

/// A [`TaskBoard`] living in a signal. Every update is a single short write.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalBoard(pub Signal<TaskBoard>);

impl BoardCell for SignalBoard {
    fn update<R>(&mut self, f: impl FnOnce(&mut TaskBoard) -> R) -> R {
        self.0.with_mut(f)
    }
}

/// Handle to the task board, provided by [`TaskProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct Tasks {
    board: Signal<TaskBoard>,
    service: Signal<TaskService>,
}

impl Tasks {
    pub fn tasks(&self) -> Vec<Task> {
        self.board.read().tasks.clone()
    }

    pub fn stats(&self) -> Option<TaskStats> {
        self.board.read().stats
    }

    pub fn loading(&self) -> bool {
        self.board.read().loading
    }

    pub async fn refresh(self) {
        let service = self.service.cloned();
        service.refresh(&mut SignalBoard(self.board)).await;
    }

    pub async fn create(self, title: String, description: String) -> Result<(), ActionError> {
        let service = self.service.cloned();
        service
            .create(&mut SignalBoard(self.board), &title, &description)
            .await
    }

    pub async fn update(self, id: i64, update: TaskUpdate) -> Result<(), ActionError> {
        let service = self.service.cloned();
        service.update(&mut SignalBoard(self.board), id, &update).await
    }

    pub async fn toggle(self, id: i64) -> Result<(), ActionError> {
        let service = self.service.cloned();
        service.toggle(&mut SignalBoard(self.board), id).await
    }

    pub async fn delete(self, id: i64) -> Result<(), ActionError> {
        let service = self.service.cloned();
        service.delete(&mut SignalBoard(self.board), id).await
    }

    fn clear(mut self) {
        self.board.with_mut(TaskBoard::clear);
    }
}

pub fn use_tasks() -> Tasks {
    use_context::<Tasks>()
}

/// Provider component for the task board. Must sit inside [`crate::AuthProvider`].
///
/// Loads the board when a user signs in and empties it when they sign out.
#[component]
pub fn TaskProvider(children: Element) -> Element {
    let auth = use_auth();
    let board = use_signal(TaskBoard::default);
    let service = use_signal(|| TaskService::new(auth.client()));
    let tasks = use_context_provider(|| Tasks { board, service });

    let authenticated = use_memo(move || auth.state().is_authenticated());
    use_effect(move || {
        if authenticated() {
            spawn(tasks.refresh());
        } else {
            tasks.clear();
        }
    });

    rsx! {
        {children}
    }
}
