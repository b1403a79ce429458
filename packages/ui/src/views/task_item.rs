use api::Task;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use super::{TaskModal, TaskModalMode};
use crate::confirm::{press_to_confirm, ConfirmArm};
use crate::icons::{FaCheck, FaPen, FaTrashCan};
use crate::{use_tasks, Icon};

/// One row of the task list: completion checkbox, text, edit and delete.
#[component]
pub fn TaskItem(task: Task) -> Element {
    let tasks = use_tasks();
    let mut editing = use_signal(|| false);
    let delete_arm = use_signal(ConfirmArm::<i64>::new);

    let id = task.id;
    let delete_armed = delete_arm.read().is_armed(&id);
    let checkbox_id = format!("task-{id}");
    let created = task.created_date();

    // Both actions can unmount this row (deletion, or a toggle under a
    // filter), so they run on the root scope to let the stats refresh finish.
    let handle_toggle = move |_| {
        spawn_forever(async move {
            if let Err(e) = tasks.toggle(id).await {
                tracing::error!("Failed to toggle task {id}: {}", e);
            }
        });
    };

    let handle_delete = move |_| {
        if !press_to_confirm(delete_arm, id) {
            return;
        }
        spawn_forever(async move {
            if let Err(e) = tasks.delete(id).await {
                tracing::error!("Failed to delete task {id}: {}", e);
            }
        });
    };

    rsx! {
        div {
            class: if task.is_completed { "task-item completed" } else { "task-item" },
            div {
                class: "task-checkbox",
                input {
                    id: "{checkbox_id}",
                    r#type: "checkbox",
                    checked: task.is_completed,
                    onchange: handle_toggle,
                }
                label {
                    class: "checkbox-label",
                    r#for: "{checkbox_id}",
                    Icon { icon: FaCheck, width: 12, height: 12 }
                }
            }

            div {
                class: "task-content",
                h3 { class: "task-title", {task.title.clone()} }
                if !task.description.is_empty() {
                    p { class: "task-description", {task.description.clone()} }
                }
                span { class: "task-date", "Created on: {created}" }
            }

            div {
                class: "task-actions",
                button {
                    class: "task-action-btn edit",
                    aria_label: "Edit task",
                    onclick: move |_| editing.set(true),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                button {
                    class: if delete_armed { "task-action-btn delete confirm" } else { "task-action-btn delete" },
                    aria_label: "Delete task",
                    onclick: handle_delete,
                    if delete_armed {
                        span { class: "delete-confirm", "?" }
                    } else {
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }

        if editing() {
            TaskModal {
                mode: TaskModalMode::Edit(task.clone()),
                on_close: move |_| editing.set(false),
            }
        }
    }
}
