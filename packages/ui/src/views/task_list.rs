use api::Task;
use dioxus::prelude::*;

use super::TaskItem;
use crate::icons::FaClipboardList;
use crate::Icon;

#[component]
pub fn TaskList(tasks: Vec<Task>) -> Element {
    if tasks.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                div {
                    class: "empty-icon",
                    Icon { icon: FaClipboardList, width: 40, height: 40 }
                }
                h3 { "No tasks found" }
                p { "Create your first task to get started" }
            }
        };
    }

    rsx! {
        div {
            class: "task-list",
            for task in tasks {
                TaskItem { key: "{task.id}", task }
            }
        }
    }
}
