use api::{Task, TaskUpdate};
use dioxus::prelude::*;

use super::ModalOverlay;
use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::icons::FaXmark;
use crate::{use_tasks, Icon};

/// What the modal is editing.
#[derive(Clone, Debug, PartialEq)]
pub enum TaskModalMode {
    Create,
    Edit(Task),
}

/// Create or edit a task.
#[component]
pub fn TaskModal(mode: TaskModalMode, on_close: EventHandler<()>) -> Element {
    let tasks = use_tasks();
    let (initial_title, initial_description) = match &mode {
        TaskModalMode::Create => (String::new(), String::new()),
        TaskModalMode::Edit(task) => (task.title.clone(), task.description.clone()),
    };
    let mut title = use_signal(|| initial_title);
    let mut description = use_signal(|| initial_description);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let editing = match &mode {
        TaskModalMode::Create => None,
        TaskModalMode::Edit(task) => Some(task.id),
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if title().trim().is_empty() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            error.set(None);

            let result = match editing {
                Some(id) => tasks.update(id, TaskUpdate::content(title(), description()).stamped()).await,
                None => tasks.create(title(), description()).await,
            };
            submitting.set(false);
            match result {
                Ok(()) => on_close.call(()),
                Err(e) => error.set(Some(e.message)),
            }
        });
    };

    let heading = if editing.is_some() { "Edit Task" } else { "New Task" };
    let action = if editing.is_some() { "Update Task" } else { "Create Task" };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-header",
                h2 { class: "modal-title", "{heading}" }
                button {
                    class: "modal-close",
                    r#type: "button",
                    aria_label: "Close modal",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }

            form {
                class: "modal-body",
                onsubmit: handle_submit,

                div {
                    class: "form-group",
                    Label { html_for: "task-title", "Title" }
                    Input {
                        id: "task-title",
                        placeholder: "Enter task title",
                        value: title(),
                        autofocus: true,
                        disabled: submitting(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }

                div {
                    class: "form-group",
                    Label { html_for: "task-description", "Description" }
                    Textarea {
                        id: "task-description",
                        placeholder: "Add a description (optional)",
                        rows: 4,
                        value: description(),
                        disabled: submitting(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: submitting(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "{action}" }
                    }
                }
            }
        }
    }
}
