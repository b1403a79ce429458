use api::TaskStats;
use dioxus::prelude::*;

use super::{AdminPanel, Header, TaskList, TaskModal, TaskModalMode};
use crate::filter::TaskFilter;
use crate::icons::FaPlus;
use crate::{use_auth, use_tasks, Icon};

/// The signed-in home screen.
///
/// Stats cards show the list length as the total and the server's counts for
/// active and completed; unknown stats read as zero.
#[component]
pub fn Dashboard(on_signed_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let tasks = use_tasks();
    let mut filter = use_signal(TaskFilter::default);
    let mut creating = use_signal(|| false);

    let username = auth.user().map(|u| u.username).unwrap_or_default();
    let all = tasks.tasks();
    let total = all.len();
    let TaskStats { completed, pending } = tasks.stats().unwrap_or_default();
    let visible = filter().apply(&all);

    rsx! {
        div {
            class: "dashboard",
            Header { on_signed_out }

            main {
                class: "dashboard-main",
                div {
                    class: "dashboard-container",
                    div {
                        class: "dashboard-header",
                        div {
                            h1 { "My Tasks" }
                            p { class: "dashboard-subtitle", "Welcome back, {username}" }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| creating.set(true),
                            Icon { icon: FaPlus, width: 12, height: 12 }
                            "New Task"
                        }
                    }

                    if tasks.loading() {
                        div { class: "loading-state", "Loading tasks..." }
                    } else {
                        div {
                            class: "stats-grid",
                            div {
                                class: "stat-card",
                                div { class: "stat-value", "{total}" }
                                div { class: "stat-label", "Total Tasks" }
                            }
                            div {
                                class: "stat-card",
                                div { class: "stat-value", "{pending}" }
                                div { class: "stat-label", "Active" }
                            }
                            div {
                                class: "stat-card",
                                div { class: "stat-value", "{completed}" }
                                div { class: "stat-label", "Completed" }
                            }
                        }

                        div {
                            class: "filter-tabs",
                            for tab in TaskFilter::TABS {
                                button {
                                    key: "{tab:?}",
                                    class: if filter() == tab { "filter-tab active" } else { "filter-tab" },
                                    onclick: move |_| filter.set(tab),
                                    {tab.label()}
                                }
                            }
                        }

                        TaskList { tasks: visible }
                    }

                    if auth.is_admin() {
                        AdminPanel {}
                    }
                }
            }

            if creating() {
                TaskModal {
                    mode: TaskModalMode::Create,
                    on_close: move |_| creating.set(false),
                }
            }
        }
    }
}
