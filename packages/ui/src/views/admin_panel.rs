//! User management for administrators.
//!
//! Lists every account, counts admins against regular users and deletes
//! non-admin accounts after a confirming second click. The list is fetched
//! when the panel mounts and again on Refresh; a failure shows a banner that
//! can be dismissed and leaves the last list in place.

use api::{AdminUser, ApiClient, RoleCounts};
use dioxus::prelude::*;

use crate::confirm::{press_to_confirm, ConfirmArm};
use crate::icons::FaArrowsRotate;
use crate::{use_auth, Icon};

async fn load_users(
    client: ApiClient,
    mut users: Signal<Vec<AdminUser>>,
    mut loading: Signal<bool>,
    mut error: Signal<Option<String>>,
) {
    loading.set(true);
    error.set(None);
    match client.admin().users().await {
        Ok(list) => {
            tracing::debug!(count = list.len(), "fetched users");
            users.set(list);
        }
        Err(e) => error.set(Some(e.into_action("Failed to fetch users").message)),
    }
    loading.set(false);
}

#[component]
pub fn AdminPanel() -> Element {
    let auth = use_auth();
    let mut users = use_signal(Vec::<AdminUser>::new);
    let loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let delete_arm = use_signal(ConfirmArm::<String>::new);

    use_effect(move || {
        spawn(load_users(auth.client(), users, loading, error));
    });

    let handle_delete = move |id: String| {
        if !press_to_confirm(delete_arm, id.clone()) {
            return;
        }
        spawn(async move {
            match auth.client().admin().delete_user(&id).await {
                Ok(()) => {
                    tracing::info!(user = %id, "deleted user");
                    users.with_mut(|list| list.retain(|u| u.id != id));
                }
                Err(e) => error.set(Some(e.into_action("Failed to delete user").message)),
            }
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "admin-panel",
                div { class: "admin-loading", "Loading users..." }
            }
        };
    }

    let RoleCounts {
        total,
        admins,
        regular,
    } = RoleCounts::of(&users.read());

    rsx! {
        div {
            class: "admin-panel",
            div {
                class: "admin-header",
                div {
                    h2 { "User Management" }
                    p { class: "admin-subtitle", "Manage all registered users" }
                }
                button {
                    class: "btn btn-outline btn-refresh",
                    onclick: move |_| {
                        spawn(load_users(auth.client(), users, loading, error));
                    },
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    "Refresh"
                }
            }

            if let Some(err) = error() {
                div {
                    class: "admin-error",
                    span { "{err}" }
                    button {
                        aria_label: "Dismiss",
                        onclick: move |_| error.set(None),
                        "×"
                    }
                }
            }

            div {
                class: "admin-stats",
                div {
                    class: "admin-stat-card",
                    div { class: "admin-stat-value", "{total}" }
                    div { class: "admin-stat-label", "Total Users" }
                }
                div {
                    class: "admin-stat-card",
                    div { class: "admin-stat-value", "{admins}" }
                    div { class: "admin-stat-label", "Admins" }
                }
                div {
                    class: "admin-stat-card",
                    div { class: "admin-stat-value", "{regular}" }
                    div { class: "admin-stat-label", "Regular Users" }
                }
            }

            div {
                class: "users-table",
                table {
                    thead {
                        tr {
                            th { "Username" }
                            th { "Email" }
                            th { "Role" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in users() {
                            UserRow {
                                key: "{user.id}",
                                armed: delete_arm.read().is_armed(&user.id),
                                user,
                                on_delete: handle_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: AdminUser, armed: bool, on_delete: EventHandler<String>) -> Element {
    let initial = user.initial();
    let badge = format!("role-badge {}", user.role);
    let id = user.id.clone();

    rsx! {
        tr {
            td {
                div {
                    class: "user-cell",
                    div { class: "user-cell-avatar", "{initial}" }
                    span { "{user.username}" }
                }
            }
            td { "{user.email}" }
            td {
                span { class: badge, "{user.role}" }
            }
            td {
                if !user.is_admin() {
                    button {
                        class: if armed { "btn-delete-user confirm" } else { "btn-delete-user" },
                        onclick: move |_| on_delete.call(id.clone()),
                        if armed { "Confirm?" } else { "Delete" }
                    }
                }
            }
        }
    }
}
