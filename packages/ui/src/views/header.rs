use dioxus::prelude::*;

use crate::confirm::{press_to_confirm, ConfirmArm};
use crate::icons::{FaChevronDown, FaListCheck, FaRightFromBracket, FaUserSlash};
use crate::{use_auth, Icon};

/// Top bar with the profile menu.
///
/// `on_signed_out` runs after logout or account deletion so the host can
/// route back to the login view.
#[component]
pub fn Header(on_signed_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut open = use_signal(|| false);
    let mut delete_arm = use_signal(ConfirmArm::<()>::new);
    let mut delete_error = use_signal(|| None::<String>);

    let Some(user) = auth.user() else {
        return rsx! {};
    };
    let initial = user.initial();
    let is_admin = user.is_admin();
    let username = user.username;
    let delete_armed = delete_arm.read().is_armed(&());

    let mut close_menu = move || {
        open.set(false);
        delete_arm.with_mut(|a| a.disarm());
        delete_error.set(None);
    };

    let handle_logout = move |_| {
        close_menu();
        auth.logout();
        on_signed_out.call(());
    };

    let handle_delete = move |_| {
        if !press_to_confirm(delete_arm, ()) {
            delete_error.set(None);
            return;
        }
        spawn(async move {
            match auth.delete_account().await {
                Ok(()) => {
                    open.set(false);
                    on_signed_out.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to delete account: {}", e);
                    delete_error.set(Some(e.message));
                }
            }
        });
    };

    rsx! {
        header {
            class: "header",
            div {
                class: "header-container",
                div {
                    class: "header-logo",
                    Icon { icon: FaListCheck, width: 20, height: 20 }
                    span { class: "logo-text", "TaskDeck" }
                }

                div {
                    class: "profile-dropdown",
                    button {
                        class: "profile-button",
                        onclick: move |_| {
                            if open() {
                                close_menu();
                            } else {
                                open.set(true);
                            }
                        },
                        div { class: "user-avatar", "{initial}" }
                        span { class: "user-name", "{username}" }
                        span {
                            class: if open() { "dropdown-arrow open" } else { "dropdown-arrow" },
                            Icon { icon: FaChevronDown, width: 12, height: 12 }
                        }
                    }

                    if open() {
                        // Catches clicks anywhere outside the menu
                        div {
                            class: "dropdown-backdrop",
                            onclick: move |_| close_menu(),
                        }
                        div {
                            class: "dropdown-menu",
                            button {
                                class: "dropdown-item",
                                onclick: handle_logout,
                                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                "Logout"
                            }
                            if !is_admin {
                                button {
                                    class: if delete_armed { "dropdown-item delete confirm" } else { "dropdown-item delete" },
                                    onclick: handle_delete,
                                    Icon { icon: FaUserSlash, width: 14, height: 14 }
                                    if delete_armed { "Confirm Delete?" } else { "Delete Account" }
                                }
                                if let Some(message) = delete_error() {
                                    p { class: "dropdown-error", "{message}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
