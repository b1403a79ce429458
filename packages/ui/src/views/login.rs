//! Sign-in form.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::use_auth;

/// Username-or-email and password sign-in.
///
/// `on_success` runs once the session is established; `on_register` when the
/// user asks for the registration form instead.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let id = identifier().trim().to_string();
            let pw = password();
            if id.is_empty() || pw.is_empty() {
                error.set(Some("Please enter your username and password".to_string()));
                return;
            }

            loading.set(true);
            match auth.login(id, pw).await {
                Ok(()) => {
                    loading.set(false);
                    on_success.call(());
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Welcome back" }
                p { class: "auth-subtitle", "Sign in to TaskDeck" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "login-identifier", "Username or email" }
                        Input {
                            id: "login-identifier",
                            placeholder: "alice",
                            value: identifier(),
                            disabled: loading(),
                            autofocus: true,
                            oninput: move |evt: FormEvent| identifier.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            r#type: "password",
                            placeholder: "Password",
                            value: password(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_register.call(()),
                        "Create one"
                    }
                }
            }
        }
    }
}
