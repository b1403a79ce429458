//! Registration form with client-side validation.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::use_auth;

const MIN_PASSWORD_LEN: usize = 6;

/// Check the form before anything is sent. Returns the message to show.
fn validate(username: &str, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err("Username is required");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Account creation. Signs the new user in on success.
#[component]
pub fn RegisterView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            if let Err(msg) = validate(&u, &e, &p, &confirm_password()) {
                error.set(Some(msg.to_string()));
                return;
            }

            loading.set(true);
            match auth.register(u, e, p).await {
                Ok(()) => {
                    loading.set(false);
                    on_success.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Sign up for TaskDeck" }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "register-username", "Username" }
                        Input {
                            id: "register-username",
                            placeholder: "Username",
                            value: username(),
                            disabled: loading(),
                            autofocus: true,
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "register-email", "Email" }
                        Input {
                            id: "register-email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "register-password", "Password" }
                        Input {
                            id: "register-password",
                            r#type: "password",
                            placeholder: "Password (min 6 characters)",
                            value: password(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "register-confirm", "Confirm password" }
                        Input {
                            id: "register-confirm",
                            r#type: "password",
                            placeholder: "Confirm password",
                            value: confirm_password(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_login.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
