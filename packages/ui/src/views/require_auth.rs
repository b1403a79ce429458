use api::AuthState;
use dioxus::prelude::*;

use crate::use_auth;

/// Render `children` only for a signed-in user.
///
/// While the stored session is still being read a placeholder is shown. Once
/// it is known that nobody is signed in, `on_unauthenticated` runs (the
/// platform apps redirect to their login route there) and nothing renders.
#[component]
pub fn RequireAuth(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();

    match auth.state() {
        AuthState::Loading => rsx! {
            div { class: "loading-state", "Loading..." }
        },
        AuthState::Unauthenticated => {
            on_unauthenticated.call(());
            rsx! {}
        }
        AuthState::Authenticated(_) => rsx! {
            {children}
        },
    }
}
