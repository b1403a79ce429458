//! Login page.

use api::AuthState;
use dioxus::prelude::*;
use ui::use_auth;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, go straight to the dashboard
    if let AuthState::Authenticated(_) = auth.state() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
