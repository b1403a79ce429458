use api::AuthState;
use dioxus::prelude::*;

use ui::{AuthProvider, TaskProvider};
use views::{Dashboard, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting TaskDeck"));

    rsx! {
        // Global app resources
        document::Title { "TaskDeck" }
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }

        AuthProvider {
            TaskProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard or the login page.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    match auth.state() {
        AuthState::Loading => {}
        AuthState::Authenticated(_) => {
            nav.replace(Route::Dashboard {});
        }
        AuthState::Unauthenticated => {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
