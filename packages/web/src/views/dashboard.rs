//! The guarded task dashboard.

use dioxus::prelude::*;
use ui::views::{Dashboard as DashboardView, RequireAuth};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireAuth {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            DashboardView {
                on_signed_out: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
