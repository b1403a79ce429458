//! This crate contains all shared UI for the workspace.
//!
//! The two providers own the client-side state: [`AuthProvider`] the session,
//! [`TaskProvider`] the task board. Views read them through [`use_auth`] and
//! [`use_tasks`] and never talk to the backend for tasks themselves.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;

pub mod confirm;
pub mod filter;
pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, SESSION_EXPIRED};

mod tasks;
pub use tasks::{use_tasks, SignalBoard, TaskProvider, Tasks};
