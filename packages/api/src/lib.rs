//! # API crate: backend access and client state for TaskDeck
//!
//! Everything the frontends need to talk to the TaskDeck REST backend, with no
//! dependency on the UI framework. The web and desktop apps wrap these types in
//! reactive providers; tests drive them directly against a mock server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, bearer token, `401` handling |
//! | [`auth`] | `/Auth/*` endpoints: login, register, account deletion |
//! | [`tasks`] | `/Task/*` endpoints: CRUD, toggle, stats |
//! | [`admin`] | `/Auth/admin/*` endpoints: user listing and removal |
//! | [`models`] | Wire types and the `{ success, message, data }` envelope |
//! | [`session`] | [`SessionManager`] and the [`AuthState`] machine |
//! | [`board`] | [`TaskBoard`] cache and the [`TaskService`] that keeps it current |
//! | [`error`] | [`ApiError`] and the user-facing [`ActionError`] |

pub mod admin;
pub mod auth;
pub mod board;
pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod tasks;

pub use admin::RoleCounts;
pub use board::{BoardCell, TaskBoard, TaskChange, TaskService};
pub use client::{ApiClient, AuthFailureHook};
pub use error::{ActionError, ApiError};
pub use models::{AdminUser, Task, TaskCreate, TaskStats, TaskUpdate, User};
pub use session::{AuthState, SessionManager};
