//! Wire models shared by the client, the session layer and the views.

mod envelope;
mod task;
mod user;

pub use envelope::Envelope;
pub(crate) use user::AuthPayload;
pub use task::{Task, TaskCreate, TaskStats, TaskUpdate};
pub use user::{AdminUser, LoginCredentials, RegisterData, User};

use serde::{Deserialize, Deserializer};

/// Deserialize a string that the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
