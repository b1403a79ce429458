//! Small form primitives shared by every view.
//!
//! Styling lives in `views.css` under the `btn`, `input` and `label`
//! class families.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Textarea};

mod label;
pub use label::Label;
