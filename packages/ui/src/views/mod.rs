mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod require_auth;
pub use require_auth::RequireAuth;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod header;
pub use header::Header;

mod dashboard;
pub use dashboard::Dashboard;

mod task_list;
pub use task_list::TaskList;

mod task_item;
pub use task_item::TaskItem;

mod task_modal;
pub use task_modal::{TaskModal, TaskModalMode};

mod admin_panel;
pub use admin_panel::AdminPanel;
