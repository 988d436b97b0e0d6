mod login;
pub use login::LoginView;

mod shell;
pub use shell::DashboardShell;

mod pagination;
pub use pagination::Pagination;

mod users;
pub use users::UsersView;

mod receipts;
pub use receipts::ReceiptsView;
