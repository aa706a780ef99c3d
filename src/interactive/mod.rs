pub mod app;
pub mod event;
pub mod handlers;
pub mod layout;
pub mod ui;

pub use app::NavigatorApp;
pub use handlers::run_navigator;
