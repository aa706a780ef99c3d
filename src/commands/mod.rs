pub mod auth;
pub mod menu;
pub mod navigate;
pub mod whoami;

pub use auth::{handle_login, handle_logout};
pub use menu::handle_menu;
pub use navigate::{handle_open, handle_routes};
pub use whoami::handle_whoami;
