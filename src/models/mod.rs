pub mod route;
pub mod user;

// Re-export commonly used types
pub use route::{NavItem, Route};
pub use user::{Role, User};
