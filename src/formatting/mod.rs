pub mod session;
pub mod theme;
pub mod utils;

pub use session::{
    format_role, print_capabilities, print_decision, print_menu, print_routes, print_user,
};
pub use utils::{capability_summary, truncate};
