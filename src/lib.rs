// Module declarations
pub mod access;
pub mod auth;
pub mod cli;
pub mod cli_context;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod session;
pub mod storage;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use access::{Capabilities, Menu, RouteDecision};
pub use auth::{Authenticator, DemoDirectory};
pub use cli_context::{CliContext, CliContextBuilder};
pub use error::{LeadHubError, LeadHubResult};
pub use models::*;
pub use session::{LoginTicket, SessionGate, SessionState};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
