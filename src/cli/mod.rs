mod client;
mod commands;
mod config;
mod store;

pub use client::HttpAuthClient;
pub use commands::{run_login, run_status, ClientArgs, Commands, TerminalNavigator};
pub use config::{CliConfig, LoggingSection, SessionSection};
pub use store::FileSessionStore;
