pub mod auth;
pub mod config;
pub mod error;
pub mod mcp;
pub mod resources;
pub mod server;
pub mod stdio;
pub mod tools;
pub mod zendesk;

pub use config::ZendeskConfig;
pub use error::{Result, ZendeskError};
pub use server::ZendeskServer;
