pub mod dto;
pub mod handler;
pub mod methods;

pub use dto::{McpError, McpRequest, McpResponse};
pub use methods::McpMethod;
