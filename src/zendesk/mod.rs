pub mod client;
pub mod outcome;
pub mod request;

pub use client::ZendeskClient;
pub use outcome::Outcome;
pub use request::{ApiRequest, HttpMethod};
