pub mod dto;
pub mod handler;

pub use dto::{ListUsersInput, UserRole};
pub use handler::list_users;
