use crate::tools::helpers::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    EndUser,
    Agent,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::EndUser, UserRole::Agent, UserRole::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::EndUser => "end-user",
            UserRole::Agent => "agent",
            UserRole::Admin => "admin",
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListUsersInput {
    #[serde(default, deserialize_with = "lenient")]
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u32>,
}
