use super::dto::ListUsersInput;
use crate::tools::helpers::page_size;
use crate::zendesk::ApiRequest;

pub fn list_users(input: ListUsersInput) -> ApiRequest {
    let req = ApiRequest::get("/api/v2/users.json").with_query("per_page", page_size(input.limit));
    match input.role {
        Some(role) => req.with_query("role", role.as_str()),
        None => req,
    }
}
