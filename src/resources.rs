use serde::{Deserialize, Serialize};

pub const RESOURCE_MIME_TYPE: &str = "application/json";
/// Zendesk search syntax for "updated within the last 24 hours".
pub const RECENT_TICKETS_QUERY: &str = "updated>24hours";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    RecentTickets,
    Agents,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::RecentTickets, ResourceKind::Agents];

    pub fn uri(&self) -> &'static str {
        match self {
            ResourceKind::RecentTickets => "zendesk://tickets/recent",
            ResourceKind::Agents => "zendesk://users/agents",
        }
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.uri() == uri)
    }

    pub fn descriptor(&self) -> Resource {
        let (name, description) = match self {
            ResourceKind::RecentTickets => (
                "Recent Tickets",
                "Tickets updated in the last 24 hours",
            ),
            ResourceKind::Agents => ("Agents", "Users with the agent role"),
        };
        Resource {
            uri: self.uri().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            mime_type: RESOURCE_MIME_TYPE.to_string(),
        }
    }
}

pub fn resource_descriptors() -> Vec<Resource> {
    ResourceKind::ALL.iter().map(ResourceKind::descriptor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uris_resolve() {
        assert_eq!(
            ResourceKind::from_uri("zendesk://tickets/recent"),
            Some(ResourceKind::RecentTickets)
        );
        assert_eq!(
            ResourceKind::from_uri("zendesk://users/agents"),
            Some(ResourceKind::Agents)
        );
        assert_eq!(ResourceKind::from_uri("zendesk://users/admins"), None);
    }

    #[test]
    fn descriptors_serialize_mime_type_in_camel_case() {
        let value = serde_json::to_value(resource_descriptors()).unwrap();
        assert_eq!(value[0]["mimeType"], "application/json");
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
