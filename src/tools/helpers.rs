use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_LIMIT: u32 = 25;

/// Optional argument that is dropped, not rejected, when it has the wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

pub(crate) fn page_size(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_LIMIT)
}

pub(crate) fn enum_values<T: Serialize>(variants: &[T]) -> Vec<Value> {
    variants
        .iter()
        .filter_map(|v| serde_json::to_value(v).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient")]
        limit: Option<u32>,
    }

    #[test]
    fn wrong_shape_becomes_absent() {
        let probe: Probe = serde_json::from_value(serde_json::json!({"limit": "ten"})).unwrap();
        assert_eq!(probe.limit, None);
        let probe: Probe = serde_json::from_value(serde_json::json!({"limit": -3})).unwrap();
        assert_eq!(probe.limit, None);
        let probe: Probe = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(probe.limit, None);
        let probe: Probe = serde_json::from_value(serde_json::json!({"limit": 5})).unwrap();
        assert_eq!(probe.limit, Some(5));
    }

    #[test]
    fn page_size_defaults_only_when_absent() {
        assert_eq!(page_size(None), 25);
        assert_eq!(page_size(Some(0)), 0);
        assert_eq!(page_size(Some(100)), 100);
    }
}
