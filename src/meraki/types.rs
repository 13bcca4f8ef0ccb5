use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::DeviceName;

/// One entry of `GET /networks/{networkId}/clients`.
///
/// Only `description` is read. The key must be present; its value may be
/// null (no name reported) or a non-string, which is kept in its JSON text
/// form.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ClientRecord {
    #[serde(deserialize_with = "coerce_description")]
    pub(crate) description: Option<String>,
}

fn coerce_description<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl DeviceName for ClientRecord {
    fn device_name(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
