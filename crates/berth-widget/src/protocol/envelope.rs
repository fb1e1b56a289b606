//! Message envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MSG_PREFIX;

/// Wire form of a message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Envelope {
    /// Envelope for a bare type, adding the namespace prefix
    pub fn new(kind: &str, payload: Option<Value>) -> Self {
        Self {
            kind: super::topic(kind),
            payload,
        }
    }

    /// Decode message data; anything without a string `type` yields `None`
    pub fn from_value(data: &Value) -> Option<Self> {
        let kind = data.get("type")?.as_str()?.to_string();
        let payload = data.get("payload").filter(|p| !p.is_null()).cloned();
        Some(Self { kind, payload })
    }

    /// Type with the namespace prefix removed, if it carries the prefix
    pub fn bare_kind(&self) -> Option<&str> {
        self.kind.strip_prefix(MSG_PREFIX)
    }

    /// JSON form for posting
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("type".to_string(), Value::String(self.kind.clone()));
        if let Some(payload) = &self.payload {
            map.insert("payload".to_string(), payload.clone());
        }
        Value::Object(map)
    }
}

/// A message event as delivered by the platform
#[derive(Clone, Debug, PartialEq)]
pub struct InboundMessage<W> {
    /// Origin of the sender
    pub origin: String,
    /// Window that posted the message
    pub source: Option<W>,
    /// Structured message data
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_string_type() {
        assert!(Envelope::from_value(&json!({"type": 1})).is_none());
        assert!(Envelope::from_value(&json!("ready")).is_none());
        assert!(Envelope::from_value(&json!(null)).is_none());
        let env = Envelope::from_value(&json!({"type": "x", "payload": 3})).unwrap();
        assert_eq!(env.kind, "x");
        assert_eq!(env.payload, Some(json!(3)));
    }

    #[test]
    fn test_bare_kind() {
        let env = Envelope::new("__ready", None);
        assert_eq!(env.bare_kind(), Some("__ready"));
        let foreign = Envelope::from_value(&json!({"type": "ready"})).unwrap();
        assert_eq!(foreign.bare_kind(), None);
    }

    #[test]
    fn test_to_value_omits_missing_payload() {
        let env = Envelope::new("ping", None);
        assert_eq!(env.to_value(), json!({"type": format!("{MSG_PREFIX}ping")}));
        let env = Envelope::new("ping", Some(json!({"a": 1})));
        assert_eq!(env.to_value()["payload"], json!({"a": 1}));
    }
}
