//! The `{success, data}` wrapper every backend endpoint answers with.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::SyncError;

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn from_value(value: Value) -> Result<Self, SyncError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode `data` on success; on failure surface the server's message.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, SyncError> {
        if !self.success {
            return Err(SyncError::Rejected(message_of(&self.data)));
        }
        Ok(serde_json::from_value(self.data)?)
    }

    /// The confirmation text of a successful write.
    pub fn into_message(self) -> Result<String, SyncError> {
        let message = message_of(&self.data);
        if !self.success {
            return Err(SyncError::Rejected(message));
        }
        Ok(message)
    }
}

/// `GET /logout` answers outside the usual envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutReply {
    pub success: bool,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Writes answer either with a bare string or with `{"message": ..}`.
fn message_of(data: &Value) -> String {
    match data {
        Value::String(message) => message.clone(),
        Value::Object(fields) => match fields.get("message") {
            Some(Value::String(message)) => message.clone(),
            _ => data.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_decodes_data() {
        let envelope = Envelope::from_value(json!({"success": true, "data": [1, 2, 3]})).unwrap();
        let data: Vec<u32> = envelope.into_data().unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_carries_server_message() {
        let envelope =
            Envelope::from_value(json!({"success": false, "data": "Ziyaretçi bulunamadı"})).unwrap();
        let result: Result<Vec<u32>, _> = envelope.into_data();
        assert_eq!(result, Err(SyncError::Rejected("Ziyaretçi bulunamadı".to_string())));
    }

    #[test]
    fn test_write_messages() {
        let plain = Envelope::from_value(json!({"success": true, "data": "OK"})).unwrap();
        assert_eq!(plain.into_message().unwrap(), "OK");

        let nested = Envelope::from_value(json!({
            "success": true,
            "data": {"id": 4, "message": "Ziyaretçi başarıyla kaydedildi"}
        }))
        .unwrap();
        assert_eq!(nested.into_message().unwrap(), "Ziyaretçi başarıyla kaydedildi");
    }

    #[test]
    fn test_malformed_body_is_transport_error() {
        let result = Envelope::from_value(json!({"data": "no flag"}));
        assert!(matches!(result, Err(SyncError::Transport(_))));
    }
}
