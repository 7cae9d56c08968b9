//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Inventory item as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: u32,
    pub item_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub quantity: u32,
    pub code: String,
    /// Washable flag, stored as "1"/"0" on the backend
    pub wash: String,
}

impl InventoryItem {
    pub fn is_washable(&self) -> bool {
        self.wash == "1"
    }
}

/// Response envelope of the create_item command
///
/// The backend omits `error` and the message fields on success, so everything
/// defaults. A truthy `error` marks failure; the human-readable reason lives
/// in `payload` or, on some routes, in `data.payload`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateItemResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub data: Option<ResponseData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub payload: Option<String>,
}

impl CreateItemResponse {
    pub fn is_success(&self) -> bool {
        !self.error
    }

    /// Most specific failure message the backend offered:
    /// top-level payload, then data.payload, then a generic fallback.
    pub fn error_message(&self) -> String {
        self.payload
            .clone()
            .or_else(|| self.data.as_ref().and_then(|d| d.payload.clone()))
            .unwrap_or_else(|| "Item adding failed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_has_no_error() {
        let resp: CreateItemResponse = serde_json::from_str(r#"{"data": {"payload": "ok"}}"#).unwrap();
        assert!(resp.is_success());
    }

    #[test]
    fn test_error_message_prefers_top_level_payload() {
        let resp = CreateItemResponse {
            error: true,
            payload: Some("Duplicate code".to_string()),
            data: Some(ResponseData { payload: Some("secondary".to_string()) }),
        };
        assert!(!resp.is_success());
        assert_eq!(resp.error_message(), "Duplicate code");
    }

    #[test]
    fn test_error_message_falls_back_to_data_payload() {
        let resp: CreateItemResponse =
            serde_json::from_str(r#"{"error": true, "data": {"payload": "Quantity too large"}}"#).unwrap();
        assert_eq!(resp.error_message(), "Quantity too large");
    }

    #[test]
    fn test_error_message_generic_fallback() {
        let resp: CreateItemResponse = serde_json::from_str(r#"{"error": true}"#).unwrap();
        assert_eq!(resp.error_message(), "Item adding failed");
    }
}
