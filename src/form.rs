//! Add-Item Form Logic
//!
//! Pure state and transforms behind the add-item dialog: the draft the user
//! edits, required-field validation, and the mapping to the create_item
//! payload. Nothing here touches the DOM, so it all runs under plain tests.

use reactive_stores::Store;
use serde::Serialize;

/// What the user has typed so far. One instance per open dialog.
///
/// Quantity stays a string until validation; the input field hands us raw
/// text and partial entries like "" or "12x" must round-trip unchanged.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ItemDraft {
    pub item_name: String,
    pub item_type: String,
    pub item_quantity: String,
    pub item_code: String,
    pub wash: bool,
}

/// Per-field validation messages, rendered inline under each input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub item_name: Option<String>,
    pub item_type: Option<String>,
    pub item_quantity: Option<String>,
    pub item_code: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none()
            && self.item_type.is_none()
            && self.item_quantity.is_none()
            && self.item_code.is_none()
    }
}

/// A draft that passed validation: all text fields non-empty, quantity parsed
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedItem {
    pub item_name: String,
    pub item_type: String,
    pub quantity: u32,
    pub item_code: String,
    pub wash: bool,
}

/// Validate a draft, collecting one message per failing field.
///
/// `wash` is never required. Quantity must also parse as a whole number so
/// that payload construction stays infallible.
pub fn validate(draft: &ItemDraft) -> Result<ValidatedItem, FormErrors> {
    let mut errors = FormErrors::default();

    if draft.item_name.is_empty() {
        errors.item_name = Some("Item name is required".to_string());
    }
    if draft.item_type.is_empty() {
        errors.item_type = Some("Item type is required".to_string());
    }
    if draft.item_code.is_empty() {
        errors.item_code = Some("Item code is required".to_string());
    }

    // Placeholder 0 never escapes: a quantity error keeps us on the Err path.
    let quantity = if draft.item_quantity.is_empty() {
        errors.item_quantity = Some("Item quantity is required".to_string());
        0
    } else {
        match draft.item_quantity.parse::<u32>() {
            Ok(q) => q,
            Err(_) => {
                errors.item_quantity = Some("Item quantity must be a whole number".to_string());
                0
            }
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedItem {
        item_name: draft.item_name.clone(),
        item_type: draft.item_type.clone(),
        quantity,
        item_code: draft.item_code.clone(),
        wash: draft.wash,
    })
}

/// Body of the create_item request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub quantity: u32,
    pub code: String,
    /// Washable flag as the backend stores it: "1" or "0"
    pub wash: &'static str,
}

impl From<ValidatedItem> for ItemPayload {
    fn from(item: ValidatedItem) -> Self {
        Self {
            item_name: item.item_name,
            item_type: item.item_type,
            quantity: item.quantity,
            code: item.item_code,
            wash: if item.wash { "1" } else { "0" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, item_type: &str, quantity: &str, code: &str, wash: bool) -> ItemDraft {
        ItemDraft {
            item_name: name.to_string(),
            item_type: item_type.to_string(),
            item_quantity: quantity.to_string(),
            item_code: code.to_string(),
            wash,
        }
    }

    #[test]
    fn test_validate_empty_draft_flags_every_required_field() {
        let errors = validate(&ItemDraft::default()).unwrap_err();

        assert_eq!(errors.item_name.as_deref(), Some("Item name is required"));
        assert_eq!(errors.item_type.as_deref(), Some("Item type is required"));
        assert_eq!(errors.item_quantity.as_deref(), Some("Item quantity is required"));
        assert_eq!(errors.item_code.as_deref(), Some("Item code is required"));
    }

    #[test]
    fn test_validate_flags_only_missing_fields() {
        let errors = validate(&draft("Shirt", "Apparel", "5", "", true)).unwrap_err();

        assert!(errors.item_name.is_none());
        assert!(errors.item_type.is_none());
        assert!(errors.item_quantity.is_none());
        assert_eq!(errors.item_code.as_deref(), Some("Item code is required"));
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let validated = validate(&draft("Shirt", "Apparel", "5", "SH01", true)).unwrap();

        assert_eq!(validated.item_name, "Shirt");
        assert_eq!(validated.quantity, 5);
        assert!(validated.wash);
    }

    #[test]
    fn test_validate_rejects_non_numeric_quantity() {
        for bad in ["five", "5x", "-3", "1.5"] {
            let errors = validate(&draft("Shirt", "Apparel", bad, "SH01", false)).unwrap_err();
            assert_eq!(
                errors.item_quantity.as_deref(),
                Some("Item quantity must be a whole number"),
                "quantity {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_payload_mapping() {
        let validated = validate(&draft("Shirt", "Apparel", "5", "SH01", true)).unwrap();
        let payload = ItemPayload::from(validated);

        assert_eq!(
            payload,
            ItemPayload {
                item_name: "Shirt".to_string(),
                item_type: "Apparel".to_string(),
                quantity: 5,
                code: "SH01".to_string(),
                wash: "1",
            }
        );
    }

    #[test]
    fn test_payload_wash_flag_off() {
        let validated = validate(&draft("Towel", "Linen", "12", "TW03", false)).unwrap();
        assert_eq!(ItemPayload::from(validated).wash, "0");
    }

    #[test]
    fn test_payload_serializes_backend_field_names() {
        let payload = ItemPayload {
            item_name: "Shirt".to_string(),
            item_type: "Apparel".to_string(),
            quantity: 5,
            code: "SH01".to_string(),
            wash: "1",
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "itemName": "Shirt",
                "type": "Apparel",
                "quantity": 5,
                "code": "SH01",
                "wash": "1",
            })
        );
    }
}
