//! Item Commands
//!
//! Frontend bindings for inventory item backend commands.

use wasm_bindgen::prelude::*;

use crate::form::ItemPayload;
use crate::models::{CreateItemResponse, InventoryItem};

use super::{invoke, rejection_text};

pub async fn list_items() -> Result<Vec<InventoryItem>, String> {
    let result = invoke("list_items", JsValue::NULL).await.map_err(rejection_text)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Submit a new item. Ok carries the backend's response envelope, which may
/// itself report failure; Err means the call never completed.
pub async fn create_item(payload: &ItemPayload) -> Result<CreateItemResponse, String> {
    let js_args = serde_wasm_bindgen::to_value(payload).map_err(|e| e.to_string())?;
    let result = invoke("create_item", js_args).await.map_err(rejection_text)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
