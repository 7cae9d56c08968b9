//! Backend Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod item;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // `catch`: a rejected promise becomes Err instead of an uncaught exception
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Best-effort text for a rejected invoke: plain strings pass through,
/// Error objects contribute their `message`.
fn rejection_text(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use item::*;
