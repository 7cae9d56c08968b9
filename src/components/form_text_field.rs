//! Form Text Field Component
//!
//! Labeled text input with an inline validation message.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Outlined text field with label and error line
///
/// # Arguments
/// * `label` - Field caption shown above the input
/// * `value` - Current text, usually derived from a store field
/// * `on_input` - Callback receiving the raw input value on every keystroke
/// * `error` - Validation message; `Some` switches the field into error styling
#[component]
pub fn FormTextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-field" class=("has-error", move || error.get().is_some())>
            <label class="form-label">{label}</label>
            <input
                type="text"
                class="form-input"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    on_input.run(input.value());
                }
            />
            {move || error.get().map(|message| view! {
                <span class="field-error">{message}</span>
            })}
        </div>
    }
}
