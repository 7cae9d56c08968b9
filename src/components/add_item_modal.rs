//! Add Item Modal
//!
//! Dialog for creating a new inventory item: collects the item fields,
//! validates them, submits through the create_item command, and reports the
//! outcome via the context notifier.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;
use crate::form::{self, FormErrors, ItemDraft, ItemDraftStoreFields, ItemPayload};
use crate::components::form_text_field::FormTextField;

/// Add-item dialog
///
/// Visibility is controlled by the parent through `open`; `on_close` is run
/// whenever the dialog wants to close itself (cancel, backdrop click, or a
/// successful submit). `report_transport_errors` decides whether a failed
/// call (as opposed to a rejecting backend) reaches the error dialog or is
/// only logged to the console.
#[component]
pub fn AddItemModal(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(default = true)] report_transport_errors: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // One draft per dialog instance, reset on close and after a create
    let draft = Store::new(ItemDraft::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let (submitting, set_submitting) = signal(false);

    // Bumped on cancel; a submission resolving under an older generation was
    // abandoned and must not touch state.
    let session = StoredValue::new(0u32);

    let reset_form = move || {
        draft.set(ItemDraft::default());
        set_errors.set(FormErrors::default());
    };

    // Cancel path: discard input and any in-flight result
    let close = move || {
        session.update_value(|generation| *generation += 1);
        set_submitting.set(false);
        reset_form();
        on_close.run(());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        set_errors.set(FormErrors::default());
        let validated = match form::validate(&draft.get()) {
            Ok(validated) => validated,
            Err(field_errors) => {
                set_errors.set(field_errors);
                return;
            }
        };

        let payload = ItemPayload::from(validated);
        let generation = session.get_value();
        set_submitting.set(true);

        spawn_local(async move {
            let result = commands::create_item(&payload).await;
            if session.get_value() != generation {
                // Dialog was cancelled while the call was in flight
                return;
            }
            set_submitting.set(false);

            match result {
                Ok(response) if response.is_success() => {
                    reset_form();
                    on_close.run(());
                    ctx.reload();
                    ctx.notify_success("Item Added Successfully");
                }
                Ok(response) => {
                    let message = response.error_message();
                    web_sys::console::log_1(
                        &format!("[AddItem] backend rejected item: {}", message).into(),
                    );
                    ctx.notify_error("Oops...", &message);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[AddItem] create_item failed: {}", err).into(),
                    );
                    if report_transport_errors {
                        ctx.notify_error("Oops...", "Item adding failed");
                    }
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    class="modal add-item-modal"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <p class="modal-title">"Add New Item"</p>
                        <span class="modal-header-badge">"inventory_2"</span>
                    </div>
                    <hr class="modal-divider" />

                    <form class="add-item-form" on:submit=submit>
                        <div class="form-columns">
                            <div class="form-column">
                                <FormTextField
                                    label="Item Name"
                                    value=Signal::derive(move || draft.item_name().get())
                                    on_input=move |text: String| draft.item_name().set(text)
                                    error=Signal::derive(move || errors.get().item_name)
                                />
                                <FormTextField
                                    label="Item Quantity"
                                    value=Signal::derive(move || draft.item_quantity().get())
                                    on_input=move |text: String| draft.item_quantity().set(text)
                                    error=Signal::derive(move || errors.get().item_quantity)
                                />
                            </div>
                            <div class="form-column">
                                <FormTextField
                                    label="Item Type"
                                    value=Signal::derive(move || draft.item_type().get())
                                    on_input=move |text: String| draft.item_type().set(text)
                                    error=Signal::derive(move || errors.get().item_type)
                                />
                                <FormTextField
                                    label="Item Code"
                                    value=Signal::derive(move || draft.item_code().get())
                                    on_input=move |text: String| draft.item_code().set(text)
                                    error=Signal::derive(move || errors.get().item_code)
                                />
                            </div>
                        </div>

                        <label class="wash-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.wash().get()
                                on:change=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    draft.wash().set(input.checked());
                                }
                            />
                            "A Washable Item"
                        </label>

                        <div class="modal-actions">
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| close()
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="create-btn"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Creating..." } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
