//! WashStock Frontend App
//!
//! Root component: inventory list plus the add-item dialog and the
//! notification surfaces it reports into.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, ErrorNotice, Toast};
use crate::models::InventoryItem;
use crate::components::{AddItemModal, ErrorDialog, InventoryTable, ToastHost};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (show_add_modal, set_show_add_modal) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (error_notice, set_error_notice) = signal::<Option<ErrorNotice>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (toasts, set_toasts),
        (error_notice, set_error_notice),
    ));

    // Load items on mount and whenever something triggers a reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading inventory, trigger={}", trigger).into());
        spawn_local(async move {
            match commands::list_items().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    set_items.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] list_items failed: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="page-header">
                    <h1>"Inventory"</h1>
                    <button
                        class="add-item-btn"
                        on:click=move |_| set_show_add_modal.set(true)
                    >
                        "Add New Item"
                    </button>
                </header>

                <InventoryTable items=items />
            </main>

            <AddItemModal
                open=show_add_modal
                on_close=Callback::new(move |_| set_show_add_modal.set(false))
            />
            <ToastHost />
            <ErrorDialog />
        </div>
    }
}
