//! Inventory Table Component
//!
//! Read-only list of inventory items, refreshed through the reload trigger.

use leptos::prelude::*;

use crate::models::InventoryItem;

/// Inventory list table
#[component]
pub fn InventoryTable(items: ReadSignal<Vec<InventoryItem>>) -> impl IntoView {
    view! {
        <table class="inventory-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Type"</th>
                    <th>"Quantity"</th>
                    <th>"Code"</th>
                    <th>"Washable"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| {
                        let washable = if item.is_washable() { "Yes" } else { "No" };
                        view! {
                            <tr>
                                <td>{item.item_name.clone()}</td>
                                <td>{item.item_type.clone()}</td>
                                <td>{item.quantity}</td>
                                <td>{item.code.clone()}</td>
                                <td>{washable}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <p class="item-count">{move || format!("{} items", items.get().len())}</p>
    }
}
