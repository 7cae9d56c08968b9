//! UI Components
//!
//! Reusable Leptos components.

mod add_item_modal;
mod form_text_field;
mod inventory_table;
mod toast;

pub use add_item_modal::AddItemModal;
pub use form_text_field::FormTextField;
pub use inventory_table::InventoryTable;
pub use toast::{ErrorDialog, ToastHost};
