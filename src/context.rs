//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// A transient success notification shown by ToastHost
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
}

/// A blocking error notice shown by ErrorDialog until dismissed
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub title: String,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Pending success toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Pending success toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Current blocking error, if any - read
    pub error_notice: ReadSignal<Option<ErrorNotice>>,
    /// Current blocking error, if any - write
    set_error_notice: WriteSignal<Option<ErrorNotice>>,
    /// Monotonic toast id source
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        error_notice: (ReadSignal<Option<ErrorNotice>>, WriteSignal<Option<ErrorNotice>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            error_notice: error_notice.0,
            set_error_notice: error_notice.1,
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Queue a success toast
    pub fn notify_success(&self, title: &str) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, title: title.to_string() });
        });
    }

    /// Remove a toast once its timer ran out. Unknown ids are a no-op.
    pub fn dismiss_toast(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Show the blocking error dialog
    pub fn notify_error(&self, title: &str, message: &str) {
        self.set_error_notice.set(Some(ErrorNotice {
            title: title.to_string(),
            message: message.to_string(),
        }));
    }

    /// Dismiss the blocking error dialog
    pub fn clear_error(&self) {
        self.set_error_notice.set(None);
    }
}
