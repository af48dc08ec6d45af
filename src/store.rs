//! Toast Store
//!
//! Uses Leptos reactive_stores so the toaster only re-renders the list.

use leptos::prelude::*;
use mailmock_core::{NotificationEvent, Severity};
use reactive_stores::Store;

/// One toast on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Next toast ID
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type ToastStore = Store<ToastState>;

/// Get the toast store from context
pub fn use_toast_store() -> ToastStore {
    expect_context::<ToastStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a toast for `event` and return its ID
pub fn store_push_toast(store: &ToastStore, event: &NotificationEvent) -> u32 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        let id = *next;
        *next = id.wrapping_add(1);
        id
    };
    store.toasts().write().push(Toast {
        id,
        message: event.message.clone(),
        severity: event.severity,
    });
    id
}

/// Remove a toast by ID
pub fn store_remove_toast(store: &ToastStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
