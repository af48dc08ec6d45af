//! Toaster Component
//!
//! Renders the toast stack from the [`ToastStore`](crate::store::ToastStore).

use leptos::prelude::*;

use crate::store::{use_toast_store, ToastStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_toast_store();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=format!("notification {}", toast.severity.class())>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
