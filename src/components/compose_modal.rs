//! Compose Modal Component

use leptos::prelude::*;
use mailmock_core::inbox::{ids, DraftField, InboxController};

#[component]
pub fn ComposeModal(inbox: StoredValue<InboxController, LocalStorage>) -> impl IntoView {
    let edit = move |field: DraftField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            inbox.with_value(|i| i.edit_draft(field, &value));
        }
    };

    view! {
        <div id=ids::COMPOSE_MODAL class="compose-modal" role="dialog" aria-label="New Message">
            <div class="compose-header">
                <span>"New Message"</span>
                <button
                    id=ids::COMPOSE_CLOSE
                    type="button"
                    class="compose-close"
                    title="Close"
                    on:click=move |_| inbox.with_value(|i| i.close_compose())
                >
                    <span class="material-icons">"close"</span>
                </button>
            </div>
            <input
                id=ids::COMPOSE_TO
                type="email"
                class="to-field"
                placeholder="To"
                on:input=edit(DraftField::Recipient)
            />
            <input
                id=ids::COMPOSE_SUBJECT
                type="text"
                class="subject-field"
                placeholder="Subject"
                on:input=edit(DraftField::Subject)
            />
            <textarea id=ids::COMPOSE_BODY class="editor" on:input=edit(DraftField::Body)></textarea>
            <div class="compose-footer">
                <button
                    type="button"
                    class="send-btn"
                    on:click=move |_| {
                        if let Err(e) = inbox.with_value(|i| i.send()) {
                            log::debug!("[COMPOSE] {}", e);
                        }
                    }
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
