//! Email Row Component

use leptos::prelude::*;
use mailmock_core::inbox::{ids, InboxController, ListedItem};

use crate::events::click_target;

/// One line of the inbox list. Flags are painted by the controller after
/// mount, the markup only carries the initial state.
#[component]
pub fn EmailRow(item: ListedItem, inbox: StoredValue<InboxController, LocalStorage>) -> impl IntoView {
    let id = item.id;

    view! {
        <div
            id=ids::row(id)
            class="email-item"
            class:unread=item.unread
            on:click=move |ev| inbox.with_value(|i| i.open_item(id, click_target(&ev)))
        >
            <input
                id=ids::checkbox(id)
                type="checkbox"
                class="email-checkbox"
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    inbox.with_value(|i| {
                        i.set_item_selected(id, checked);
                    });
                }
            />
            <button
                id=ids::star(id)
                type="button"
                class="star-btn"
                class:starred=item.starred
                title="Star"
                on:click=move |ev| {
                    ev.stop_propagation();
                    inbox.with_value(|i| {
                        i.toggle_star(id);
                    })
                }
            >
                <span id=ids::star_icon(id) class="material-icons">
                    {if item.starred { "star" } else { "star_border" }}
                </span>
            </button>
            <button
                id=ids::important(id)
                type="button"
                class="important-btn"
                class:important=item.important
                title="Important"
                on:click=move |ev| {
                    ev.stop_propagation();
                    inbox.with_value(|i| {
                        i.toggle_important(id);
                    })
                }
            >
                <span class="material-icons">"label_important"</span>
            </button>
            <span class="sender">{item.sender}</span>
            <div class="email-content">
                <span class="subject-text">{item.subject}</span>
                <span class="preview">" - " {item.preview}</span>
            </div>
            <span class="email-time">{item.time}</span>
        </div>
    }
}
