//! Inbox Page Component
//!
//! Header, sidebar, toolbar, list and side panel around one
//! [`InboxController`].

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mailmock_core::inbox::{ids, Folder, InboxController, ListedItem, Panel};
use mailmock_core::InboxConfig;

use super::{ComposeModal, EmailRow};
use crate::events::{click_region, key_input};
use crate::host::browser_host;
use crate::store::use_toast_store;

fn window_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

#[component]
pub fn InboxPage(config: InboxConfig, items: Vec<ListedItem>) -> impl IntoView {
    let rows = items.clone();
    let inbox = StoredValue::new_local(InboxController::new(browser_host(use_toast_store()), config, items));

    Effect::new(move |_| {
        let i = inbox.get_value();
        i.mount();
        if let Some(width) = window_width() {
            i.on_resize(width);
        }
    });

    let keys = window_event_listener(ev::keydown, move |ev| {
        let Some(i) = inbox.try_get_value() else {
            return;
        };
        if let Some(shortcut) = i.shortcut_for(&key_input(&ev)) {
            if shortcut.prevents_default() {
                ev.prevent_default();
            }
            i.run_shortcut(shortcut);
        }
    });
    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(width) = window_width() {
            inbox.try_with_value(|i| i.on_resize(width));
        }
    });
    let clicks = window_event_listener(ev::click, move |ev| {
        let region = click_region(&ev);
        inbox.try_with_value(|i| i.on_document_click(region));
    });

    on_cleanup(move || {
        keys.remove();
        resize.remove();
        clicks.remove();
        inbox.try_with_value(|i| i.teardown());
    });

    let delete = move |_| {
        let i = inbox.get_value();
        spawn_local(async move {
            if let Err(e) = i.delete_selected().await {
                log::debug!("[INBOX] delete: {}", e);
            }
        });
    };
    let refresh = move |_| {
        let i = inbox.get_value();
        spawn_local(async move { i.refresh().await });
    };

    view! {
        <div class="inbox-layout">
            <header class="inbox-header">
                <button
                    id=ids::MENU_BUTTON
                    type="button"
                    class="menu-btn"
                    title="Main menu"
                    on:click=move |_| inbox.with_value(|i| i.toggle_sidebar())
                >
                    <span class="material-icons">"menu"</span>
                </button>
                <div class="logo">"Mailmock"</div>
                <div class="search-box">
                    <span class="material-icons">"search"</span>
                    <input
                        id=ids::SEARCH_INPUT
                        type="text"
                        placeholder="Search mail"
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            inbox.with_value(|i| {
                                i.search(&query);
                            });
                        }
                        on:keydown=move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                let query = event_target_value(&ev);
                                inbox.with_value(|i| i.submit_search(&query));
                            }
                        }
                    />
                </div>
            </header>

            <aside id=ids::SIDEBAR class="sidebar">
                <button
                    id=ids::COMPOSE_BUTTON
                    type="button"
                    class="compose-btn"
                    on:click=move |_| inbox.with_value(|i| i.open_compose())
                >
                    <span class="material-icons">"edit"</span>
                    "Compose"
                </button>
                <nav>
                    {Folder::ALL
                        .into_iter()
                        .map(|folder| {
                            view! {
                                <div
                                    id=folder.element_id()
                                    class="nav-item"
                                    on:click=move |_| inbox.with_value(|i| i.switch_folder(folder))
                                >
                                    <span class="material-icons">{folder.icon()}</span>
                                    <span class="nav-text">{folder.label()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            <main class="main-content">
                <div id=ids::TOOLBAR class="toolbar">
                    <input
                        id=ids::SELECT_ALL
                        type="checkbox"
                        class="select-all"
                        title="Select"
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            inbox.with_value(|i| {
                                i.toggle_select_all(checked);
                            });
                        }
                    />
                    <button
                        id=ids::REFRESH_BUTTON
                        type="button"
                        title="Refresh"
                        on:click=refresh
                    >
                        <span class="material-icons">"refresh"</span>
                    </button>
                    <div class="selection-actions">
                        <button
                            type="button"
                            title="Archive"
                            on:click=move |_| {
                                if let Err(e) = inbox.with_value(|i| i.archive_selected()) {
                                    log::debug!("[INBOX] archive: {}", e);
                                }
                            }
                        >
                            <span class="material-icons">"archive"</span>
                        </button>
                        <button type="button" title="Delete" on:click=delete>
                            <span class="material-icons">"delete"</span>
                        </button>
                        <button
                            type="button"
                            title="Mark as read"
                            on:click=move |_| {
                                if let Err(e) = inbox.with_value(|i| i.mark_read_from_toolbar()) {
                                    log::debug!("[INBOX] mark read: {}", e);
                                }
                            }
                        >
                            <span class="material-icons">"drafts"</span>
                        </button>
                    </div>
                </div>

                <div class="email-list">
                    {rows
                        .into_iter()
                        .map(|item| view! { <EmailRow item=item inbox=inbox /> })
                        .collect_view()}
                </div>
            </main>

            <aside class="side-panel">
                {Panel::ALL
                    .into_iter()
                    .map(|panel| {
                        view! {
                            <button
                                id=panel.element_id()
                                type="button"
                                class="panel-icon"
                                on:click=move |_| inbox.with_value(|i| i.open_panel(panel))
                            >
                                <span class="material-icons">{panel.icon()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </aside>

            <ComposeModal inbox=inbox />
        </div>
    }
}
