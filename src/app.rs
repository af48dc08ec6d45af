//! Mailmock Frontend App
//!
//! Picks the page from the URL: `#login` shows the sign-in flow, anything
//! else the inbox.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{InboxPage, SignInPage, Toaster};
use crate::config::load_config;
use crate::models::seed_inbox;
use crate::store::ToastState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    SignIn,
    Inbox,
}

fn page_for(hash: &str) -> Page {
    if hash == "#login" {
        Page::SignIn
    } else {
        Page::Inbox
    }
}

fn current_page() -> Page {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    page_for(&hash)
}

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shared by whichever page is shown
    provide_context(Store::new(ToastState::default()));

    let config = load_config();
    let page = current_page();
    log::info!("[APP] showing {:?}", page);

    view! {
        {match page {
            Page::SignIn => view! { <SignInPage config=config.sign_in /> }.into_any(),
            Page::Inbox => view! { <InboxPage config=config.inbox items=seed_inbox() /> }.into_any(),
        }}
        <Toaster />
    }
}
