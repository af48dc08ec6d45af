//! Inbox View
//!
//! Selection, per-row flags, bulk actions, compose modal, search and
//! shortcuts over a fixed list of emails.

mod compose;
mod controller;
mod item;
mod nav;
mod selection;

pub use compose::{ComposeDraft, DraftField};
pub use controller::{ClickRegion, ClickTarget, InboxController, InboxShortcut};
pub use item::ListedItem;
pub use nav::{Folder, Panel};
pub use selection::{tri_state, SelectionSet, TriState};

/// Element ids the inbox page must render
pub mod ids {
    pub const SELECT_ALL: &str = "selectAll";
    pub const TOOLBAR: &str = "toolbar";
    pub const REFRESH_BUTTON: &str = "refreshButton";
    pub const SEARCH_INPUT: &str = "searchInput";
    pub const SIDEBAR: &str = "sidebar";
    pub const MENU_BUTTON: &str = "menuButton";
    pub const COMPOSE_BUTTON: &str = "composeButton";
    pub const COMPOSE_MODAL: &str = "composeModal";
    pub const COMPOSE_CLOSE: &str = "composeClose";
    pub const COMPOSE_TO: &str = "composeTo";
    pub const COMPOSE_SUBJECT: &str = "composeSubject";
    pub const COMPOSE_BODY: &str = "composeBody";

    pub fn row(id: u32) -> String {
        format!("email-{}", id)
    }

    pub fn checkbox(id: u32) -> String {
        format!("email-{}-check", id)
    }

    pub fn star(id: u32) -> String {
        format!("email-{}-star", id)
    }

    pub fn star_icon(id: u32) -> String {
        format!("email-{}-star-icon", id)
    }

    pub fn important(id: u32) -> String {
        format!("email-{}-important", id)
    }
}
