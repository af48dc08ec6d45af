//! UI Components
//!
//! The two pages and the pieces they share.

mod compose_modal;
mod email_row;
mod inbox_page;
mod sign_in_page;
mod toaster;

pub use compose_modal::ComposeModal;
pub use email_row::EmailRow;
pub use inbox_page::InboxPage;
pub use sign_in_page::SignInPage;
pub use toaster::Toaster;
