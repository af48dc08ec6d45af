//! Seed Data
//!
//! The inbox page lists a fixed set of emails bundled into the binary.

use mailmock_core::inbox::ListedItem;

const SEED_INBOX: &str = include_str!("../assets/inbox.json");

fn parse_inbox(raw: &str) -> Vec<ListedItem> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::error!("[SEED] inbox.json is invalid: {}", e);
        Vec::new()
    })
}

/// Emails shown on the inbox page
pub fn seed_inbox() -> Vec<ListedItem> {
    parse_inbox(SEED_INBOX)
}
