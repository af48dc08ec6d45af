//! Page Configuration
//!
//! Optional JSON overrides embedded in the page as
//! `<script id="mailmock-config" type="application/json">`.

use mailmock_core::MockConfig;

pub const CONFIG_ELEMENT_ID: &str = "mailmock-config";

/// Parse the embedded JSON. Empty input means "no overrides"; broken input
/// is logged and ignored.
pub fn parse_config(raw: &str) -> MockConfig {
    if raw.trim().is_empty() {
        return MockConfig::default();
    }
    match serde_json::from_str(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[CONFIG] ignoring malformed {}: {}", CONFIG_ELEMENT_ID, e);
            MockConfig::default()
        }
    }
}

/// Read the config element of the current document
pub fn load_config() -> MockConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    parse_config(&raw)
}
