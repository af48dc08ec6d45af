//! DOM Event Helpers
//!
//! Turn raw web-sys events into the plain inputs the controllers expect.

use mailmock_core::inbox::{ids, ClickRegion, ClickTarget};
use mailmock_core::keys::KeyInput;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

const EDITABLE: &str = "input, textarea, select, [contenteditable]";

fn target_element(ev: &Event) -> Option<Element> {
    ev.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn inside(el: &Element, id: &str) -> bool {
    matches!(el.closest(&format!("#{}", id)), Ok(Some(_)))
}

pub fn key_input(ev: &KeyboardEvent) -> KeyInput {
    let target = target_element(ev);
    let target_id = target.as_ref().map(Element::id).filter(|id| !id.is_empty());
    let in_editable = target
        .as_ref()
        .map(|el| el.matches(EDITABLE).unwrap_or(false))
        .unwrap_or(false);
    KeyInput {
        key: ev.key(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        shift: ev.shift_key(),
        target_id,
        in_editable,
    }
}

/// Locate a document click relative to the compose modal and sidebar
pub fn click_region(ev: &Event) -> ClickRegion {
    let Some(el) = target_element(ev) else {
        return ClickRegion::default();
    };
    ClickRegion {
        in_compose: inside(&el, ids::COMPOSE_MODAL),
        on_compose_button: inside(&el, ids::COMPOSE_BUTTON),
        in_sidebar: inside(&el, ids::SIDEBAR),
        on_menu_button: inside(&el, ids::MENU_BUTTON),
    }
}

/// Which part of an email row a click landed on
pub fn click_target(ev: &Event) -> ClickTarget {
    let Some(el) = target_element(ev) else {
        return ClickTarget::Row;
    };
    let hit = |selector: &str| matches!(el.closest(selector), Ok(Some(_)));
    if hit(".email-checkbox") {
        ClickTarget::Checkbox
    } else if hit(".star-btn") {
        ClickTarget::Star
    } else if hit(".important-btn") {
        ClickTarget::Important
    } else {
        ClickTarget::Row
    }
}

/// Text of the chosen option of the `<select>` that fired `ev`
pub fn selected_label(ev: &Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .and_then(|select| {
            let index = u32::try_from(select.selected_index()).ok()?;
            select.item(index)
        })
        .and_then(|option| option.text_content())
        .unwrap_or_default()
}
