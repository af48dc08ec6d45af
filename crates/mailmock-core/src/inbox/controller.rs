//! Inbox View Controller
//!
//! Owns the listed emails, the compose draft and the sidebar state, and
//! mirrors every change onto the page through the injected [`Host`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::InboxConfig;
use crate::error::{ActionResult, PreconditionNotMet};
use crate::host::Host;
use crate::keys::KeyInput;
use crate::notify::{NotificationEvent, Severity};

use super::compose::{ComposeDraft, DraftField};
use super::ids;
use super::item::ListedItem;
use super::nav::{Folder, Panel};
use super::selection::{SelectionSet, TriState};

/// Which part of a row was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Row,
    Checkbox,
    Star,
    Important,
}

/// Where a document-level click landed, relative to the dismissable
/// overlays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub in_compose: bool,
    pub on_compose_button: bool,
    pub in_sidebar: bool,
    pub on_menu_button: bool,
}

/// Keyboard shortcuts of the inbox page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxShortcut {
    Compose,
    ToggleStars,
    MarkRead,
    MarkUnread,
    CloseCompose,
    /// Ctrl/Cmd combos kept away from the browser but not bound yet
    Reserved,
}

impl InboxShortcut {
    pub fn prevents_default(self) -> bool {
        !matches!(self, InboxShortcut::CloseCompose)
    }
}

fn resolve_shortcut(key: &KeyInput, compose_open: bool) -> Option<InboxShortcut> {
    if key.command() {
        return matches!(key.key.as_str(), "k" | "j" | "r" | "a" | "f").then_some(InboxShortcut::Reserved);
    }
    if key.in_editable {
        return None;
    }
    match key.key.as_str() {
        "c" => Some(InboxShortcut::Compose),
        "s" => Some(InboxShortcut::ToggleStars),
        "r" => Some(InboxShortcut::MarkRead),
        "u" => Some(InboxShortcut::MarkUnread),
        "Escape" if compose_open => Some(InboxShortcut::CloseCompose),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct InboxState {
    items: Vec<ListedItem>,
    compose: Option<ComposeDraft>,
    folder: Folder,
    panel: Option<Panel>,
    sidebar_open: bool,
    mobile: bool,
    query: String,
}

#[derive(Clone)]
pub struct InboxController {
    host: Host,
    config: Rc<InboxConfig>,
    state: Rc<RefCell<InboxState>>,
    alive: Rc<Cell<bool>>,
}

impl InboxController {
    pub fn new(host: Host, config: InboxConfig, items: Vec<ListedItem>) -> Self {
        Self {
            host,
            config: Rc::new(config),
            state: Rc::new(RefCell::new(InboxState {
                items,
                ..Default::default()
            })),
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Render the initial state onto a freshly created page
    pub fn mount(&self) {
        let (items, folder) = {
            let state = self.state.borrow();
            (state.items.clone(), state.folder)
        };
        for item in &items {
            self.render_item(item);
        }
        self.render_folder(folder);
        self.host.view.set_class(ids::COMPOSE_MODAL, "show", false);
        self.on_item_selection_changed();
        debug!("inbox mounted with {} items", items.len());
    }

    pub fn teardown(&self) {
        self.alive.set(false);
    }

    pub fn items(&self) -> Vec<ListedItem> {
        self.state.borrow().items.clone()
    }

    pub fn item(&self, id: u32) -> Option<ListedItem> {
        self.state.borrow().items.iter().find(|item| item.id == id).cloned()
    }

    pub fn selection(&self) -> SelectionSet {
        SelectionSet::from_items(&self.state.borrow().items)
    }

    pub fn compose(&self) -> Option<ComposeDraft> {
        self.state.borrow().compose.clone()
    }

    pub fn is_compose_open(&self) -> bool {
        self.state.borrow().compose.is_some()
    }

    pub fn folder(&self) -> Folder {
        self.state.borrow().folder
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.state.borrow().sidebar_open
    }

    pub fn is_mobile(&self) -> bool {
        self.state.borrow().mobile
    }

    pub fn panel(&self) -> Option<Panel> {
        self.state.borrow().panel
    }

    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    // ========================
    // Rendering
    // ========================

    fn render_item(&self, item: &ListedItem) {
        let view = &self.host.view;
        let row = ids::row(item.id);
        view.set_visible(&row, item.is_visible());
        view.set_class(&row, "unread", item.unread);
        view.set_class(&row, "selected", item.selected);
        view.set_checked(&ids::checkbox(item.id), item.selected);
        view.set_class(&ids::star(item.id), "starred", item.starred);
        view.set_text(&ids::star_icon(item.id), if item.starred { "star" } else { "star_border" });
        view.set_class(&ids::important(item.id), "important", item.important);
    }

    /// Apply `f` to the items matching `filter`, re-render them and return
    /// their ids
    fn update_items(&self, filter: impl Fn(&ListedItem) -> bool, f: impl Fn(&mut ListedItem)) -> Vec<u32> {
        let changed: Vec<ListedItem> = {
            let mut state = self.state.borrow_mut();
            state
                .items
                .iter_mut()
                .filter(|item| filter(&**item))
                .map(|item| {
                    f(item);
                    item.clone()
                })
                .collect()
        };
        for item in &changed {
            self.render_item(item);
        }
        changed.iter().map(|item| item.id).collect()
    }

    /// Apply `f` to one item. Unknown ids are a caller bug: logged and
    /// ignored.
    fn update_item<R>(&self, id: u32, f: impl FnOnce(&mut ListedItem) -> R) -> Option<R> {
        let updated = {
            let mut state = self.state.borrow_mut();
            state.items.iter_mut().find(|item| item.id == id).map(|item| {
                let out = f(item);
                (out, item.clone())
            })
        };
        match updated {
            Some((out, item)) => {
                self.render_item(&item);
                Some(out)
            }
            None => {
                warn!("inbox: no listed item with id {}", id);
                None
            }
        }
    }

    fn render_folder(&self, active: Folder) {
        for folder in Folder::ALL {
            self.host.view.set_class(&folder.element_id(), "active", folder == active);
        }
    }

    pub fn dispatch_notification(&self, message: &str, severity: Severity) {
        if !self.alive.get() {
            warn!("dropping notification after teardown: {}", message);
            return;
        }
        self.host
            .notifier
            .show(NotificationEvent::new(message, severity, self.config.notice_duration()));
    }

    fn notify(&self, message: &str) {
        self.dispatch_notification(message, Severity::Info);
    }

    // ========================
    // Selection
    // ========================

    /// Recompute the selection from the row flags and refresh the
    /// select-all checkbox and toolbar
    pub fn on_item_selection_changed(&self) -> SelectionSet {
        let selection = self.selection();
        let tri = selection.tri_state();
        let view = &self.host.view;
        view.set_checked(ids::SELECT_ALL, tri == TriState::All);
        view.set_indeterminate(ids::SELECT_ALL, tri == TriState::Some);
        view.set_class(ids::TOOLBAR, "has-selection", !selection.is_empty());
        selection
    }

    /// Check or uncheck every visible row
    pub fn toggle_select_all(&self, checked: bool) -> SelectionSet {
        self.update_items(ListedItem::is_visible, |item| item.selected = checked);
        self.on_item_selection_changed()
    }

    /// A row checkbox changed
    pub fn set_item_selected(&self, id: u32, checked: bool) -> SelectionSet {
        self.update_item(id, |item| item.selected = checked);
        self.on_item_selection_changed()
    }

    fn selected_ids(&self) -> Vec<u32> {
        self.selection().ids().collect()
    }

    // ========================
    // Row actions
    // ========================

    /// Returns the new starred flag
    pub fn toggle_star(&self, id: u32) -> Option<bool> {
        self.update_item(id, |item| {
            item.starred = !item.starred;
            item.starred
        })
    }

    /// Returns the new important flag
    pub fn toggle_important(&self, id: u32) -> Option<bool> {
        self.update_item(id, |item| {
            item.important = !item.important;
            item.important
        })
    }

    /// Row click. Clicks on the checkbox, star or important marker belong to
    /// those controls and do not open the email.
    pub fn open_item(&self, id: u32, target: ClickTarget) {
        if target != ClickTarget::Row {
            return;
        }
        if self.update_item(id, |item| item.unread = false).is_some() {
            self.notify("Opening email...");
        }
    }

    // ========================
    // Bulk actions
    // ========================

    /// Hide the selected rows. Returns how many were archived.
    pub fn archive_selected(&self) -> ActionResult<usize> {
        let archived = self.update_items(
            |item| item.selected && item.is_visible(),
            |item| {
                item.archived = true;
                item.selected = false;
            },
        );
        if archived.is_empty() {
            return Err(PreconditionNotMet::EmptySelection.into());
        }
        info!("archived {:?}", archived);
        self.notify(&format!("Archived {} message(s)", archived.len()));
        self.on_item_selection_changed();
        Ok(archived.len())
    }

    /// Remove the selected rows for good once the user confirms. Returns how
    /// many were deleted.
    pub async fn delete_selected(&self) -> ActionResult<usize> {
        let selected = self.selected_ids();
        if selected.is_empty() {
            return Err(PreconditionNotMet::EmptySelection.into());
        }

        let prompt = format!("Delete {} message(s)?", selected.len());
        let confirmed = self.host.dialogs.confirm(&prompt).await;
        if !self.alive.get() {
            return Err(PreconditionNotMet::TornDown.into());
        }
        if !confirmed {
            debug!("delete of {:?} declined", selected);
            return Err(PreconditionNotMet::Declined.into());
        }

        let removed: Vec<u32> = {
            let mut state = self.state.borrow_mut();
            let before: Vec<u32> = state.items.iter().map(|item| item.id).collect();
            state.items.retain(|item| !selected.contains(&item.id));
            before.into_iter().filter(|id| selected.contains(id)).collect()
        };
        for id in &removed {
            self.host.view.remove(&ids::row(*id));
        }
        info!("deleted {:?}", removed);
        self.notify(&format!("Deleted {} message(s)", removed.len()));
        self.on_item_selection_changed();
        Ok(removed.len())
    }

    /// Set the unread flag of every selected row to `!read`. The selection
    /// is kept. Returns how many rows changed.
    pub fn mark_selected(&self, read: bool) -> usize {
        let selected = self.selection();
        let marked = self.update_items(|item| selected.contains(item.id), |item| item.unread = !read);
        self.notify(if read { "Marked as read" } else { "Marked as unread" });
        marked.len()
    }

    /// Toolbar "Mark as read": needs a selection and clears it afterwards
    pub fn mark_read_from_toolbar(&self) -> ActionResult<usize> {
        let selected = self.selection();
        if selected.is_empty() {
            return Err(PreconditionNotMet::EmptySelection.into());
        }
        let marked = self.mark_selected(true);
        self.update_items(|item| selected.contains(item.id), |item| item.selected = false);
        self.on_item_selection_changed();
        Ok(marked)
    }

    /// Flip the star of every selected row
    pub fn toggle_selected_stars(&self) -> usize {
        let selected = self.selected_ids();
        for id in &selected {
            self.toggle_star(*id);
        }
        selected.len()
    }

    // ========================
    // Compose
    // ========================

    /// Open the compose modal. An already open draft is kept.
    pub fn open_compose(&self) {
        self.state.borrow_mut().compose.get_or_insert_with(ComposeDraft::default);
        self.host.view.set_class(ids::COMPOSE_MODAL, "show", true);
        self.host.view.focus(ids::COMPOSE_TO);
    }

    /// Close the modal and wipe every draft field, whatever it contained
    pub fn close_compose(&self) {
        self.state.borrow_mut().compose = None;
        let view = &self.host.view;
        view.set_class(ids::COMPOSE_MODAL, "show", false);
        for field in DraftField::ALL {
            view.set_value(field.input_id(), "");
        }
    }

    /// Mirror a compose field edit into the draft
    pub fn edit_draft(&self, field: DraftField, value: &str) {
        match self.state.borrow_mut().compose.as_mut() {
            Some(draft) => draft.set(field, value),
            None => warn!("draft edit with compose closed"),
        }
    }

    /// "Send" the draft: nothing leaves the page, the modal just closes
    pub fn send(&self) -> ActionResult {
        let Some(draft) = self.compose() else {
            return Err(PreconditionNotMet::ComposeClosed.into());
        };
        if draft.recipient.is_empty() {
            let err = PreconditionNotMet::MissingRecipient;
            self.host.dialogs.alert(&err.to_string());
            return Err(err.into());
        }
        info!("simulated send to {} ({:?})", draft.recipient, draft.subject);
        self.notify("Message sent!");
        self.close_compose();
        Ok(())
    }

    // ========================
    // Search
    // ========================

    /// Hide rows not matching `query`. Hidden rows drop out of the
    /// selection. Returns the number of visible rows.
    pub fn search(&self, query: &str) -> usize {
        let needle = query.to_lowercase();
        self.state.borrow_mut().query = query.to_string();
        self.update_items(
            |_| true,
            |item| {
                item.filtered_out = !item.matches(&needle);
                if item.filtered_out {
                    item.selected = false;
                }
            },
        );
        self.on_item_selection_changed();
        self.state.borrow().items.iter().filter(|item| item.is_visible()).count()
    }

    /// Enter in the search box
    pub fn submit_search(&self, query: &str) {
        self.notify(&format!("Searching for: {}", query));
    }

    // ========================
    // Navigation & chrome
    // ========================

    pub fn switch_folder(&self, folder: Folder) {
        self.state.borrow_mut().folder = folder;
        self.render_folder(folder);
        self.notify(&format!("Switched to {}", folder.label()));
    }

    pub fn open_panel(&self, panel: Panel) {
        self.state.borrow_mut().panel = Some(panel);
        for other in Panel::ALL {
            self.host.view.set_class(&other.element_id(), "active", other == panel);
        }
        self.notify(panel.message());
    }

    pub fn toggle_sidebar(&self) {
        let open = {
            let mut state = self.state.borrow_mut();
            state.sidebar_open = !state.sidebar_open;
            state.sidebar_open
        };
        self.host.view.set_class(ids::SIDEBAR, "mobile-open", open);
    }

    /// Window resized to `width` CSS pixels
    pub fn on_resize(&self, width: u32) {
        let mobile = width <= self.config.mobile_breakpoint_px;
        self.state.borrow_mut().mobile = mobile;
        self.host.view.set_class(ids::SIDEBAR, "mobile", mobile);
    }

    /// Document click: dismiss the compose modal and the mobile sidebar when
    /// the click landed outside of them (and their toggles)
    pub fn on_document_click(&self, region: ClickRegion) {
        if self.is_compose_open() && !region.in_compose && !region.on_compose_button {
            self.close_compose();
        }
        if self.is_sidebar_open() && !region.in_sidebar && !region.on_menu_button {
            self.state.borrow_mut().sidebar_open = false;
            self.host.view.set_class(ids::SIDEBAR, "mobile-open", false);
        }
    }

    /// Toolbar refresh: purely cosmetic spin
    pub async fn refresh(&self) {
        self.notify("Refreshing...");
        let view = &self.host.view;
        view.set_style(ids::REFRESH_BUTTON, "transition", "transform 0.5s ease");
        view.set_style(ids::REFRESH_BUTTON, "transform", "rotate(360deg)");
        self.host.timer.sleep(self.config.refresh_spin()).await;
        if self.alive.get() {
            view.set_style(ids::REFRESH_BUTTON, "transform", "rotate(0deg)");
        }
    }

    // ========================
    // Keyboard
    // ========================

    pub fn shortcut_for(&self, key: &KeyInput) -> Option<InboxShortcut> {
        resolve_shortcut(key, self.is_compose_open())
    }

    pub fn run_shortcut(&self, shortcut: InboxShortcut) {
        match shortcut {
            InboxShortcut::Compose => self.open_compose(),
            InboxShortcut::ToggleStars => {
                self.toggle_selected_stars();
            }
            InboxShortcut::MarkRead => {
                self.mark_selected(true);
            }
            InboxShortcut::MarkUnread => {
                self.mark_selected(false);
            }
            InboxShortcut::CloseCompose => self.close_compose(),
            InboxShortcut::Reserved => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActionError;
    use crate::host::ViewTree;
    use crate::testing::Fixture;
    use std::time::Duration;

    fn sample_items() -> Vec<ListedItem> {
        vec![
            ListedItem::new(1, "Alice Smith", "Quarterly report", "Numbers attached").unread(),
            ListedItem::new(2, "Bob", "Lunch?", "Are you free, alice?"),
            ListedItem::new(3, "Carol", "Weekly digest", "Top stories this week").unread(),
            ListedItem::new(4, "GitHub", "[repo] PR merged", "ALICE-bot merged #12").starred(),
        ]
    }

    fn inbox(fx: &Fixture) -> InboxController {
        let inbox = InboxController::new(fx.host(), InboxConfig::default(), sample_items());
        inbox.mount();
        inbox
    }

    fn select(inbox: &InboxController, ids: &[u32]) {
        for id in ids {
            inbox.set_item_selected(*id, true);
        }
    }

    #[test]
    fn test_mount_renders_row_flags() {
        let fx = Fixture::new();
        let _inbox = inbox(&fx);
        assert!(fx.view.has_class(&ids::row(1), "unread"));
        assert!(!fx.view.has_class(&ids::row(2), "unread"));
        assert_eq!(fx.view.text(&ids::star_icon(4)), "star");
        assert_eq!(fx.view.text(&ids::star_icon(1)), "star_border");
        assert!(fx.view.has_class(&Folder::Inbox.element_id(), "active"));
        assert!(!fx.view.has_class(ids::TOOLBAR, "has-selection"));
    }

    #[test]
    fn test_select_all_then_one_off() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);

        inbox.toggle_select_all(true);
        let selection = inbox.on_item_selection_changed();
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(selection.tri_state(), TriState::All);
        assert!(fx.view.is_checked(ids::SELECT_ALL));
        assert!(!fx.view.is_indeterminate(ids::SELECT_ALL));
        assert!(fx.view.has_class(ids::TOOLBAR, "has-selection"));
        assert!(fx.view.is_checked(&ids::checkbox(3)));

        let selection = inbox.set_item_selected(2, false);
        assert_eq!(selection.tri_state(), TriState::Some);
        assert!(!selection.contains(2));
        assert!(!fx.view.is_checked(ids::SELECT_ALL));
        assert!(fx.view.is_indeterminate(ids::SELECT_ALL));

        let selection = inbox.toggle_select_all(false);
        assert_eq!(selection.tri_state(), TriState::None);
        assert!(!fx.view.has_class(ids::TOOLBAR, "has-selection"));
        assert!(!fx.view.is_indeterminate(ids::SELECT_ALL));
    }

    #[test]
    fn test_selected_flags_match_selection_set() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        select(&inbox, &[1, 3]);
        let selection = inbox.selection();
        for item in inbox.items() {
            assert_eq!(item.selected, selection.contains(item.id));
        }
    }

    #[test]
    fn test_archive_hides_selected_rows() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        select(&inbox, &[2, 3]);

        assert_eq!(inbox.archive_selected(), Ok(2));
        assert!(!fx.view.is_visible(&ids::row(2)));
        assert!(!fx.view.is_visible(&ids::row(3)));
        assert!(fx.view.is_visible(&ids::row(1)));
        assert!(inbox.selection().is_empty());
        assert_eq!(inbox.items().len(), 4);
        let messages = fx.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains('2'));
        assert!(!fx.view.has_class(ids::TOOLBAR, "has-selection"));
    }

    #[test]
    fn test_archive_without_selection_is_refused() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        assert_eq!(
            inbox.archive_selected(),
            Err(ActionError::Precondition(PreconditionNotMet::EmptySelection))
        );
        assert!(fx.messages().is_empty());
    }

    #[test]
    fn test_delete_after_confirmation() {
        let mut fx = Fixture::new();
        let inbox = inbox(&fx);
        select(&inbox, &[1, 4]);

        let i = inbox.clone();
        let result = fx.spawn(async move { i.delete_selected().await });
        assert_eq!(*result.borrow(), Some(Ok(2)));
        assert_eq!(*fx.dialogs.prompts.borrow(), vec!["Delete 2 message(s)?".to_string()]);
        assert_eq!(inbox.items().iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 3]);
        assert!(fx.view.is_removed(&ids::row(1)));
        assert!(fx.view.is_removed(&ids::row(4)));
        assert_eq!(fx.messages(), vec!["Deleted 2 message(s)".to_string()]);
        assert_eq!(inbox.selection().tri_state(), TriState::None);
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut fx = Fixture::new();
        let inbox = inbox(&fx);
        select(&inbox, &[1]);
        fx.dialogs.answer.set(false);

        let i = inbox.clone();
        let result = fx.spawn(async move { i.delete_selected().await });
        assert_eq!(
            *result.borrow(),
            Some(Err(ActionError::Precondition(PreconditionNotMet::Declined)))
        );
        assert_eq!(inbox.items().len(), 4);
        assert!(inbox.selection().contains(1));
        assert!(fx.messages().is_empty());
    }

    #[test]
    fn test_delete_without_selection_never_prompts() {
        let mut fx = Fixture::new();
        let inbox = inbox(&fx);
        let i = inbox.clone();
        let result = fx.spawn(async move { i.delete_selected().await });
        assert_eq!(
            *result.borrow(),
            Some(Err(ActionError::Precondition(PreconditionNotMet::EmptySelection)))
        );
        assert!(fx.dialogs.prompts.borrow().is_empty());
    }

    #[test]
    fn test_mark_selected_read_and_unread() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        select(&inbox, &[1, 2]);

        assert_eq!(inbox.mark_selected(true), 2);
        assert!(!inbox.item(1).unwrap().unread);
        assert!(!fx.view.has_class(&ids::row(1), "unread"));
        assert!(inbox.item(3).unwrap().unread);

        inbox.mark_selected(false);
        assert!(inbox.item(2).unwrap().unread);
        assert_eq!(fx.messages(), vec!["Marked as read".to_string(), "Marked as unread".to_string()]);
        assert_eq!(inbox.selection().len(), 2);
    }

    #[test]
    fn test_toolbar_mark_read_clears_selection() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        assert!(inbox.mark_read_from_toolbar().is_err());

        select(&inbox, &[3]);
        assert_eq!(inbox.mark_read_from_toolbar(), Ok(1));
        assert!(!inbox.item(3).unwrap().unread);
        assert!(inbox.selection().is_empty());
        assert!(!fx.view.is_checked(&ids::checkbox(3)));
    }

    #[test]
    fn test_star_and_important_toggle() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        assert_eq!(inbox.toggle_star(1), Some(true));
        assert!(fx.view.has_class(&ids::star(1), "starred"));
        assert_eq!(fx.view.text(&ids::star_icon(1)), "star");
        assert_eq!(inbox.toggle_star(1), Some(false));
        assert_eq!(fx.view.text(&ids::star_icon(1)), "star_border");

        assert_eq!(inbox.toggle_important(2), Some(true));
        assert!(fx.view.has_class(&ids::important(2), "important"));
        assert_eq!(inbox.toggle_star(99), None);
        assert!(fx.messages().is_empty());
    }

    #[test]
    fn test_star_shortcut_flips_selected_rows() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        select(&inbox, &[1, 4]);
        inbox.run_shortcut(InboxShortcut::ToggleStars);
        assert!(inbox.item(1).unwrap().starred);
        assert!(!inbox.item(4).unwrap().starred);
        assert!(!inbox.item(2).unwrap().starred);
    }

    #[test]
    fn test_open_item_marks_read_unless_control_clicked() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);

        inbox.open_item(1, ClickTarget::Star);
        inbox.open_item(1, ClickTarget::Checkbox);
        assert!(inbox.item(1).unwrap().unread);
        assert!(fx.messages().is_empty());

        inbox.open_item(1, ClickTarget::Row);
        assert!(!inbox.item(1).unwrap().unread);
        assert_eq!(fx.messages(), vec!["Opening email...".to_string()]);
        assert_eq!(fx.notifier.events.borrow()[0].duration, Duration::from_millis(3000));
    }

    #[test]
    fn test_close_compose_clears_every_field() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        inbox.open_compose();
        assert!(fx.view.has_class(ids::COMPOSE_MODAL, "show"));
        assert_eq!(fx.view.focused().as_deref(), Some(ids::COMPOSE_TO));

        for (field, value) in [
            (DraftField::Recipient, "bob@example.com"),
            (DraftField::Subject, "Hi"),
            (DraftField::Body, "See you"),
        ] {
            fx.view.type_into(field.input_id(), value);
            inbox.edit_draft(field, value);
        }
        inbox.close_compose();
        assert!(!inbox.is_compose_open());
        assert!(!fx.view.has_class(ids::COMPOSE_MODAL, "show"));
        for field in DraftField::ALL {
            assert_eq!(fx.view.value(field.input_id()), "");
        }

        inbox.open_compose();
        assert_eq!(inbox.compose(), Some(ComposeDraft::default()));
    }

    #[test]
    fn test_send_without_recipient_aborts() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        inbox.open_compose();
        inbox.edit_draft(DraftField::Subject, "No one to send to");
        let before = inbox.compose();

        assert_eq!(
            inbox.send(),
            Err(ActionError::Precondition(PreconditionNotMet::MissingRecipient))
        );
        assert!(inbox.is_compose_open());
        assert!(fx.view.has_class(ids::COMPOSE_MODAL, "show"));
        assert_eq!(inbox.compose(), before);
        assert!(fx.messages().is_empty());
        assert_eq!(
            *fx.dialogs.alerts.borrow(),
            vec!["Please enter a recipient email address.".to_string()]
        );
    }

    #[test]
    fn test_send_closes_compose() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        assert_eq!(
            inbox.send(),
            Err(ActionError::Precondition(PreconditionNotMet::ComposeClosed))
        );

        inbox.open_compose();
        inbox.edit_draft(DraftField::Recipient, "bob@example.com");
        assert_eq!(inbox.send(), Ok(()));
        assert!(!inbox.is_compose_open());
        assert_eq!(fx.messages(), vec!["Message sent!".to_string()]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_idempotent() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);

        assert_eq!(inbox.search("alice"), 3);
        let first: Vec<bool> = inbox.items().iter().map(ListedItem::is_visible).collect();
        assert_eq!(first, vec![true, true, false, true]);
        assert!(!fx.view.is_visible(&ids::row(3)));

        assert_eq!(inbox.search("alice"), 3);
        let second: Vec<bool> = inbox.items().iter().map(ListedItem::is_visible).collect();
        assert_eq!(first, second);

        assert_eq!(inbox.search(""), 4);
        assert!(fx.view.is_visible(&ids::row(3)));
    }

    #[test]
    fn test_search_keeps_archived_rows_hidden() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        select(&inbox, &[2]);
        inbox.archive_selected().unwrap();

        assert_eq!(inbox.search(""), 3);
        assert!(!fx.view.is_visible(&ids::row(2)));
    }

    #[test]
    fn test_search_drops_hidden_rows_from_selection() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        inbox.toggle_select_all(true);
        inbox.search("carol");
        let selection = inbox.selection();
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![3]);
        assert_eq!(selection.tri_state(), TriState::All);
        assert!(!inbox.item(1).unwrap().selected);
    }

    #[test]
    fn test_search_enter_notifies() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        inbox.submit_search("report");
        assert_eq!(fx.messages(), vec!["Searching for: report".to_string()]);
    }

    #[test]
    fn test_folder_and_panel_switching() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        inbox.switch_folder(Folder::Sent);
        assert_eq!(inbox.folder(), Folder::Sent);
        assert!(fx.view.has_class(&Folder::Sent.element_id(), "active"));
        assert!(!fx.view.has_class(&Folder::Inbox.element_id(), "active"));

        inbox.open_panel(Panel::Tasks);
        assert_eq!(inbox.panel(), Some(Panel::Tasks));
        assert!(fx.view.has_class(&Panel::Tasks.element_id(), "active"));
        assert_eq!(
            fx.messages(),
            vec!["Switched to Sent".to_string(), "Tasks opened".to_string()]
        );
    }

    #[test]
    fn test_sidebar_toggle_and_outside_click() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        inbox.toggle_sidebar();
        assert!(fx.view.has_class(ids::SIDEBAR, "mobile-open"));

        inbox.on_document_click(ClickRegion { in_sidebar: true, ..Default::default() });
        assert!(inbox.is_sidebar_open());

        inbox.on_document_click(ClickRegion::default());
        assert!(!inbox.is_sidebar_open());
        assert!(!fx.view.has_class(ids::SIDEBAR, "mobile-open"));
    }

    #[test]
    fn test_outside_click_closes_compose() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        inbox.open_compose();
        inbox.on_document_click(ClickRegion { on_compose_button: true, ..Default::default() });
        assert!(inbox.is_compose_open());
        inbox.on_document_click(ClickRegion::default());
        assert!(!inbox.is_compose_open());
    }

    #[test]
    fn test_resize_toggles_mobile_layout() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        inbox.on_resize(768);
        assert!(inbox.is_mobile());
        assert!(fx.view.has_class(ids::SIDEBAR, "mobile"));
        inbox.on_resize(1024);
        assert!(!fx.view.has_class(ids::SIDEBAR, "mobile"));
    }

    #[test]
    fn test_refresh_spins_back() {
        let mut fx = Fixture::new();
        let inbox = inbox(&fx);
        let i = inbox.clone();
        fx.spawn(async move { i.refresh().await });
        assert_eq!(fx.view.style(ids::REFRESH_BUTTON, "transform").as_deref(), Some("rotate(360deg)"));
        fx.advance(500);
        assert_eq!(fx.view.style(ids::REFRESH_BUTTON, "transform").as_deref(), Some("rotate(0deg)"));
        assert_eq!(fx.messages(), vec!["Refreshing...".to_string()]);
    }

    #[test]
    fn test_shortcut_resolution() {
        assert_eq!(resolve_shortcut(&KeyInput::new("c"), false), Some(InboxShortcut::Compose));
        assert_eq!(resolve_shortcut(&KeyInput::new("c").in_field(ids::SEARCH_INPUT), false), None);
        assert_eq!(resolve_shortcut(&KeyInput::new("u"), false), Some(InboxShortcut::MarkUnread));
        assert_eq!(resolve_shortcut(&KeyInput::new("Escape"), false), None);
        assert_eq!(resolve_shortcut(&KeyInput::new("Escape"), true), Some(InboxShortcut::CloseCompose));
        assert_eq!(resolve_shortcut(&KeyInput::new("r").with_ctrl(), false), Some(InboxShortcut::Reserved));
        assert_eq!(resolve_shortcut(&KeyInput::new("x").with_ctrl(), false), None);
        assert!(!InboxShortcut::CloseCompose.prevents_default());
    }

    #[test]
    fn test_compose_shortcut_opens_modal() {
        let fx = Fixture::new();
        let inbox = inbox(&fx);
        let shortcut = inbox.shortcut_for(&KeyInput::new("c")).unwrap();
        inbox.run_shortcut(shortcut);
        assert!(inbox.is_compose_open());
        assert_eq!(inbox.shortcut_for(&KeyInput::new("Escape")), Some(InboxShortcut::CloseCompose));
    }
}
