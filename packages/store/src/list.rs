//! # UserList — the dashboard's list state machine
//!
//! [`UserList`] owns every piece of state the users table renders: the full
//! record set, the filtered subset, the page window into it, the checked rows,
//! and at most one inline edit in progress. All derivations are synchronous and
//! in-memory; only [`load`](UserList::load) awaits.
//!
//! ## Sets and invariants
//!
//! | Set | Meaning |
//! |-----|---------|
//! | `all` | Records as fetched, minus deletions, with commits applied. Fetch order. |
//! | `filtered` | Records of `all` matching the last *submitted* query. Rebuilt wholesale on submit. |
//! | [`page`](UserList::page) | `filtered[index * size .. index * size + size]`, clipped. Computed on read, so it can never drift from `filtered`. |
//! | `selected` | Checked identifiers. Always a subset of the identifiers in `all`. |
//! | `editing` | Working copy of one record. Only written back on [`commit_edit`](UserList::commit_edit). |
//!
//! ## Loading
//!
//! [`LoadState`] moves `Idle → Loading → Loaded | Failed`. A failed load keeps
//! its message for the UI and may be retried; a successful one is final, local
//! edits are never overwritten by a second fetch.

use std::collections::BTreeSet;

use crate::models::{EditField, UserId, UserRecord};
use crate::pagination::{page_range, Pager};
use crate::search::filter_users;
use crate::source::{SourceError, UserSource};

/// Progress of the one-time fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Rendered error message, shown next to a retry button.
    Failed(String),
}

/// How much of the visible page is checked. Drives the header checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Partial,
    All,
}

/// Full record set plus every derived view of it.
#[derive(Clone, Debug, PartialEq)]
pub struct UserList {
    all: Vec<UserRecord>,
    filtered: Vec<UserRecord>,
    query: String,
    page_index: usize,
    page_size: usize,
    selected: BTreeSet<UserId>,
    editing: Option<UserRecord>,
    load_state: LoadState,
}

impl Default for UserList {
    fn default() -> Self {
        Self::new(10)
    }
}

impl UserList {
    /// An empty, not yet loaded list. A zero page size falls back to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            page_index: 0,
            page_size: page_size.max(1),
            selected: BTreeSet::new(),
            editing: None,
            load_state: LoadState::Idle,
        }
    }

    /// A list that starts out loaded with `users`.
    pub fn from_users(users: Vec<UserRecord>, page_size: usize) -> Self {
        let mut list = Self::new(page_size);
        list.finish_load(Ok(users));
        list
    }

    pub fn all(&self) -> &[UserRecord] {
        &self.all
    }

    pub fn filtered(&self) -> &[UserRecord] {
        &self.filtered
    }

    /// The rows currently shown.
    pub fn page(&self) -> &[UserRecord] {
        &self.filtered[page_range(self.filtered.len(), self.page_index, self.page_size)]
    }

    /// The last submitted query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.page_index, self.page_size, self.filtered.len())
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    // Loading

    /// Fetch from `source` unless a previous load already succeeded.
    pub async fn load(&mut self, source: &impl UserSource) {
        if !self.begin_load() {
            return;
        }
        let result = source.fetch_users().await;
        self.finish_load(result);
    }

    /// Enter `Loading`. Returns `false` when the list is already loaded.
    ///
    /// Split from [`finish_load`](Self::finish_load) so callers holding the list
    /// behind a reactive cell can release it while the fetch is in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.load_state == LoadState::Loaded {
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Apply the outcome of a fetch.
    pub fn finish_load(&mut self, result: Result<Vec<UserRecord>, SourceError>) {
        match result {
            Ok(users) => {
                self.all = users;
                self.filtered = filter_users(&self.all, &self.query);
                self.page_index = 0;
                self.selected.clear();
                self.editing = None;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    // Search and pagination

    /// Re-filter with `query` when `triggered`; otherwise leave everything as is.
    ///
    /// Returns whether `filtered` was rebuilt. A rebuild goes back to page 0.
    pub fn search(&mut self, query: &str, triggered: bool) -> bool {
        if !triggered {
            return false;
        }
        self.query = query.trim().to_string();
        self.filtered = filter_users(&self.all, &self.query);
        self.page_index = 0;
        true
    }

    /// Jump to page `index`. Out-of-range indices are kept and show an empty page.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Change rows per page and return to the first page. Zero is ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        self.page_index = 0;
    }

    // Selection

    pub fn selected(&self) -> &BTreeSet<UserId> {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Check or uncheck one row. Unknown ids are ignored.
    pub fn toggle_select(&mut self, id: &str) {
        if !self.selected.remove(id) && self.contains(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Header checkbox: select exactly the visible page, or clear when it is
    /// already fully selected.
    pub fn toggle_select_all(&mut self) {
        if self.selection_state() == SelectionState::All {
            self.selected.clear();
        } else {
            self.selected = self.page().iter().map(|u| u.id.clone()).collect();
        }
    }

    /// Selection state of the visible page.
    pub fn selection_state(&self) -> SelectionState {
        let page = self.page();
        let checked = page.iter().filter(|u| self.selected.contains(&u.id)).count();
        if page.is_empty() || checked == 0 {
            SelectionState::None
        } else if checked == page.len() {
            SelectionState::All
        } else {
            SelectionState::Partial
        }
    }

    // Inline edit

    /// Start editing the record with `id`, replacing any edit in progress.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.all.iter().find(|u| u.id == id) {
            Some(user) => {
                self.editing = Some(user.clone());
                true
            }
            None => false,
        }
    }

    /// The working copy, if a record is being edited.
    pub fn editing(&self) -> Option<&UserRecord> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|u| u.id == id)
    }

    /// Change one field of the working copy. Any text is accepted.
    pub fn update_edit_field(&mut self, field: EditField, value: impl Into<String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.set_field(field, value);
        }
    }

    /// Write the working copy back over the record with the same id in both
    /// `all` and `filtered`, keeping its position.
    pub fn commit_edit(&mut self) -> Option<UserRecord> {
        let draft = self.editing.take()?;
        for user in self.all.iter_mut().chain(self.filtered.iter_mut()) {
            if user.id == draft.id {
                *user = draft.clone();
            }
        }
        Some(draft)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // Deletion

    /// Remove one record. Returns whether anything was removed.
    pub fn delete_one(&mut self, id: &str) -> bool {
        let before = self.all.len();
        self.all.retain(|u| u.id != id);
        if self.all.len() == before {
            return false;
        }
        self.filtered.retain(|u| u.id != id);
        self.selected.remove(id);
        if self.is_editing(id) {
            self.editing = None;
        }
        self.clamp_page_index();
        true
    }

    /// Remove every checked record and clear the selection. Returns how many
    /// records were removed.
    pub fn delete_selected(&mut self) -> usize {
        let selected = std::mem::take(&mut self.selected);
        let before = self.all.len();
        self.all.retain(|u| !selected.contains(&u.id));
        self.filtered.retain(|u| !selected.contains(&u.id));
        if self
            .editing
            .as_ref()
            .is_some_and(|u| selected.contains(&u.id))
        {
            self.editing = None;
        }
        self.clamp_page_index();
        before - self.all.len()
    }

    fn contains(&self, id: &str) -> bool {
        self.all.iter().any(|u| u.id == id)
    }

    /// Deleting the tail of the last page moves back to the new last page.
    fn clamp_page_index(&mut self) {
        let last = self.pager().last();
        if self.page_index > last {
            self.page_index = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_users() -> Vec<UserRecord> {
        vec![
            UserRecord::new("1", "Ann", "a@x.com", "admin"),
            UserRecord::new("2", "Bo", "b@x.com", "user"),
        ]
    }

    fn many_users(n: usize) -> Vec<UserRecord> {
        (1..=n)
            .map(|i| {
                let role = if i % 5 == 0 { "admin" } else { "member" };
                UserRecord::new(
                    i.to_string(),
                    format!("User {i}"),
                    format!("user{i}@mailinator.com"),
                    role,
                )
            })
            .collect()
    }

    fn ids(users: &[UserRecord]) -> Vec<&str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = UserList::new(10);
        assert!(list.all().is_empty());
        assert!(list.page().is_empty());
        assert_eq!(list.load_state(), &LoadState::Idle);
    }

    #[test]
    fn test_search_by_role() {
        let mut list = UserList::from_users(two_users(), 10);
        assert!(list.search("user", true));
        assert_eq!(ids(list.filtered()), vec!["2"]);
        assert_eq!(ids(list.page()), vec!["2"]);
        assert_eq!(list.query(), "user");
    }

    #[test]
    fn test_search_without_trigger_is_ignored() {
        let mut list = UserList::from_users(two_users(), 10);
        assert!(!list.search("user", false));
        assert_eq!(list.filtered().len(), 2);
        assert_eq!(list.query(), "");
    }

    #[test]
    fn test_empty_search_restores_everything() {
        let mut list = UserList::from_users(two_users(), 10);
        list.search("ann", true);
        assert_eq!(list.filtered().len(), 1);
        list.search("", true);
        assert_eq!(list.filtered().len(), 2);
    }

    #[test]
    fn test_search_resets_page() {
        let mut list = UserList::from_users(many_users(25), 10);
        list.set_page(2);
        list.search("member", true);
        assert_eq!(list.page_index(), 0);
        assert_eq!(list.filtered().len(), 20);
    }

    #[test]
    fn test_page_windows() {
        let mut list = UserList::from_users(many_users(25), 10);
        assert_eq!(list.page().len(), 10);

        list.set_page(2);
        assert_eq!(list.page().len(), 5);
        assert_eq!(list.page()[0].id, "21");

        list.set_page(3);
        assert!(list.page().is_empty());
    }

    #[test]
    fn test_far_out_of_range_page_is_empty() {
        let mut list = UserList::from_users(many_users(25), 10);
        list.set_page(usize::MAX);

        assert!(list.page().is_empty());
        assert_eq!(list.pager().next(), None);
        assert_eq!(list.pager().summary(), "0–0 of 25");
    }

    #[test]
    fn test_page_matches_filtered_slice() {
        let mut list = UserList::from_users(many_users(23), 10);
        for size in [1, 3, 7, 10, 30] {
            list.set_page_size(size);
            for index in 0..6 {
                list.set_page(index);
                let start = (index * size).min(23);
                let end = (start + size).min(23);
                assert_eq!(list.page(), &list.filtered()[start..end]);
            }
        }
    }

    #[test]
    fn test_set_page_size_resets_index() {
        let mut list = UserList::from_users(many_users(25), 10);
        list.set_page(2);
        list.set_page_size(5);
        assert_eq!(list.page_index(), 0);
        assert_eq!(list.page_size(), 5);

        list.set_page_size(0);
        assert_eq!(list.page_size(), 5);
    }

    #[test]
    fn test_toggle_select() {
        let mut list = UserList::from_users(two_users(), 10);
        list.toggle_select("1");
        assert!(list.is_selected("1"));
        list.toggle_select("1");
        assert!(!list.is_selected("1"));

        list.toggle_select("missing");
        assert!(list.selected().is_empty());
    }

    #[test]
    fn test_select_all_is_scoped_to_page() {
        let mut list = UserList::from_users(many_users(25), 10);
        list.set_page(1);
        list.toggle_select_all();

        assert_eq!(list.selected().len(), 10);
        assert!(list.is_selected("11"));
        assert!(!list.is_selected("1"));
        assert_eq!(list.selection_state(), SelectionState::All);

        list.toggle_select_all();
        assert!(list.selected().is_empty());
        assert_eq!(list.selection_state(), SelectionState::None);
    }

    #[test]
    fn test_partial_selection_state() {
        let mut list = UserList::from_users(two_users(), 10);
        list.toggle_select("2");
        assert_eq!(list.selection_state(), SelectionState::Partial);

        list.toggle_select_all();
        assert_eq!(list.selection_state(), SelectionState::All);
    }

    #[test]
    fn test_delete_selected() {
        let mut list = UserList::from_users(many_users(5), 10);
        list.toggle_select("1");
        list.toggle_select("2");

        assert_eq!(list.delete_selected(), 2);
        assert!(list.selected().is_empty());
        assert_eq!(ids(list.all()), vec!["3", "4", "5"]);
        assert_eq!(ids(list.filtered()), vec!["3", "4", "5"]);
    }

    #[test]
    fn test_delete_selected_keeps_filter() {
        let mut list = UserList::from_users(many_users(10), 10);
        list.search("admin", true);
        assert_eq!(ids(list.filtered()), vec!["5", "10"]);

        list.toggle_select("5");
        list.delete_selected();
        assert_eq!(ids(list.filtered()), vec!["10"]);
        assert_eq!(list.all().len(), 9);
    }

    #[test]
    fn test_delete_one() {
        let mut list = UserList::from_users(two_users(), 10);
        list.toggle_select("1");
        list.begin_edit("1");

        assert!(list.delete_one("1"));
        assert_eq!(ids(list.all()), vec!["2"]);
        assert!(list.selected().is_empty());
        assert!(list.editing().is_none());

        assert!(!list.delete_one("1"));
    }

    #[test]
    fn test_delete_last_row_of_last_page_moves_back() {
        let mut list = UserList::from_users(many_users(21), 10);
        list.set_page(2);
        assert_eq!(ids(list.page()), vec!["21"]);

        list.delete_one("21");
        assert_eq!(list.page_index(), 1);
        assert_eq!(list.page().len(), 10);
    }

    #[test]
    fn test_commit_edit_preserves_id_and_position() {
        let mut list = UserList::from_users(many_users(3), 10);
        assert!(list.begin_edit("2"));
        list.update_edit_field(EditField::Name, "Renamed");
        list.update_edit_field(EditField::Email, "");
        list.update_edit_field(EditField::Role, "admin");

        // Not visible until committed.
        assert_eq!(list.all()[1].name, "User 2");

        let committed = list.commit_edit().unwrap();
        assert_eq!(committed.id, "2");
        assert_eq!(ids(list.all()), vec!["1", "2", "3"]);
        assert_eq!(list.all()[1].name, "Renamed");
        assert_eq!(list.all()[1].email, "");
        assert_eq!(list.filtered()[1].role, "admin");
        assert!(list.editing().is_none());
    }

    #[test]
    fn test_cancel_edit_discards_changes() {
        let mut list = UserList::from_users(two_users(), 10);
        list.begin_edit("1");
        list.update_edit_field(EditField::Name, "Nope");
        list.cancel_edit();

        assert!(list.editing().is_none());
        assert_eq!(list.all()[0].name, "Ann");
        assert_eq!(list.commit_edit(), None);
    }

    #[test]
    fn test_only_one_record_in_edit_mode() {
        let mut list = UserList::from_users(two_users(), 10);
        list.begin_edit("1");
        list.begin_edit("2");
        assert!(list.is_editing("2"));
        assert!(!list.is_editing("1"));
        assert!(!list.begin_edit("9"));
        assert!(list.is_editing("2"));
    }

    #[test]
    fn test_committed_edit_is_searchable() {
        let mut list = UserList::from_users(two_users(), 10);
        list.begin_edit("1");
        list.update_edit_field(EditField::Role, "auditor");
        list.commit_edit();

        list.search("auditor", true);
        assert_eq!(ids(list.filtered()), vec!["1"]);
    }

    #[test]
    fn test_failed_load_then_success() {
        let mut list = UserList::new(10);
        assert!(list.begin_load());
        assert_eq!(list.load_state(), &LoadState::Loading);

        list.finish_load(Err(SourceError::Transport("offline".to_string())));
        assert_eq!(
            list.load_state(),
            &LoadState::Failed("request failed: offline".to_string())
        );

        assert!(list.begin_load());
        list.finish_load(Ok(two_users()));
        assert_eq!(list.load_state(), &LoadState::Loaded);
        assert!(!list.begin_load());
    }

    #[test]
    fn test_query_submitted_while_loading_applies_on_arrival() {
        let mut list = UserList::new(10);
        list.begin_load();
        list.search("bo", true);
        list.finish_load(Ok(two_users()));
        assert_eq!(ids(list.filtered()), vec!["2"]);
    }
}
