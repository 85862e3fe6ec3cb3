//! Free-text search over user records.
//!
//! Search is submit-driven: typing only edits the draft held by [`SearchBox`],
//! and the list is re-filtered when the box is submitted (search icon or Enter).

use crate::models::UserRecord;

/// Whether `user` matches an already lower-cased, trimmed query.
///
/// A record matches when the query is a substring of its name, email or role,
/// ignoring case. The empty query matches every record.
pub fn matches(user: &UserRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&user.name, &user.email, &user.role]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Normalise raw input into the form [`matches`] expects.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Records of `users` matching `query`, in their original order.
pub fn filter_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let needle = normalize_query(query);
    users
        .iter()
        .filter(|u| matches(u, &needle))
        .cloned()
        .collect()
}

/// Draft query text plus a pending "filter requested" flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchBox {
    text: String,
    requested: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the draft. Does not request a filter.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Request a filter with the current draft.
    pub fn submit(&mut self) {
        self.requested = true;
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Hand out the draft once per submit.
    pub fn take_request(&mut self) -> Option<String> {
        if std::mem::take(&mut self.requested) {
            Some(self.text.clone())
        } else {
            None
        }
    }
}
