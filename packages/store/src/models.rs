//! # Domain models for user records
//!
//! Defines the records held by [`crate::UserList`] and returned by a
//! [`crate::UserSource`]. These types are `Serialize + Deserialize` so they can
//! be decoded straight from the remote members document.
//!
//! ## Types
//!
//! | Item | Represents |
//! |------|-----------|
//! | [`UserRecord`] | A single user row: a stable `id` plus the editable `name`, `email` and `role`. |
//! | [`UserId`] | The record identifier. Always text, even when the remote sends a number. |
//! | [`EditField`] | One of the three editable columns, used by the inline editor. |
//!
//! The remote document is not strict about identifier types (`"id": "1"` and
//! `"id": 1` both occur in the wild), so [`UserRecord`] decodes either form into
//! a string.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a user record.
pub type UserId = String;

/// A user entry as listed by the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable key, never edited: "1"
    #[serde(deserialize_with = "deserialize_id")]
    pub id: UserId,
    /// Display name: "Aaron Miles"
    pub name: String,
    /// Contact address: "aaron@mailinator.com"
    pub email: String,
    /// Free-form role label: "member" or "admin"
    pub role: String,
}

impl UserRecord {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Read one of the editable columns.
    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Email => &self.email,
            EditField::Role => &self.role,
        }
    }

    /// Overwrite one of the editable columns. The identifier is never touched.
    pub fn set_field(&mut self, field: EditField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditField::Name => self.name = value,
            EditField::Email => self.email = value,
            EditField::Role => self.role = value,
        }
    }
}

/// The editable columns of a [`UserRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditField {
    Name,
    Email,
    Role,
}

impl EditField {
    pub const ALL: [EditField; 3] = [EditField::Name, EditField::Email, EditField::Role];

    /// Form field name, matching the JSON key.
    pub fn key(self) -> &'static str {
        match self {
            EditField::Name => "name",
            EditField::Email => "email",
            EditField::Role => "role",
        }
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_string_and_numeric_ids() {
        let json = r#"[
            {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
            {"id": 2, "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin", "extra": true}
        ]"#;

        let users: Vec<UserRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "1");
        assert_eq!(users[1].id, "2");
        assert_eq!(users[1].role, "admin");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"[{"id": "1", "name": "Aaron", "email": "a@x.com"}]"#;
        assert!(serde_json::from_str::<Vec<UserRecord>>(json).is_err());
    }

    #[test]
    fn test_set_field_keeps_id() {
        let mut user = UserRecord::new("7", "Ann", "a@x.com", "admin");
        user.set_field(EditField::Name, "Anne");
        user.set_field(EditField::Role, "");

        assert_eq!(user.id, "7");
        assert_eq!(user.field(EditField::Name), "Anne");
        assert_eq!(user.field(EditField::Role), "");
        assert_eq!(user.field(EditField::Email), "a@x.com");
    }

    #[test]
    fn test_field_keys_match_json() {
        let user = UserRecord::new("1", "Ann", "a@x.com", "admin");
        let value = serde_json::to_value(&user).unwrap();
        for field in EditField::ALL {
            assert_eq!(value[field.key()], user.field(field));
        }
    }
}
