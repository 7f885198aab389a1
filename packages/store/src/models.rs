//! # Domain models for accounts and sessions
//!
//! Defines the shapes that travel between the browser, the hosted JSON
//! document store, and browser `localStorage`. Field names on the wire are
//! camelCase (`createdAt`, `userId`) because the remote document and the
//! persisted session predate this client and must stay readable by it.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | One entry in the remote user list: opaque id, normalized email, plaintext password, ISO-8601 creation time. |
//! | [`UserDb`] | The entire remote document, `{ "users": [...] }`. Replaced wholesale on every write. |
//! | [`Session`] | The `{ email, userId }` pair persisted under the `"session"` storage key. Asserts identity with no cryptographic guarantee. |
//! | [`UserInfo`] | Client-facing projection of a user. Never carries the password. |

use serde::{Deserialize, Serialize};

/// A user entry as stored in the remote document.
///
/// The password is plaintext. This is a demo-grade store accessed directly
/// from the browser; the record never leaves the auth module except as a
/// [`UserInfo`] projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl UserRecord {
    /// Project into the client-safe shape.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            email: self.email.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// The whole remote document. A missing or empty bin deserializes to the
/// default (no users).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDb {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// The persisted client-side session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl Session {
    /// Storage key under which the session is persisted.
    pub fn storage_key() -> &'static str {
        "session"
    }

    /// Reconstruct a profile from the session alone, used when the document
    /// store is unreachable. The creation time is unknown in that case.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.user_id.clone(),
            email: self.email.clone(),
            created_at: String::new(),
        }
    }
}

/// User information safe to hand to views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

impl UserInfo {
    /// The date portion of the creation timestamp ("2024-03-01"), or "N/A"
    /// when the timestamp is unknown.
    pub fn created_date(&self) -> &str {
        match self.created_at.split('T').next() {
            Some(date) if !date.is_empty() => date,
            _ => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_wire_format_is_camel_case() {
        let session = Session {
            email: "a@b.com".to_string(),
            user_id: "u_1".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com","userId":"u_1"}"#);

        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_user_db_missing_users_defaults_empty() {
        let db: UserDb = serde_json::from_str("{}").unwrap();
        assert!(db.users.is_empty());
    }

    #[test]
    fn test_user_record_created_at_rename() {
        let json = r#"{"id":"u_1","email":"a@b.com","password":"x","createdAt":"2024-03-01T10:00:00.000Z"}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.created_at, "2024-03-01T10:00:00.000Z");

        let info = record.to_info();
        assert_eq!(info.created_date(), "2024-03-01");
    }

    #[test]
    fn test_created_date_unknown() {
        let info = UserInfo {
            id: "u_1".to_string(),
            email: "a@b.com".to_string(),
            created_at: String::new(),
        };
        assert_eq!(info.created_date(), "N/A");
    }
}
