//! # Document store — the hosted JSON blob holding the user list
//!
//! [`DocumentStore`] is the whole-document read/write seam the account flows
//! are written against. [`JsonBin`] talks to a jsonbin.io-style HTTP API;
//! [`MemoryBin`] backs tests and native fallback builds.
//!
//! Semantics are deliberately primitive: `read` fetches the entire document,
//! `write` replaces it. There is no partial update, no optimistic-concurrency
//! token, and no retry; two concurrent writers race and the last write wins.

use store::UserDb;

use crate::config::AppConfig;
use crate::error::StoreError;

const ACCESS_KEY_HEADER: &str = "X-Access-Key";

/// Whole-document access to the remote user database.
pub trait DocumentStore {
    /// Fetch the current document.
    async fn read(&self) -> Result<UserDb, StoreError>;
    /// Replace the document wholesale.
    async fn write(&self, db: &UserDb) -> Result<(), StoreError>;
}

/// jsonbin.io client. `GET /b/{bin_id}` wraps the document in a
/// `{ "record": ... }` envelope; `PUT /b/{bin_id}` takes the bare document.
#[derive(Clone, Debug)]
pub struct JsonBin {
    base_url: String,
    bin_id: String,
    access_key: String,
    http: reqwest::Client,
}

impl JsonBin {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.store_base.clone(),
            bin_id: config.bin_id.clone(),
            access_key: config.access_key.clone(),
            http: reqwest::Client::new(),
        }
    }

    fn bin_url(&self) -> Result<String, StoreError> {
        if self.bin_id.is_empty() || self.access_key.is_empty() {
            return Err(StoreError::Unconfigured);
        }
        Ok(format!("{}/{}", self.base_url, self.bin_id))
    }
}

impl DocumentStore for JsonBin {
    async fn read(&self) -> Result<UserDb, StoreError> {
        let response = self
            .http
            .get(self.bin_url()?)
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        handle_read_response(status, body)
    }

    async fn write(&self, db: &UserDb) -> Result<(), StoreError> {
        let response = self
            .http
            .put(self.bin_url()?)
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .json(db)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        handle_write_response(status, body)
    }
}

/// Turn a read response into a document. Any non-2xx status is a failure
/// carrying the status and raw body.
fn handle_read_response(status: u16, body: String) -> Result<UserDb, StoreError> {
    if !(200..300).contains(&status) {
        return Err(StoreError::Status { status, body });
    }
    Ok(parse_read_response(&body)?)
}

fn handle_write_response(status: u16, body: String) -> Result<(), StoreError> {
    if !(200..300).contains(&status) {
        return Err(StoreError::Status { status, body });
    }
    Ok(())
}

/// Unwrap the read envelope. A bin that has never been written (or whose
/// record is null) yields the empty database.
fn parse_read_response(body: &str) -> Result<UserDb, serde_json::Error> {
    #[derive(serde::Deserialize)]
    struct ReadEnvelope {
        #[serde(default)]
        record: Option<UserDb>,
    }

    let envelope: ReadEnvelope = serde_json::from_str(body)?;
    Ok(envelope.record.unwrap_or_default())
}

/// In-memory document store for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryBin {
    db: std::sync::Arc<std::sync::Mutex<UserDb>>,
}

impl MemoryBin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current document, for assertions.
    pub fn snapshot(&self) -> UserDb {
        self.db.lock().unwrap().clone()
    }
}

impl DocumentStore for MemoryBin {
    async fn read(&self) -> Result<UserDb, StoreError> {
        Ok(self.db.lock().unwrap().clone())
    }

    async fn write(&self, db: &UserDb) -> Result<(), StoreError> {
        *self.db.lock().unwrap() = db.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::UserRecord;

    #[test]
    fn test_parse_read_response_with_record() {
        let body = r#"{"record":{"users":[{"id":"u_1","email":"a@b.com","password":"x","createdAt":"2024-01-01T00:00:00.000Z"}]},"metadata":{"id":"abc"}}"#;
        let db = parse_read_response(body).unwrap();
        assert_eq!(db.users.len(), 1);
        assert_eq!(db.users[0].email, "a@b.com");
    }

    #[test]
    fn test_parse_read_response_missing_record() {
        let db = parse_read_response(r#"{"metadata":{"id":"abc"}}"#).unwrap();
        assert!(db.users.is_empty());

        let db = parse_read_response(r#"{"record":null}"#).unwrap();
        assert!(db.users.is_empty());
    }

    #[test]
    fn test_parse_read_response_malformed() {
        assert!(parse_read_response("not json").is_err());
    }

    #[test]
    fn test_failed_read_yields_status_error() {
        let err = handle_read_response(401, r#"{"message":"Invalid X-Access-Key"}"#.to_string())
            .unwrap_err();
        assert!(matches!(err, StoreError::Status { status: 401, .. }));
    }

    #[test]
    fn test_write_status_handling() {
        assert!(handle_write_response(200, String::new()).is_ok());
        assert!(matches!(
            handle_write_response(403, "nope".to_string()),
            Err(StoreError::Status { status: 403, .. })
        ));
    }

    #[test]
    fn test_unconfigured_bin_fails_before_any_request() {
        let bin = JsonBin::new(&AppConfig {
            store_base: "https://api.jsonbin.io/v3/b".to_string(),
            bin_id: String::new(),
            access_key: String::new(),
            generate_base: String::new(),
        });
        assert!(matches!(bin.bin_url(), Err(StoreError::Unconfigured)));
    }

    #[tokio::test]
    async fn test_memory_bin_roundtrip() {
        let bin = MemoryBin::new();
        assert!(bin.read().await.unwrap().users.is_empty());

        let db = UserDb {
            users: vec![UserRecord {
                id: "u_1".to_string(),
                email: "a@b.com".to_string(),
                password: "x".to_string(),
                created_at: "2024-01-01T00:00:00.000Z".to_string(),
            }],
        };
        bin.write(&db).await.unwrap();
        assert_eq!(bin.read().await.unwrap(), db);
    }
}
