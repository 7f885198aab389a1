//! # Account flows — sign-up, sign-in, sign-out, session restore
//!
//! [`Accounts`] wraps a [`DocumentStore`] and a [`SessionStore`] and owns
//! every credential operation. It is held in the UI's context and passed to
//! views explicitly; there is no ambient global state.
//!
//! Every operation is a fresh whole-document read (and, for sign-up, a
//! whole-document write). Email uniqueness is enforced by a pre-insert scan
//! only, so concurrent sign-ups from different clients can still race; the
//! store offers nothing better.

use store::{now_iso8601, Session, UserDb, UserInfo, UserRecord};
use uuid::Uuid;

use crate::docstore::DocumentStore;
use crate::error::AuthError;
use crate::sessions::SessionStore;

/// Canonical form of an email address: trimmed and lowercased. Idempotent.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Opaque user identifier, `u_`-prefixed for readability in the stored
/// document.
fn new_user_id() -> String {
    format!("u_{}", Uuid::new_v4().simple())
}

/// The session/credential manager.
#[derive(Clone, Debug)]
pub struct Accounts<D, S> {
    docs: D,
    sessions: S,
}

impl<D: DocumentStore, S: SessionStore> Accounts<D, S> {
    pub fn new(docs: D, sessions: S) -> Self {
        Self { docs, sessions }
    }

    /// Create an account and establish a session.
    ///
    /// Fails with [`AuthError::EmailTaken`] when the normalized email is
    /// already present; the store is not written in that case.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<UserInfo, AuthError> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::Validation("Please enter a valid email"));
        }
        if password.len() < 6 {
            return Err(AuthError::Validation(
                "Password must be at least 6 characters",
            ));
        }

        let mut db = self.docs.read().await?;
        if db.users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let record = UserRecord {
            id: new_user_id(),
            email,
            password: password.to_string(),
            created_at: now_iso8601(),
        };
        db.users.push(record.clone());
        self.docs.write(&db).await?;

        self.establish(&record);
        Ok(record.to_info())
    }

    /// Establish a session for an existing account.
    ///
    /// Succeeds only when one stored record matches both the normalized
    /// email and the exact password. Unknown email and wrong password are
    /// deliberately indistinguishable.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserInfo, AuthError> {
        let email = normalize_email(email);
        let db = self.docs.read().await?;

        let record = db
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        self.establish(record);
        Ok(record.to_info())
    }

    /// Drop the persisted session. Local-only; the store is untouched.
    pub fn sign_out(&self) {
        self.sessions.clear();
    }

    /// The persisted session, if any.
    pub fn session(&self) -> Option<Session> {
        self.sessions.load()
    }

    /// Restore the signed-in user from the persisted session.
    ///
    /// Re-reads the document to recover the real creation timestamp; when
    /// the store is unreachable the session-derived profile is returned
    /// instead, so an offline reload still shows the user as signed in.
    pub async fn current_user(&self) -> Option<UserInfo> {
        let session = self.sessions.load()?;

        match self.docs.read().await {
            Ok(db) => {
                let info = db
                    .users
                    .iter()
                    .find(|u| u.id == session.user_id)
                    .map(UserRecord::to_info)
                    .unwrap_or_else(|| session.to_info());
                Some(info)
            }
            Err(err) => {
                tracing::debug!("session restore without store: {err}");
                Some(session.to_info())
            }
        }
    }

    fn establish(&self, record: &UserRecord) {
        self.sessions.save(&Session {
            email: record.email.clone(),
            user_id: record.id.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstore::MemoryBin;
    use crate::error::StoreError;
    use crate::sessions::MemorySessions;

    fn accounts() -> (Accounts<MemoryBin, MemorySessions>, MemoryBin) {
        let bin = MemoryBin::new();
        (Accounts::new(bin.clone(), MemorySessions::new()), bin)
    }

    #[test]
    fn test_normalize_email_idempotent() {
        let once = normalize_email("  A@B.Com ");
        assert_eq!(once, "a@b.com");
        assert_eq!(normalize_email(&once), once);
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in_case_insensitive() {
        let (accounts, _) = accounts();
        accounts.sign_up("A@B.com", "secret1").await.unwrap();

        let info = accounts.sign_in("a@b.com", "secret1").await.unwrap();
        assert_eq!(info.email, "a@b.com");
        assert!(info.id.starts_with("u_"));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_write() {
        let (accounts, bin) = accounts();
        accounts.sign_up("a@b.com", "secret1").await.unwrap();
        let before = bin.snapshot();

        let err = accounts.sign_up(" A@B.COM ", "other-password").await;
        assert!(matches!(err, Err(AuthError::EmailTaken)));
        assert_eq!(bin.snapshot(), before);
    }

    #[tokio::test]
    async fn test_sign_in_never_matches_on_email_alone() {
        let (accounts, _) = accounts();
        accounts.sign_up("a@b.com", "secret1").await.unwrap();

        let wrong_password = accounts.sign_in("a@b.com", "nope").await.unwrap_err();
        let unknown_email = accounts.sign_in("ghost@b.com", "secret1").await.unwrap_err();

        // Both failures present the same face to the user.
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_sign_up_validation() {
        let (accounts, bin) = accounts();

        assert!(matches!(
            accounts.sign_up("not-an-email", "secret1").await,
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            accounts.sign_up("a@b.com", "tiny").await,
            Err(AuthError::Validation(_))
        ));
        assert!(bin.snapshot().users.is_empty());
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let (accounts, _) = accounts();
        accounts.sign_up("a@b.com", "secret1").await.unwrap();
        assert!(accounts.session().is_some());

        accounts.sign_out();
        assert!(accounts.session().is_none());
        assert!(accounts.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_current_user_recovers_created_at() {
        let (accounts, _) = accounts();
        let signed_up = accounts.sign_up("a@b.com", "secret1").await.unwrap();

        let restored = accounts.current_user().await.unwrap();
        assert_eq!(restored, signed_up);
        assert!(!restored.created_at.is_empty());
    }

    /// Store that fails every request, for exercising the offline path.
    #[derive(Clone)]
    struct DeadBin;

    impl DocumentStore for DeadBin {
        async fn read(&self) -> Result<UserDb, StoreError> {
            Err(StoreError::Unconfigured)
        }

        async fn write(&self, _db: &UserDb) -> Result<(), StoreError> {
            Err(StoreError::Unconfigured)
        }
    }

    #[tokio::test]
    async fn test_current_user_falls_back_when_store_unreachable() {
        let sessions = MemorySessions::new();
        sessions.save(&Session {
            email: "a@b.com".to_string(),
            user_id: "u_1".to_string(),
        });

        let accounts = Accounts::new(DeadBin, sessions);
        let info = accounts.current_user().await.unwrap();
        assert_eq!(info.email, "a@b.com");
        assert_eq!(info.id, "u_1");
        assert!(info.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_surfaces_store_failure() {
        let accounts = Accounts::new(DeadBin, MemorySessions::new());
        assert!(matches!(
            accounts.sign_in("a@b.com", "secret1").await,
            Err(AuthError::Store(_))
        ));
    }
}
