//! # API crate — remote services and account flows for SlideAI
//!
//! Everything in here runs in the browser (or natively in tests); there is no
//! SlideAI server. The two remote dependencies are a hosted JSON document
//! store holding the demo user list, and the presentation-generation HTTP API
//! that returns a download URL for a rendered deck.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`accounts`] | Sign-up / sign-in / sign-out over the document store, session restore |
//! | [`config`] | Endpoint configuration, compile-time defaults via `option_env!` |
//! | [`docstore`] | `DocumentStore` trait with jsonbin-backed and in-memory impls |
//! | [`error`] | Typed errors (`thiserror`) for store, auth, and generation failures |
//! | [`generate`] | Generation API client and download-URL helpers |
//! | [`sessions`] | `SessionStore` trait with localStorage-backed and in-memory impls |
//! | [`subscription`] | Stubbed subscription capability (everything is allowed) |

pub mod accounts;
pub mod config;
pub mod docstore;
pub mod error;
pub mod generate;
pub mod sessions;
pub mod subscription;

pub use accounts::{normalize_email, Accounts};
pub use config::AppConfig;
pub use docstore::{DocumentStore, JsonBin, MemoryBin};
pub use error::{AuthError, GenerateError, StoreError};
pub use generate::{
    ensure_https, office_preview_url, ExportKind, GenerateClient, GenerateRequest,
    GenerateResponse,
};
pub use sessions::{MemorySessions, SessionStore};
pub use subscription::Subscription;

#[cfg(target_arch = "wasm32")]
pub use sessions::LocalSessions;

/// The account manager wired to the platform-appropriate backends:
/// jsonbin over HTTP everywhere, sessions in browser `localStorage` on wasm
/// and in memory on native builds.
#[cfg(target_arch = "wasm32")]
pub type AppAccounts = Accounts<JsonBin, LocalSessions>;
#[cfg(not(target_arch = "wasm32"))]
pub type AppAccounts = Accounts<JsonBin, MemorySessions>;

/// Build the account manager for this platform from a config.
pub fn make_accounts(config: &AppConfig) -> AppAccounts {
    let bin = JsonBin::new(config);
    #[cfg(target_arch = "wasm32")]
    {
        Accounts::new(bin, LocalSessions::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Accounts::new(bin, MemorySessions::new())
    }
}
