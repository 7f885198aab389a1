//! Authentication context and hooks for the UI.

use api::{make_accounts, AppAccounts, AppConfig};
use dioxus::prelude::*;
use store::UserInfo;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// Whether the initial session restore is still in flight.
    pub loading: bool,
    /// Whether a sign-in/sign-up request is in flight.
    pub busy: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            busy: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the account manager. Held in context so views receive an explicit
/// handle instead of reaching for globals.
pub fn use_accounts() -> AppAccounts {
    use_context::<AppAccounts>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let accounts = use_context_provider(|| make_accounts(&AppConfig::from_env()));
    let mut auth_state = use_signal(AuthState::default);

    // Restore the persisted session on mount. The store lookup is
    // best-effort; an unreachable store still restores the session profile.
    let restore = accounts.clone();
    let _ = use_resource(move || {
        let accounts = restore.clone();
        async move {
            let user = accounts.current_user().await;
            auth_state.set(AuthState {
                user,
                loading: false,
                busy: false,
            });
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
