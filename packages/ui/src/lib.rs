//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{use_accounts, use_auth, AuthProvider, AuthState};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastHost, ToastLevel, ToastProvider, Toasts};

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::HeroSection;

mod features;
pub use features::FeaturesSection;

mod pricing;
pub use pricing::PricingSection;

mod footer;
pub use footer::Footer;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod dialogs;
pub use dialogs::{ComingSoonDialog, LoginPromptModal, PaymentDialog};

pub mod editor;
pub use editor::PresentationEditor;

/// Hard navigation to an app path. Components in this crate don't know the
/// router, so they change the location directly, as the platform views do.
pub(crate) fn navigate(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("navigate: {path}");
    }
}
