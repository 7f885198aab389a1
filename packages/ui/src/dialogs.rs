//! Small informational dialogs: stubbed features and the sign-in gate.

use dioxus::prelude::*;

use crate::{navigate, ModalOverlay};

/// Placeholder for features that never shipped.
#[component]
pub fn ComingSoonDialog(
    #[props(default = "Coming Soon".to_string())] title: String,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "dialog-body",
                h2 { class: "dialog-title", "{title}" }
                p { class: "dialog-text", "This feature is coming soon. Stay tuned!" }
                div {
                    class: "dialog-panel",
                    h3 { "Coming Soon" }
                    p { "We're working on bringing you this feature. Check back soon!" }
                }
                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| on_close.call(()),
                    "Got it"
                }
            }
        }
    }
}

/// Subscriptions are a capability stub; the dialog says so.
#[component]
pub fn PaymentDialog(on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "dialog-body",
                h2 { class: "dialog-title", "Subscription Coming Soon" }
                p {
                    class: "dialog-text",
                    "We're working on bringing you subscription features. Stay tuned!"
                }
                div {
                    class: "dialog-panel",
                    h3 { "Coming Soon" }
                    p {
                        "Subscription features will be available soon. For now, you can use all features for free."
                    }
                }
                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| on_close.call(()),
                    "Got it"
                }
            }
        }
    }
}

/// Shown when an anonymous user tries a signed-in action.
#[component]
pub fn LoginPromptModal(on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "dialog-body",
                h2 { class: "dialog-title", "Sign in required" }
                p {
                    class: "dialog-text",
                    "Create a free account or sign in to generate and export presentations."
                }
                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Not now"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| navigate("/auth"),
                        "Log in"
                    }
                }
            }
        }
    }
}
