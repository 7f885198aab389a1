//! Landing page for the checkout redirect. Payments are not wired up yet, so
//! this only confirms the interest and points back into the app.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PaymentSuccess() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "payment-page",

            div {
                class: "payment-card",

                h1 { class: "payment-title", "Thanks for your interest!" }
                p {
                    class: "payment-text",
                    "Subscriptions are coming soon. Your account has not been "
                    "charged, and everything in SlideAI stays free for now."
                }

                div {
                    class: "payment-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            nav.push(Route::Account {});
                        },
                        "Account"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            nav.push(Route::Home {});
                        },
                        "Back to Home"
                    }
                }
            }
        }
    }
}
