//! Account settings page: profile details and plan.

use dioxus::prelude::*;
use ui::{use_auth, Navbar};

use crate::Route;

#[component]
pub fn Account() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        return rsx! {
            div {
                class: "page-loading",
                "Loading..."
            }
        };
    }

    let Some(user) = state.user else {
        nav.replace(Route::Auth {});
        return rsx! {};
    };

    rsx! {
        Navbar {}

        main {
            class: "account-page",

            div {
                class: "account-card",

                h1 { class: "account-title", "Account Settings" }

                div {
                    class: "account-row",
                    span { class: "account-label", "Email" }
                    span { "{user.email}" }
                }
                div {
                    class: "account-row",
                    span { class: "account-label", "Member since" }
                    span { "{user.created_date()}" }
                }
                div {
                    class: "account-row",
                    span { class: "account-label", "Plan" }
                    span { "Free" }
                }

                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push(Route::Create {});
                    },
                    "Create a presentation"
                }
            }
        }
    }
}
