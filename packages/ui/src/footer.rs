use dioxus::prelude::*;

use crate::navigate;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-inner",
                div {
                    class: "footer-brand",
                    span { "Slide" }
                    span { class: "navbar-brand-accent", "AI" }
                }
                nav {
                    class: "footer-links",
                    button { class: "footer-link", onclick: move |_| navigate("/#features"), "Features" }
                    button { class: "footer-link", onclick: move |_| navigate("/#pricing"), "Pricing" }
                    button { class: "footer-link", onclick: move |_| navigate("/account"), "Account" }
                }
                p { class: "footer-copy", "Built for people who would rather talk than fiddle with slides." }
            }
        }
    }
}
