use api::Subscription;
use dioxus::prelude::*;

/// Pricing cards. The pro plan routes into the (stubbed) payment flow.
#[component]
pub fn PricingSection(on_subscribe: EventHandler<()>) -> Element {
    // Everything is free while subscriptions are stubbed; the pro card
    // reflects that honestly.
    let subscription = Subscription::new();

    rsx! {
        section {
            id: "pricing",
            class: "pricing",
            h2 { class: "section-title", "Simple pricing" }
            div {
                class: "pricing-grid",
                div {
                    class: "pricing-card",
                    h3 { "Free" }
                    p { class: "pricing-price", "$0" }
                    ul {
                        class: "pricing-features",
                        li { "Unlimited presentations" }
                        li { "All templates, themes, and layouts" }
                        li { "PowerPoint export" }
                    }
                    if subscription.can_create_presentation() {
                        p { class: "pricing-note", "Everything is included for now." }
                    }
                }
                div {
                    class: "pricing-card pricing-card-pro",
                    h3 { "Pro" }
                    p { class: "pricing-price", "Coming soon" }
                    ul {
                        class: "pricing-features",
                        li { "Team workspaces" }
                        li { "Brand kits" }
                        li { "Priority generation" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        onclick: move |_| on_subscribe.call(()),
                        "Subscribe"
                    }
                }
            }
        }
    }
}
