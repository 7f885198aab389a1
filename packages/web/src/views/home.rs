//! Landing page: hero, feature grid, pricing and footer.

use dioxus::prelude::*;
use ui::{FeaturesSection, Footer, HeroSection, Navbar, PaymentDialog, PricingSection};

#[component]
pub fn Home() -> Element {
    let mut payment_open = use_signal(|| false);

    rsx! {
        Navbar {
            on_pricing_click: move |_| payment_open.set(true),
        }

        main {
            HeroSection {}
            FeaturesSection {}
            PricingSection {
                on_subscribe: move |_| payment_open.set(true),
            }
        }

        Footer {}

        if payment_open() {
            PaymentDialog {
                on_close: move |_| payment_open.set(false),
            }
        }
    }
}
