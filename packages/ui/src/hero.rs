use dioxus::prelude::*;

use crate::{navigate, use_auth, ComingSoonDialog, LoginPromptModal};

/// Landing hero: headline, call to action, preview mockup.
#[component]
pub fn HeroSection() -> Element {
    let auth = use_auth();
    let mut login_prompt = use_signal(|| false);
    let mut coming_soon = use_signal(|| false);

    let handle_create = move |_| {
        if auth().user.is_some() {
            navigate("/create");
        } else {
            login_prompt.set(true);
        }
    };

    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-inner",
                div { class: "hero-badge", "Intelligent presentation creation" }
                h1 {
                    class: "hero-title",
                    "Create stunning presentations with the power of AI"
                }
                p {
                    class: "hero-subtitle",
                    "Turn your ideas into professional, visually captivating presentations in seconds. No design skills required."
                }
                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: handle_create,
                        "Create your presentation"
                    }
                    button {
                        class: "btn btn-outline btn-lg",
                        onclick: move |_| coming_soon.set(true),
                        "View templates"
                    }
                }
            }

            div {
                class: "hero-mockup",
                div { class: "hero-mockup-screen", "Presentation preview" }
            }
        }

        if login_prompt() {
            LoginPromptModal { on_close: move |_| login_prompt.set(false) }
        }
        if coming_soon() {
            ComingSoonDialog {
                title: "Templates Coming Soon",
                on_close: move |_| coming_soon.set(false),
            }
        }
    }
}
