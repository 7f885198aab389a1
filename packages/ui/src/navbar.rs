use dioxus::prelude::*;

use crate::{navigate, push_toast, use_accounts, use_auth, AuthState, ComingSoonDialog, ToastLevel};

/// Top navigation bar: brand, marketing links, and the auth-dependent
/// actions on the right.
#[component]
pub fn Navbar(#[props(default)] on_pricing_click: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let accounts = use_accounts();
    let mut toasts = crate::use_toasts();
    let mut templates_dialog = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    let handle_sign_out = move |_| {
        accounts.sign_out();
        auth.set(AuthState {
            user: None,
            loading: false,
            busy: false,
        });
        push_toast(&mut toasts, ToastLevel::Success, "Signed out successfully");
        navigate("/");
    };

    rsx! {
        document::Stylesheet { href: crate::UI_CSS }
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                button {
                    class: "navbar-brand",
                    onclick: move |_| navigate("/"),
                    "Slide"
                    span { class: "navbar-brand-accent", "AI" }
                }

                nav {
                    class: "navbar-links",
                    button {
                        class: "navbar-link",
                        onclick: move |_| navigate("/#features"),
                        "Features"
                    }
                    button {
                        class: "navbar-link",
                        onclick: move |_| on_pricing_click.call(()),
                        "Pricing"
                    }
                    button {
                        class: "navbar-link",
                        onclick: move |_| templates_dialog.set(true),
                        "Templates"
                    }
                }

                div {
                    class: "navbar-actions",
                    if let Some(user) = auth().user {
                        div {
                            class: "navbar-account",
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| menu_open.set(!menu_open()),
                                "Account"
                            }
                            if menu_open() {
                                div {
                                    class: "navbar-menu",
                                    div { class: "navbar-menu-email", "{user.email}" }
                                    button {
                                        class: "navbar-menu-item",
                                        onclick: move |_| navigate("/account"),
                                        "Account Settings"
                                    }
                                    button {
                                        class: "navbar-menu-item",
                                        onclick: handle_sign_out,
                                        "Sign out"
                                    }
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| navigate("/create"),
                            "Create presentation"
                        }
                    } else {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| navigate("/auth"),
                            "Log in"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| navigate("/auth?tab=signup"),
                            "Get started"
                        }
                    }
                }
            }
        }

        if templates_dialog() {
            ComingSoonDialog {
                title: "Templates Coming Soon",
                on_close: move |_| templates_dialog.set(false),
            }
        }
    }
}
