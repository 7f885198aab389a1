//! Combined sign in / sign up page with a tab switcher.

use dioxus::prelude::*;
use ui::{use_accounts, use_auth};

use crate::Route;

/// "Get started" links here with `?tab=signup` to open on the sign-up tab.
fn wants_signup() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|search| search.contains("tab=signup"))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[component]
pub fn Auth() -> Element {
    let accounts = use_accounts();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut signing_up = use_signal(wants_signup);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the editor.
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Create {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let accounts = accounts.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let e = email();
            let p = password();
            let result = if signing_up() {
                accounts.sign_up(&e, &p).await
            } else {
                accounts.sign_in(&e, &p).await
            };

            match result {
                Ok(user) => {
                    let mut state = auth();
                    state.user = Some(user);
                    state.loading = false;
                    auth.set(state);
                    nav.push(Route::Create {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                button {
                    class: "auth-brand",
                    onclick: move |_| {
                        nav.push(Route::Home {});
                    },
                    "Slide"
                    span { class: "navbar-brand-accent", "AI" }
                }

                h1 {
                    class: "auth-title",
                    if signing_up() { "Create your account" } else { "Welcome back" }
                }

                div {
                    class: "auth-tabs",
                    button {
                        class: if !signing_up() { "tab tab-active" } else { "tab" },
                        onclick: move |_| {
                            signing_up.set(false);
                            error.set(None);
                        },
                        "Sign In"
                    }
                    button {
                        class: if signing_up() { "tab tab-active" } else { "tab" },
                        onclick: move |_| {
                            signing_up.set(true);
                            error.set(None);
                        },
                        "Sign Up"
                    }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div {
                            class: "auth-error",
                            "{err}"
                        }
                    }

                    input {
                        class: "auth-input",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        class: "auth-input",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Please wait..."
                        } else if signing_up() {
                            "Create Account"
                        } else {
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}
