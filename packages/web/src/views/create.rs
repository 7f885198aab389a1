//! Editor page. The editor itself handles the anonymous case with a login
//! prompt, so this view only waits out the session restore.

use dioxus::prelude::*;
use ui::{use_auth, PresentationEditor};

#[component]
pub fn Create() -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            div {
                class: "page-loading",
                "Loading..."
            }
        };
    }

    rsx! {
        PresentationEditor {}
    }
}
