use dioxus::prelude::*;

/// Dimmed backdrop with a centered card. A click on the backdrop fires
/// `on_close`; clicks inside the card never reach it.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                // Keep card clicks from bubbling to the backdrop handler.
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
