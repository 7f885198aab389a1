use api::office_preview_url;
use dioxus::prelude::*;
use store::Deck;

/// Main preview area. Shows the editable current slide, or the embedded
/// document viewer once a remote export has produced a file.
#[component]
pub fn SlidePreview(mut deck: Signal<Deck>, download_url: Signal<Option<String>>) -> Element {
    let remote = download_url();
    let current = deck();
    let at_start = current.at_start();
    let at_end = current.at_end();
    let position = current.position();
    let count = current.len();
    let slide_title = current.current().title.clone();
    let slide_body = current.current().body.clone();
    let has_remote = remote.is_some();
    let counter = format!("Slide {} of {}", position + 1, count);

    rsx! {
        div {
            class: "slide-preview",
            div {
                class: "slide-preview-stage",
                if let Some(url) = remote {
                    div {
                        class: "slide-remote",
                        iframe {
                            class: "slide-remote-frame",
                            src: office_preview_url(&url),
                            title: "PowerPoint Presentation Preview",
                            allowfullscreen: true,
                        }
                        a {
                            class: "btn btn-primary",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Download PowerPoint"
                        }
                    }
                } else {
                    div {
                        class: "slide-canvas",
                        input {
                            class: "slide-title-input",
                            r#type: "text",
                            value: slide_title,
                            oninput: move |evt: FormEvent| deck.write().set_title(&evt.value()),
                        }
                        textarea {
                            class: "slide-body-input",
                            value: slide_body,
                            oninput: move |evt: FormEvent| deck.write().set_body(&evt.value()),
                        }
                    }
                }
            }

            div {
                class: "slide-preview-nav",
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: at_start || has_remote,
                    onclick: move |_| deck.write().prev(),
                    "Previous"
                }
                span {
                    class: "slide-preview-counter",
                    if has_remote {
                        "PowerPoint Preview"
                    } else {
                        "{counter}"
                    }
                }
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: at_end || has_remote,
                    onclick: move |_| deck.write().next(),
                    "Next"
                }
            }
        }
    }
}
