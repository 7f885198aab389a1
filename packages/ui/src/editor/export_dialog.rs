use api::ExportKind;
use dioxus::prelude::*;

use crate::ModalOverlay;

/// Export settings: pipeline kind and slide count, plus the result link
/// once a download URL exists.
#[component]
pub fn ExportDialog(
    mut export_kind: Signal<ExportKind>,
    mut num_slides: Signal<u32>,
    export_loading: Signal<bool>,
    download_url: Signal<Option<String>>,
    on_export: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let kind_button = |kind: ExportKind| {
        rsx! {
            button {
                class: if export_kind() == kind { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                onclick: move |_| export_kind.set(kind),
                "{kind.label()}"
            }
        }
    };

    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "dialog-body",
                h2 { class: "dialog-title", "Export to PowerPoint" }
                p {
                    class: "dialog-text",
                    "The generation service renders your deck and returns a downloadable file."
                }

                div {
                    class: "dialog-field",
                    label { class: "sidebar-label", "Pipeline" }
                    div {
                        class: "dialog-kinds",
                        {kind_button(ExportKind::Markdown)}
                        {kind_button(ExportKind::Json)}
                    }
                }

                div {
                    class: "dialog-field",
                    label { class: "sidebar-label", "Number of slides" }
                    input {
                        class: "dialog-number",
                        r#type: "number",
                        min: "1",
                        max: "20",
                        value: "{num_slides()}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(value) = evt.value().parse::<u32>() {
                                num_slides.set(value.clamp(1, 20));
                            }
                        },
                    }
                }

                if let Some(url) = download_url() {
                    a {
                        class: "dialog-download",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Open your presentation"
                    }
                }

                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: export_loading(),
                        onclick: move |_| on_export.call(()),
                        if export_loading() { "Exporting..." } else { "Export" }
                    }
                }
            }
        }
    }
}
