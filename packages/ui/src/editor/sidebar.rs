use dioxus::prelude::*;
use store::prompts::{
    display_prompt, layout_names, prompt_for_template, template_names, theme_names,
};
use store::Deck;

use super::EditorTab;
use crate::{push_toast, use_toasts, ToastLevel};

/// Left panel: generate / slides / design tabs.
#[component]
pub fn EditorSidebar(
    mut prompt: Signal<String>,
    loading: Signal<bool>,
    incoming: Signal<bool>,
    mut deck: Signal<Deck>,
    mut active_tab: Signal<EditorTab>,
    mut selected_template: Signal<Option<String>>,
    mut selected_theme: Signal<Option<String>>,
    mut selected_layout: Signal<Option<String>>,
    sidebar_open: Signal<bool>,
    on_generate: EventHandler<()>,
    on_export: EventHandler<()>,
) -> Element {
    let mut toasts = use_toasts();

    let tab_button = |tab: EditorTab, label: &'static str| {
        rsx! {
            button {
                class: if active_tab() == tab { "tab tab-active" } else { "tab" },
                onclick: move |_| active_tab.set(tab),
                "{label}"
                if tab == EditorTab::Slides && incoming() {
                    span { class: "tab-incoming", "Incoming" }
                }
            }
        }
    };

    rsx! {
        aside {
            class: if sidebar_open() { "editor-sidebar" } else { "editor-sidebar editor-sidebar-closed" },

            div {
                class: "tab-list",
                {tab_button(EditorTab::Generate, "Generate")}
                {tab_button(EditorTab::Slides, "Slides")}
                {tab_button(EditorTab::Design, "Design")}
            }

            match active_tab() {
                EditorTab::Generate => rsx! {
                    div {
                        class: "sidebar-section",
                        label { class: "sidebar-label", "What's your presentation about?" }
                        textarea {
                            class: "sidebar-prompt",
                            placeholder: "E.g. A marketing plan for our new product launch",
                            value: prompt(),
                            oninput: move |evt: FormEvent| prompt.set(evt.value()),
                        }
                        div {
                            class: "sidebar-actions",
                            button {
                                class: "btn btn-primary btn-block",
                                disabled: loading(),
                                onclick: move |_| on_generate.call(()),
                                if loading() { "Generating..." } else { "Generate presentation" }
                            }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| on_export.call(()),
                                "Export"
                            }
                        }

                        div {
                            class: "sidebar-group",
                            h3 { class: "sidebar-label", "Templates" }
                            div {
                                class: "selector-grid selector-grid-2",
                                for name in template_names() {
                                    button {
                                        key: "{name}",
                                        class: if selected_template().as_deref() == Some(name) { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                                        title: prompt_for_template(&prompt(), name),
                                        onclick: move |_| {
                                            selected_template.set(Some(name.to_string()));
                                            push_toast(&mut toasts, ToastLevel::Success, &format!("{name} template selected"));
                                        },
                                        "{name}"
                                    }
                                }
                            }
                        }
                    }
                },
                EditorTab::Slides => {
                    let current = deck();
                    let titles: Vec<String> = current
                        .slides()
                        .iter()
                        .map(|slide| slide.title.clone())
                        .collect();
                    rsx! {
                        div {
                            class: "sidebar-section",
                            for (index, slide_title) in titles.into_iter().enumerate() {
                                button {
                                    key: "{index}",
                                    class: if current.position() == index { "slide-item slide-item-active" } else { "slide-item" },
                                    onclick: move |_| deck.write().select(index),
                                    span { class: "slide-item-number", {format!("{}", index + 1)} }
                                    span { class: "slide-item-title", "{slide_title}" }
                                }
                            }
                        }
                    }
                },
                EditorTab::Design => rsx! {
                    div {
                        class: "sidebar-section",
                        div {
                            class: "sidebar-group",
                            h3 { class: "sidebar-label", "Theme" }
                            div {
                                class: "selector-grid selector-grid-3",
                                for name in theme_names() {
                                    button {
                                        key: "{name}",
                                        class: if selected_theme().as_deref() == Some(name) { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                                        onclick: move |_| {
                                            selected_theme.set(Some(name.to_string()));
                                            push_toast(&mut toasts, ToastLevel::Success, &format!("{name} theme selected"));
                                        },
                                        "{name}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "sidebar-group",
                            h3 { class: "sidebar-label", "Layout" }
                            div {
                                class: "selector-grid selector-grid-2",
                                for name in layout_names() {
                                    button {
                                        key: "{name}",
                                        class: if selected_layout().as_deref() == Some(name) { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                                        onclick: move |_| {
                                            selected_layout.set(Some(name.to_string()));
                                            push_toast(&mut toasts, ToastLevel::Success, &format!("{name} layout selected"));
                                        },
                                        "{name}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "sidebar-group",
                            h3 { class: "sidebar-label", "Prompt preview" }
                            p {
                                class: "sidebar-preview",
                                {display_prompt(
                                    prompt().trim(),
                                    selected_template().as_deref(),
                                    selected_theme().as_deref(),
                                    selected_layout().as_deref(),
                                )}
                            }
                        }
                    }
                },
            }
        }
    }
}
