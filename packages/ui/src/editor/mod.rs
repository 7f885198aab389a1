//! # Presentation editor
//!
//! The editor has two display modes and no more state machine than that:
//!
//! - **Local slides**: a [`store::Deck`] in a signal, fabricated by the
//!   placeholder generator and editable in place.
//! - **Remote file**: once an export succeeds the download URL takes over
//!   and the preview becomes an embedded document viewer; the local deck is
//!   ignored from then on.
//!
//! A failed export changes nothing: the error becomes a toast and every
//! signal keeps its previous value.

mod export_dialog;
mod sidebar;
mod slide_preview;

pub use export_dialog::ExportDialog;
pub use sidebar::EditorSidebar;
pub use slide_preview::SlidePreview;

use api::{AppConfig, ExportKind, GenerateClient, GenerateRequest, Subscription};
use dioxus::prelude::*;
use store::prompts::combined_prompt;
use store::Deck;

use crate::{push_toast, use_auth, LoginPromptModal, ToastLevel};

/// Sidebar tab selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorTab {
    Generate,
    Slides,
    Design,
}

/// Artificial latency of the local placeholder generator.
const FAKE_GENERATE_MS: u64 = 2000;

async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[component]
pub fn PresentationEditor() -> Element {
    let auth = use_auth();
    let mut toasts = crate::use_toasts();
    let client = use_hook(|| GenerateClient::new(&AppConfig::from_env()));
    let subscription = Subscription::new();

    let mut deck = use_signal(Deck::welcome);
    let mut title = use_signal(|| "Untitled Presentation".to_string());
    let prompt = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut incoming = use_signal(|| false);
    let mut export_loading = use_signal(|| false);
    let export_kind = use_signal(|| ExportKind::Markdown);
    let num_slides = use_signal(|| 5u32);
    let mut download_url = use_signal(|| Option::<String>::None);
    let mut export_open = use_signal(|| false);
    let mut login_prompt = use_signal(|| false);
    let selected_template = use_signal(|| Option::<String>::None);
    let selected_theme = use_signal(|| Option::<String>::None);
    let selected_layout = use_signal(|| Option::<String>::None);
    let mut sidebar_open = use_signal(|| true);
    let active_tab = use_signal(|| EditorTab::Generate);

    // Local generation: artificial delay, then the fixed placeholder deck.
    let handle_generate = move |_| {
        if auth().user.is_none() {
            login_prompt.set(true);
            return;
        }
        let topic = prompt().trim().to_string();
        if topic.is_empty() {
            push_toast(
                &mut toasts,
                ToastLevel::Error,
                "Please enter a topic or description for your presentation",
            );
            return;
        }
        if !subscription.can_create_presentation() {
            return;
        }

        loading.set(true);
        incoming.set(true);
        spawn(async move {
            sleep_ms(FAKE_GENERATE_MS).await;

            deck.set(Deck::placeholder(&topic));
            title.set(topic);
            loading.set(false);
            incoming.set(false);
            subscription.record_presentation();
            push_toast(
                &mut toasts,
                ToastLevel::Success,
                "Presentation generated successfully!",
            );
        });
    };

    // Remote export: combined prompt to the generation API; on success the
    // preview switches to the downloaded file.
    let export_client = client.clone();
    let handle_export = move |_| {
        if auth().user.is_none() {
            login_prompt.set(true);
            return;
        }
        let client = export_client.clone();
        let request = GenerateRequest {
            topic: combined_prompt(
                &prompt(),
                selected_template().as_deref(),
                selected_theme().as_deref(),
                selected_layout().as_deref(),
            ),
            num_slides: Some(num_slides()),
        };
        let kind = export_kind();

        export_loading.set(true);
        spawn(async move {
            match client.generate(kind, &request).await {
                Ok(response) => {
                    download_url.set(Some(response.download_url));
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Presentation export successful! Click the link to open your presentation.",
                    );
                }
                Err(err) => {
                    tracing::error!("export failed: {err}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Failed to export presentation. Please try again.",
                    );
                }
            }
            export_loading.set(false);
        });
    };

    let mut open_export = move |_: ()| {
        if auth().user.is_none() {
            login_prompt.set(true);
        } else {
            export_open.set(true);
        }
    };

    rsx! {
        document::Stylesheet { href: crate::UI_CSS }
        div {
            class: "editor-page",

            // Header: title, save (local-only), export, sidebar toggle.
            header {
                class: "editor-header",
                button {
                    class: "btn btn-ghost editor-sidebar-toggle",
                    onclick: move |_| sidebar_open.set(!sidebar_open()),
                    "\u{2630}"
                }
                input {
                    class: "editor-title-input",
                    r#type: "text",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                div {
                    class: "editor-header-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            push_toast(&mut toasts, ToastLevel::Success, "Presentation saved successfully!");
                        },
                        "Save"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| open_export(()),
                        "Export"
                    }
                }
            }

            div {
                class: "editor-main",
                EditorSidebar {
                    prompt,
                    loading,
                    incoming,
                    deck,
                    active_tab,
                    selected_template,
                    selected_theme,
                    selected_layout,
                    sidebar_open,
                    on_generate: handle_generate,
                    on_export: open_export,
                }
                SlidePreview { deck, download_url }
            }
        }

        if export_open() {
            ExportDialog {
                export_kind,
                num_slides,
                export_loading,
                download_url,
                on_export: handle_export,
                on_close: move |_| export_open.set(false),
            }
        }
        if login_prompt() {
            LoginPromptModal { on_close: move |_| login_prompt.set(false) }
        }
    }
}
