//! Transient toast notifications. Every failure and success message in the
//! app surfaces here; nothing is logged to the user anywhere else.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    }

    fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

const TOAST_SECS: u64 = 4;

/// Show a toast and schedule its dismissal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = toasts.write().push(level, message);

    let mut toasts = *toasts;
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_SECS)).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(std::time::Duration::from_secs(TOAST_SECS)).await;

        toasts.write().dismiss(id);
    });
}

/// Provider component: owns the toast list and renders the stack.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        document::Stylesheet { href: crate::UI_CSS }
        div {
            class: "toast-stack",
            for toast in toasts().entries().iter() {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Info, "one");
        let b = toasts.push(ToastLevel::Error, "two");
        assert!(b > a);
        assert_eq!(toasts.entries().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Info, "one");
        let b = toasts.push(ToastLevel::Success, "two");

        toasts.dismiss(a);
        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.entries()[0].id, b);

        // Dismissing an unknown id is harmless.
        toasts.dismiss(999);
        assert_eq!(toasts.entries().len(), 1);
    }
}
