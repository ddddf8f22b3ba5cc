use std::time::Duration;

use dioxus::prelude::*;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Transient notifications shared by every view under the layout.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|toast| toast.id != id);
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut next_id = self.next_id;
        let mut items = self.items;
        let id = next_id();
        next_id.set(id + 1);
        items.write().push(Toast { id, kind, message });

        let toasts = *self;
        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            toasts.dismiss(id);
        });
    }
}

/// Install the toast slot for the current subtree.
pub fn use_toast_provider() -> Toasts {
    use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let items = toasts.items.read().clone();

    rsx! {
        div { class: "toast-stack", role: "status",
            for toast in items {
                div { key: "{toast.id}", class: toast.kind.class(),
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        r#type: "button",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
