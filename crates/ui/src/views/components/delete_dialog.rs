use dioxus::prelude::*;

#[component]
pub fn DeleteDialog(
    session_id: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog", role: "dialog", aria_modal: "true",
                h3 { "Delete session?" }
                p { "Session {session_id} will be removed from this list." }
                div { class: "dialog-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
