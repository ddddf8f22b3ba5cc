use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::use_toasts;

/// Chat input that creates a canvas from the prompt and opens it.
#[component]
pub fn PromptBox(placeholder: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let toasts = use_toasts();
    let mut text = use_signal(String::new);
    let mut pending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let prompt = text.read().trim().to_string();
        if prompt.is_empty() {
            return;
        }
        let canvas = ctx.canvas();
        pending.set(true);
        spawn(async move {
            match canvas.create_from_prompt(&prompt).await {
                Ok(created) => {
                    text.set(String::new());
                    navigator.push(Route::Canvas {
                        id: created.id.to_string(),
                    });
                }
                Err(err) => toasts.error(err.user_message()),
            }
            pending.set(false);
        });
    };

    let disabled = pending() || text.read().trim().is_empty();

    rsx! {
        form { class: "prompt-box", onsubmit: submit,
            textarea {
                class: "prompt-input",
                placeholder: "{placeholder}",
                value: "{text}",
                disabled: pending(),
                oninput: move |evt| text.set(evt.value()),
            }
            button {
                class: "btn btn-primary prompt-send",
                r#type: "submit",
                disabled,
                if pending() { "Creating…" } else { "Send" }
            }
        }
    }
}
