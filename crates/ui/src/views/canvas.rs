use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn CanvasView(id: String) -> Element {
    rsx! {
        div { class: "page canvas",
            h1 { "Canvas" }
            p { class: "muted", "Canvas {id} was created. The editor opens here." }
            Link { to: Route::Home {}, "Back to sessions" }
        }
    }
}
