use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CanvasView, HomeView, SessionView, ToastHost, use_toast_provider};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/session/:id", SessionView)] Session { id: String },
        #[route("/canvas/:id", CanvasView)] Canvas { id: String },
}

#[component]
fn Layout() -> Element {
    use_toast_provider();

    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "topbar-home", to: Route::Home {}, "Session Replays" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}
