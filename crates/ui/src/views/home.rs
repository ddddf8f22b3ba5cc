use dioxus::prelude::*;
use dioxus_router::use_navigator;
use replay_core::model::SessionId;
use services::DeleteOutcome;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{DeleteDialog, PromptBox, use_toasts};
use crate::vm::{CategoryCardVm, SessionCardVm, map_category_cards, map_session_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toasts();
    let catalog = ctx.catalog();
    let categories = map_category_cards(&catalog.group_by_category());
    let sessions = map_session_cards(&catalog.list_sessions());
    let mut expanded = use_signal(|| true);
    let mut pending_delete = use_signal(|| None::<SessionId>);

    let confirm_delete = move |()| {
        let Some(id) = pending_delete.write().take() else {
            return;
        };
        match catalog.request_delete(&id) {
            DeleteOutcome::NotSupported => {
                toasts.info("Deleting sessions is not supported yet.");
            }
        }
    };

    let toggle_label = if expanded() { "Hide" } else { "Show" };

    rsx! {
        div { class: "page home",
            h1 { class: "home-title", "What would you like to create?" }
            PromptBox { placeholder: "Describe a canvas to start from…" }

            section { class: "recent-sessions",
                div { class: "section-header",
                    h2 { "Recent Sessions" }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        aria_expanded: "{expanded}",
                        onclick: move |_| expanded.set(!expanded()),
                        "{toggle_label}"
                    }
                }
                if expanded() {
                    if sessions.is_empty() {
                        p { class: "empty", "No sessions recorded yet." }
                    } else {
                        div { class: "category-grid",
                            for category in categories {
                                CategoryCard { key: "{category.name}", category }
                            }
                        }
                        div { class: "session-grid",
                            for card in sessions {
                                SessionCard {
                                    key: "{card.id}",
                                    on_delete: move |id: SessionId| pending_delete.set(Some(id)),
                                    card,
                                }
                            }
                        }
                    }
                }
            }

            if let Some(id) = pending_delete() {
                DeleteDialog {
                    session_id: id.to_string(),
                    on_confirm: confirm_delete,
                    on_cancel: move |()| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn CategoryCard(category: CategoryCardVm) -> Element {
    let navigator = use_navigator();
    let target = category.first_session.clone();

    rsx! {
        button {
            class: "card category-card",
            r#type: "button",
            disabled: target.is_none(),
            onclick: move |_| {
                if let Some(id) = &target {
                    navigator.push(Route::Session { id: id.to_string() });
                }
            },
            h3 { "{category.name}" }
            p { class: "muted", "{category.count_label}" }
        }
    }
}

#[component]
fn SessionCard(card: SessionCardVm, on_delete: EventHandler<SessionId>) -> Element {
    let navigator = use_navigator();
    let play_id = card.id.clone();
    let delete_id = card.id.clone();

    rsx! {
        article { class: "card session-card",
            div { class: "session-card-header",
                span { class: "badge score", "{card.score_label}" }
                if card.has_analysis {
                    span { class: "badge analysis", "Analysis Available" }
                }
            }
            p { class: "session-id", "{card.id}" }
            p { class: "muted", "{card.started_at_str}" }
            p { class: "muted", "{card.duration_label}" }
            p { class: "session-preview", "{card.preview}" }
            div { class: "session-card-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Session { id: play_id.to_string() });
                    },
                    "Play"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
