use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::Link;
use replay_core::model::Session;
use services::{PlaybackEvent, ReplayViewer};

use super::analysis_panel::AnalysisPanel;
use super::scripts::{
    VIDEO_ELEMENT_ID, current_time_script, scroll_into_view_script, seek_script,
};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::components::PromptBox;
use crate::vm::{AnalysisVm, format_datetime, map_timeline, step_dom_id};

#[component]
pub fn SessionView(id: String) -> Element {
    let ctx = use_context::<AppContext>();

    match ctx.catalog().find_by_raw_id(&id) {
        Ok(Some(session)) => {
            let key = session.id().to_string();
            rsx! {
                ReplayPane { key: "{key}", session }
            }
        }
        Ok(None) => rsx! {
            div { class: "page session-missing",
                p { "Session not found." }
                Link { to: Route::Home {}, "Back to sessions" }
            }
        },
        Err(err) => {
            tracing::warn!(session_id = %id, error = %err, "session lookup failed");
            let message = ViewError::from(&err).message();
            rsx! {
                div { class: "page session-missing",
                    p { class: "error", "{message}" }
                }
            }
        }
    }
}

#[component]
fn ReplayPane(session: Arc<Session>) -> Element {
    let ctx = use_context::<AppContext>();
    let initial = Arc::clone(&session);
    let mut viewer = use_signal(move || ReplayViewer::new(initial));

    let current = Arc::clone(&session);
    let on_playback = use_callback(move |event: PlaybackEvent| {
        let session = Arc::clone(&current);
        spawn(async move {
            let time = match eval(&current_time_script()).join::<f64>().await {
                Ok(time) => time,
                Err(err) => {
                    tracing::debug!(?event, error = ?err, "could not read playback time");
                    return;
                }
            };
            let change = {
                let mut state = viewer.write();
                state.open(session);
                state.handle(event, time)
            };
            if let Some(index) = change.and_then(|change| change.scroll_target()) {
                let _ = eval(&scroll_into_view_script(&step_dom_id(index)));
            }
        });
    });

    let on_seek = move |time: f64| {
        let command = viewer.read().seek_to(time);
        let _ = eval(&seek_script(command));
    };

    let timeline = {
        let state = viewer.read();
        map_timeline(state.session().journey(), state.active_index())
    };
    let analysis = AnalysisVm::from(session.as_ref());
    let journey_empty = session.journey().is_empty();
    let video_src = session.video().to_string();
    let started_at = format_datetime(session.start_time());

    rsx! {
        div { class: "page session-layout",
            aside { class: "timeline-pane",
                h2 { "User Journey" }
                p { class: "muted session-started", "Session started at: {started_at}" }
                if journey_empty {
                    p { class: "empty", "No journey steps available" }
                } else if timeline.is_empty() {
                    p { class: "empty", "Play the video to follow the journey." }
                }
                ol { class: "timeline",
                    for step in timeline {
                        li {
                            key: "{step.dom_id}",
                            id: "{step.dom_id}",
                            class: if step.is_active { "timeline-step active" } else { "timeline-step" },
                            "data-key-event": "{step.is_key_event}",
                            p { class: "step-description", "{step.description}" }
                            p { class: "muted step-time", "{step.appears_at}" }
                        }
                    }
                }
            }
            section { class: "replay-pane",
                video {
                    id: VIDEO_ELEMENT_ID,
                    class: "replay-video",
                    src: "{video_src}",
                    controls: true,
                    ontimeupdate: move |_| on_playback.call(PlaybackEvent::TimeUpdate),
                    onseeked: move |_| on_playback.call(PlaybackEvent::Seeked),
                    onplay: move |_| on_playback.call(PlaybackEvent::Playing),
                }
                AnalysisPanel {
                    analysis,
                    on_seek,
                    on_open_url: move |url: String| ctx.open_url(&url),
                }
                PromptBox { placeholder: "Ask for a canvas based on this session…" }
            }
        }
    }
}
