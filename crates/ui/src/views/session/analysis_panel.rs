use dioxus::prelude::*;

use crate::vm::AnalysisVm;

#[component]
pub(super) fn AnalysisPanel(
    analysis: AnalysisVm,
    on_seek: EventHandler<f64>,
    on_open_url: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "analysis-panel",
            h2 { "Session Analysis" }
            if let Some(url) = analysis.session_url.clone() {
                button {
                    class: "btn btn-link session-url",
                    r#type: "button",
                    onclick: move |_| on_open_url.call(url.clone()),
                    "Open full session"
                }
            }
            if let Some(analyzed_at) = &analysis.analyzed_at {
                p { class: "muted", "Analyzed {analyzed_at}" }
            }

            if analysis.has_analysis {
                h3 { "Recommendations" }
                if analysis.recommendations.is_empty() {
                    p { class: "muted", "No recommendations." }
                }
                ul { class: "recommendations",
                    for (index, recommendation) in analysis.recommendations.iter().enumerate() {
                        li { key: "{index}", "{recommendation}" }
                    }
                }
            } else {
                p { class: "muted", "No analysis available for this session." }
            }

            h3 { "Key Events" }
            if analysis.key_events.is_empty() {
                p { class: "muted", "No errors or rage clicks recorded." }
            }
            ul { class: "key-events",
                for (index, event) in analysis.key_events.iter().cloned().enumerate() {
                    li { key: "{index}",
                        button {
                            class: "btn btn-link key-event",
                            r#type: "button",
                            onclick: move |_| on_seek.call(event.time),
                            span { class: "key-event-time", "{event.time_label}" }
                            " {event.description}"
                        }
                    }
                }
            }
        }
    }
}
