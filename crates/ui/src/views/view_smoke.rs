use storage::{SessionRepository, Storage};
use storage::json::repository_from_str;

use chrono::{DateTime, Utc};

use crate::vm::{format_card_date, format_datetime};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

fn fixture_time(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_categories_and_cards() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Recent Sessions"), "missing section in {html}");
    assert!(html.contains("Checkout"), "missing category in {html}");
    assert!(html.contains("2 sessions available"), "missing count in {html}");
    assert!(html.contains("1 session available"), "missing singular in {html}");
    assert!(html.contains("Uncategorized"), "missing bucket in {html}");
    assert!(html.contains("Score: 4/10"), "missing score in {html}");
    assert!(html.contains("Duration: 111s"), "missing duration in {html}");
    let started = format_card_date(fixture_time("2024-05-02T14:03:11Z"));
    assert!(html.contains(&started), "missing {started} in {html}");
    assert!(html.contains("Analysis Available"), "missing badge in {html}");
    assert!(
        html.contains("No journey steps available"),
        "missing empty preview in {html}"
    );
    assert_eq!(harness.storage.sessions.list_sessions().len(), 4);
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_state() {
    let storage = Storage::in_memory(repository_from_str(r#"{"sessions": []}"#).unwrap());
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No sessions recorded yet."),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_renders_replay_and_analysis() {
    let mut harness = setup_view_harness(ViewKind::Session("sess-checkout-001".to_string()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("replay-video"), "missing video in {html}");
    let started = format!(
        "Session started at: {}",
        format_datetime(fixture_time("2024-05-02T14:03:11Z"))
    );
    assert!(html.contains(&started), "missing {started} in {html}");
    assert!(
        html.contains("sess-checkout-001.mp4"),
        "missing video source in {html}"
    );
    assert!(
        html.contains("Play the video to follow the journey."),
        "timeline should start empty in {html}"
    );
    assert!(!html.contains("Appears at:"), "no step should be visible in {html}");
    assert!(html.contains("Recommendations"), "missing analysis in {html}");
    assert!(
        html.contains("Disable the apply button"),
        "missing recommendation in {html}"
    );
    assert!(html.contains("41s"), "missing key event in {html}");
    assert!(html.contains("Open full session"), "missing session link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_without_analysis() {
    let mut harness = setup_view_harness(ViewKind::Session("sess-checkout-002".to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No analysis available for this session."),
        "missing placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_unknown_id() {
    let mut harness = setup_view_harness(ViewKind::Session("does-not-exist".to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Session not found."), "missing message in {html}");
    assert!(!html.contains("replay-video"), "unexpected video in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn canvas_view_smoke_shows_id() {
    let mut harness = setup_view_harness(ViewKind::Canvas("canvas-7".to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("canvas-7"), "missing id in {html}");
}
