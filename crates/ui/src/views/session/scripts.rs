use services::SeekCommand;

pub(super) const VIDEO_ELEMENT_ID: &str = "replay-video";

pub(super) fn current_time_script() -> String {
    format!(
        r#"const video = document.getElementById("{VIDEO_ELEMENT_ID}");
return video ? video.currentTime : 0;"#
    )
}

pub(super) fn seek_script(command: SeekCommand) -> String {
    let time = command.time;
    let resume = command.resume;
    format!(
        r#"(function() {{
    const video = document.getElementById("{VIDEO_ELEMENT_ID}");
    if (!video) {{
        return;
    }}
    video.currentTime = {time};
    if ({resume}) {{
        const started = video.play();
        if (started && started.catch) {{
            started.catch(() => {{}});
        }}
    }}
}})();"#
    )
}

pub(super) fn scroll_into_view_script(dom_id: &str) -> String {
    format!(
        r#"requestAnimationFrame(() => {{
    const el = document.getElementById({dom_id:?});
    if (el) {{
        el.scrollIntoView({{ behavior: "smooth", block: "nearest" }});
    }}
}});"#
    )
}
