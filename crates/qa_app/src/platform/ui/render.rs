use qa_core::{AppViewModel, Variant};

pub fn banner(variant: Variant, backend_url: &str) -> String {
    let title = match variant {
        Variant::Video => "YouTube Video Analyzer: ask questions to any YouTube video.",
        Variant::Topic => "Topic Explorer: summarize a topic, then ask about it.",
    };
    format!("{title}\nBackend: {backend_url}")
}

pub fn help(variant: Variant) -> String {
    let context_line = match variant {
        Variant::Video => "  /analyze <url>     analyze a video URL",
        Variant::Topic => "  /topic <text>      summarize a topic",
    };
    [
        "Commands:",
        context_line,
        "  /ask <question>    ask about the analyzed context",
        "  <question>         same as /ask",
        "  /context <text>    edit the context input without submitting",
        "  /question <text>   edit the question input without submitting",
        "  /submit            press Enter in the context input",
        "  /help              show this help",
        "  /quit              leave",
    ]
    .join("\n")
}

/// Lines describing what changed between two snapshots.
pub fn render(previous: &AppViewModel, view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.context_phase.is_pending() && !previous.context_phase.is_pending() {
        lines.push(match view.variant {
            Variant::Video => "⏳ Analyzing video...".to_string(),
            Variant::Topic => "⏳ Summarizing topic...".to_string(),
        });
    }
    if view.question_phase.is_pending() && !previous.question_phase.is_pending() {
        lines.push("⏳ Thinking...".to_string());
    }

    if let Some(summary) = changed(&previous.summary, &view.summary) {
        lines.push(format!("Summary\n{summary}"));
    }
    if view.variant == Variant::Topic && view.question_visible && !previous.question_visible {
        lines.push("Ask a question about this topic.".to_string());
    }
    if let Some(message) = changed(&previous.message, &view.message) {
        lines.push(message.clone());
    }
    if let Some(answer) = changed(&previous.answer, &view.answer) {
        lines.push(format!("Answer\n{answer}"));
    }
    if let Some(alert) = changed(&previous.alert, &view.alert) {
        lines.push(format!("[!] {alert}"));
    }

    lines
}

fn changed<'a>(previous: &Option<String>, current: &'a Option<String>) -> Option<&'a String> {
    match current {
        Some(text) if previous.as_ref() != Some(text) => Some(text),
        _ => None,
    }
}
