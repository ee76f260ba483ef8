use reader_core::{Notification, PageViewModel};
use serde::Serialize;

/// Human readable lines for whatever changed between two views.
pub fn render_changes(previous: &PageViewModel, current: &PageViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    let style = current.style_declarations();
    if style != previous.style_declarations() {
        if style.is_empty() {
            lines.push("[style] page default".to_string());
        } else {
            lines.push(format!("[style] {style}"));
        }
    }
    if current.summary != previous.summary {
        if let Some(summary) = &current.summary {
            lines.push(summary.clone());
        }
    }
    lines
}

/// Machine readable snapshot of a page view, written as one JSON line.
#[derive(Debug, Serialize)]
pub struct ViewLine<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    style: String,
    listening: bool,
    summary: Option<&'a str>,
}

pub fn view_json(view: &PageViewModel) -> ViewLine<'_> {
    ViewLine {
        kind: "view",
        style: view.style_declarations(),
        listening: view.listening,
        summary: view.summary.as_deref(),
    }
}

/// Feedback line in the wording of the popup, if the notification warrants one.
pub fn notification_line(notification: &Notification) -> Option<String> {
    match notification {
        Notification::VoiceListening { listening: true } => Some("Listening...".to_string()),
        Notification::VoiceListening { listening: false } => None,
        Notification::VoiceResult { command } => Some(format!("Heard: \"{command}\"")),
        Notification::VoiceError { error } => Some(format!("Error: {error}")),
    }
}
