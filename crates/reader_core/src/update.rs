use reader_engine::{requested_sentence_count, summarize, truncate_chars, DEFAULT_SENTENCE_COUNT};
use reader_logging::{reader_debug, reader_info};

use crate::voice::{parse_voice_command, VoiceCommand};
use crate::{Effect, Msg, Notification, PageState, Response};

pub const NO_TEXT_MESSAGE: &str = "No visible text found on this page.";
pub const NO_SUMMARY_MESSAGE: &str = "No summary available.";
pub const RECOGNITION_UNSUPPORTED: &str = "Speech recognition not supported";

const FONT_STEP_PX: u32 = 4;
const VOICE_FONT_MIN_PX: u32 = 12;
const VOICE_FONT_MAX_PX: u32 = 30;
const SPACING_STEP: u32 = 30;
const SPACING_MIN: u32 = 100;
const SPACING_MAX: u32 = 300;
const FEEDBACK_RATE: f32 = 1.0;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded { text } => {
            state.load_page(text);
            Vec::new()
        }
        Msg::SelectionChanged { text } => {
            state.set_selection(text);
            Vec::new()
        }
        Msg::GetSelection => vec![Effect::Respond(Response::Text {
            text: state.selection().to_string(),
        })],
        Msg::GetPageText => vec![Effect::Respond(Response::Text {
            text: state.page_text().trim().to_string(),
        })],
        Msg::StartVoiceRecognition => start_voice_recognition(&mut state),
        Msg::FontSize { value } => {
            state.set_font_size(value);
            Vec::new()
        }
        Msg::LineHeight { value } => {
            match line_height_hundredths(value) {
                Some(hundredths) => state.set_line_height(hundredths),
                None => reader_debug!("Ignoring line height {}", value),
            }
            Vec::new()
        }
        Msg::FontFamily { value } => {
            let family = (value != "default").then_some(value);
            state.set_font_family(family);
            Vec::new()
        }
        Msg::Bold => {
            state.toggle_bold();
            Vec::new()
        }
        Msg::Italic => {
            state.toggle_italic();
            Vec::new()
        }
        Msg::Read { rate } => {
            let rate = rate
                .filter(|rate| rate.is_finite() && *rate > 0.0)
                .unwrap_or(1.0);
            read_page(&state, rate)
        }
        Msg::StopReading => vec![Effect::CancelSpeech],
        Msg::SummarizePage { sentence_count } => {
            let count = sentence_count
                .map(requested_sentence_count)
                .unwrap_or(DEFAULT_SENTENCE_COUNT);
            summarize_page(&mut state, count);
            Vec::new()
        }
        Msg::RecognitionResult { transcript } => {
            let command = transcript.to_lowercase();
            let mut effects = vec![Effect::Notify(Notification::VoiceResult {
                command: command.clone(),
            })];
            effects.extend(apply_voice_command(&mut state, &command));
            effects
        }
        Msg::RecognitionError { error } => {
            state.set_listening(false);
            vec![Effect::Notify(Notification::VoiceError { error })]
        }
        Msg::RecognitionEnded => {
            state.set_listening(false);
            vec![Effect::Notify(Notification::VoiceListening { listening: false })]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_voice_recognition(state: &mut PageState) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(3);
    if !state.recognition_available() {
        effects.push(Effect::Notify(Notification::VoiceError {
            error: RECOGNITION_UNSUPPORTED.to_string(),
        }));
    } else if state.listening() {
        // A second request while listening stops the running session.
        effects.push(Effect::StopRecognition);
    } else {
        state.set_listening(true);
        effects.push(Effect::Notify(Notification::VoiceListening { listening: true }));
        effects.push(Effect::StartRecognition {
            lang: state.recognition_lang().to_string(),
        });
    }
    effects.push(Effect::Respond(Response::Started { started: true }));
    effects
}

fn line_height_hundredths(value: f32) -> Option<u32> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    Some((value * 100.0).round() as u32)
}

fn read_page(state: &PageState, rate: f32) -> Vec<Effect> {
    let text = truncate_chars(state.page_text(), state.read_limit_chars());
    if text.trim().is_empty() {
        reader_debug!("Nothing to read aloud");
        return Vec::new();
    }
    vec![Effect::Speak {
        text: text.to_string(),
        rate,
    }]
}

fn summarize_page(state: &mut PageState, sentence_count: usize) {
    let text = state.page_text().trim();
    let display = if text.is_empty() {
        NO_TEXT_MESSAGE.to_string()
    } else {
        let summary = summarize(text, sentence_count);
        if summary.is_empty() {
            NO_SUMMARY_MESSAGE.to_string()
        } else {
            summary
        }
    };
    state.set_summary(display);
}

fn apply_voice_command(state: &mut PageState, command: &str) -> Vec<Effect> {
    match parse_voice_command(command) {
        VoiceCommand::IncreaseFont => {
            let current = state.style().effective_font_size_px();
            state.set_font_size(current.saturating_add(FONT_STEP_PX).min(VOICE_FONT_MAX_PX));
            say("Font size increased")
        }
        VoiceCommand::DecreaseFont => {
            let current = state.style().effective_font_size_px();
            state.set_font_size(current.saturating_sub(FONT_STEP_PX).max(VOICE_FONT_MIN_PX));
            say("Font size decreased")
        }
        VoiceCommand::ToggleBold => {
            let bold = state.toggle_bold();
            say(&format!("Bold {}", enabled_word(bold)))
        }
        VoiceCommand::ToggleItalic => {
            let italic = state.toggle_italic();
            say(&format!("Italic {}", enabled_word(italic)))
        }
        VoiceCommand::IncreaseSpacing => {
            let current = state.style().effective_line_height_hundredths();
            state.set_line_height(current.saturating_add(SPACING_STEP).min(SPACING_MAX));
            say("Line spacing increased")
        }
        VoiceCommand::DecreaseSpacing => {
            let current = state.style().effective_line_height_hundredths();
            state.set_line_height(current.saturating_sub(SPACING_STEP).max(SPACING_MIN));
            say("Line spacing decreased")
        }
        VoiceCommand::SetFont(font) => {
            state.set_font_family(Some(font.family().to_string()));
            say(&format!("Font changed to {}", font.family()))
        }
        VoiceCommand::ReadPage => {
            let text = truncate_chars(state.page_text(), state.read_limit_chars());
            if text.trim().is_empty() {
                return Vec::new();
            }
            say(text)
        }
        VoiceCommand::StopReading => vec![Effect::CancelSpeech],
        VoiceCommand::Unknown => {
            reader_info!("Unrecognized voice command: {:?}", command);
            say("Sorry, I didn't understand that command")
        }
    }
}

/// Spoken feedback interrupts whatever is currently being read.
fn say(text: &str) -> Vec<Effect> {
    vec![
        Effect::CancelSpeech,
        Effect::Speak {
            text: text.to_string(),
            rate: FEEDBACK_RATE,
        },
    ]
}

fn enabled_word(on: bool) -> &'static str {
    if on {
        "enabled"
    } else {
        "disabled"
    }
}
