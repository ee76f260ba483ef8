use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Reply to the message that was just handled.
    Respond(Response),
    /// Tell the popup about voice recognition progress.
    Notify(Notification),
    Speak { text: String, rate: f32 },
    CancelSpeech,
    StartRecognition { lang: String },
    StopRecognition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Text { text: String },
    Started { started: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Notification {
    VoiceListening { listening: bool },
    VoiceResult { command: String },
    VoiceError { error: String },
}
