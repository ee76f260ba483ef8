use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Everything that can happen to a page, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Msg {
    /// Host extracted the visible text of the page.
    PageLoaded { text: String },
    /// Host reported a new text selection.
    SelectionChanged { text: String },
    GetSelection,
    GetPageText,
    StartVoiceRecognition,
    /// Font size in pixels. Sliders send it as a string.
    FontSize {
        #[serde(deserialize_with = "number_or_string")]
        value: u32,
    },
    /// Line height multiplier, e.g. `1.5`.
    LineHeight {
        #[serde(deserialize_with = "number_or_string")]
        value: f32,
    },
    /// Font family name; `"default"` restores the page font.
    FontFamily { value: String },
    Bold,
    Italic,
    /// Read the page aloud at `rate` (1.0 when absent or not positive).
    Read { rate: Option<f32> },
    StopReading,
    SummarizePage {
        #[serde(rename = "sentenceCount")]
        sentence_count: Option<i64>,
    },
    /// Speech recognizer produced a transcript.
    RecognitionResult { transcript: String },
    RecognitionError { error: String },
    RecognitionEnded,
    /// Fallback for placeholder wiring.
    NoOp,
}

fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}
