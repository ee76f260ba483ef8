//! Speech capabilities injected into the page host.
//!
//! Recognizers report back through the host inbox as `Msg` values, which
//! stand in for the usual result/error/end callbacks.

use std::io::{self, Write};
use std::sync::mpsc;

use reader_core::Msg;
use reader_logging::reader_debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech recognition not supported")]
    Unsupported,
    #[error("speech output failed: {0}")]
    Output(#[from] io::Error),
    #[error("speech event channel closed")]
    ChannelClosed,
}

pub trait SpeechSynthesizer {
    fn speak(&mut self, text: &str, rate: f32) -> Result<(), SpeechError>;
    fn cancel(&mut self) -> Result<(), SpeechError>;
}

pub trait SpeechRecognizer {
    fn start(&mut self, lang: &str) -> Result<(), SpeechError>;
    fn stop(&mut self) -> Result<(), SpeechError>;
}

/// Prints utterances instead of playing audio.
pub struct TerminalSynthesizer {
    out: Box<dyn Write>,
}

impl TerminalSynthesizer {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }
}

impl SpeechSynthesizer for TerminalSynthesizer {
    fn speak(&mut self, text: &str, rate: f32) -> Result<(), SpeechError> {
        writeln!(self.out, "[speaking at {rate}x] {text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), SpeechError> {
        reader_debug!("Speech cancelled");
        Ok(())
    }
}

/// Recognizer that "hears" transcripts queued by the caller, one per start.
pub struct ScriptedRecognizer {
    transcripts: mpsc::Receiver<String>,
    events: mpsc::Sender<Msg>,
}

impl ScriptedRecognizer {
    pub fn new(transcripts: mpsc::Receiver<String>, events: mpsc::Sender<Msg>) -> Self {
        Self {
            transcripts,
            events,
        }
    }

    fn emit(&self, msg: Msg) -> Result<(), SpeechError> {
        self.events.send(msg).map_err(|_| SpeechError::ChannelClosed)
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn start(&mut self, lang: &str) -> Result<(), SpeechError> {
        reader_debug!("Recognition started lang={}", lang);
        match self.transcripts.try_recv() {
            Ok(transcript) => self.emit(Msg::RecognitionResult { transcript })?,
            Err(_) => self.emit(Msg::RecognitionError {
                error: "no-speech".to_string(),
            })?,
        }
        self.emit(Msg::RecognitionEnded)
    }

    fn stop(&mut self) -> Result<(), SpeechError> {
        self.emit(Msg::RecognitionEnded)
    }
}

/// Stand-in for hosts without a microphone.
#[derive(Debug, Default)]
pub struct UnavailableRecognizer;

impl SpeechRecognizer for UnavailableRecognizer {
    fn start(&mut self, _lang: &str) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop(&mut self) -> Result<(), SpeechError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use reader_core::Msg;

    use super::{ScriptedRecognizer, SpeechRecognizer, UnavailableRecognizer};

    #[test]
    fn scripted_recognizer_emits_result_then_end() {
        let (transcript_tx, transcript_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let mut recognizer = ScriptedRecognizer::new(transcript_rx, event_tx);

        transcript_tx.send("Bold".to_string()).unwrap();
        recognizer.start("en-US").unwrap();
        recognizer.start("en-US").unwrap();

        let events: Vec<Msg> = event_rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                Msg::RecognitionResult {
                    transcript: "Bold".to_string()
                },
                Msg::RecognitionEnded,
                Msg::RecognitionError {
                    error: "no-speech".to_string()
                },
                Msg::RecognitionEnded,
            ]
        );
    }

    #[test]
    fn unavailable_recognizer_refuses_to_start() {
        assert!(UnavailableRecognizer.start("en-US").is_err());
        assert!(UnavailableRecognizer.stop().is_ok());
    }
}
