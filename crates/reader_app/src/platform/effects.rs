use std::io::{self, Write};
use std::sync::mpsc;

use reader_core::{update, Effect, Msg, Notification, PageState, PageViewModel, Response};
use reader_logging::{reader_debug, reader_warn};
use serde::Serialize;

use super::render::{notification_line, render_changes, view_json};
use super::speech::{SpeechRecognizer, SpeechSynthesizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Feedback lines meant for a person at a terminal.
    Human,
    /// One JSON value per line.
    Json,
}

pub struct Speech {
    pub synthesizer: Box<dyn SpeechSynthesizer>,
    pub recognizer: Box<dyn SpeechRecognizer>,
}

/// Owns one page's state and executes the effects `update` asks for.
pub struct PageHost {
    state: PageState,
    last_view: PageViewModel,
    speech: Speech,
    out: Box<dyn Write>,
    mode: OutputMode,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl PageHost {
    pub fn new(
        state: PageState,
        speech: Speech,
        out: Box<dyn Write>,
        mode: OutputMode,
        inbox: (mpsc::Sender<Msg>, mpsc::Receiver<Msg>),
    ) -> Self {
        let (msg_tx, msg_rx) = inbox;
        let last_view = state.view();
        Self {
            state,
            last_view,
            speech,
            out,
            mode,
            msg_tx,
            msg_rx,
        }
    }

    /// Handle `msg` and then everything capabilities queued in response.
    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let mut next = Some(msg);
        while let Some(msg) = next.take().or_else(|| self.msg_rx.try_recv().ok()) {
            self.dispatch_one(msg)?;
        }
        Ok(())
    }

    fn dispatch_one(&mut self, msg: Msg) -> io::Result<()> {
        reader_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        for effect in effects {
            self.run_effect(effect)?;
        }
        if was_dirty {
            self.render(view)?;
        }
        Ok(())
    }

    fn run_effect(&mut self, effect: Effect) -> io::Result<()> {
        match effect {
            Effect::Respond(response) => self.respond(&response),
            Effect::Notify(notification) => self.notify(&notification),
            Effect::Speak { text, rate } => {
                if let Err(err) = self.speech.synthesizer.speak(&text, rate) {
                    reader_warn!("Speech failed: {}", err);
                }
                Ok(())
            }
            Effect::CancelSpeech => {
                if let Err(err) = self.speech.synthesizer.cancel() {
                    reader_warn!("Cancelling speech failed: {}", err);
                }
                Ok(())
            }
            Effect::StartRecognition { lang } => {
                if let Err(err) = self.speech.recognizer.start(&lang) {
                    reader_warn!("Recognition failed to start: {}", err);
                    self.queue(Msg::RecognitionError {
                        error: err.to_string(),
                    });
                    self.queue(Msg::RecognitionEnded);
                }
                Ok(())
            }
            Effect::StopRecognition => {
                if let Err(err) = self.speech.recognizer.stop() {
                    reader_warn!("Recognition failed to stop: {}", err);
                }
                Ok(())
            }
        }
    }

    fn queue(&self, msg: Msg) {
        // The receiver lives in `self`, so sending cannot fail here.
        let _ = self.msg_tx.send(msg);
    }

    fn respond(&mut self, response: &Response) -> io::Result<()> {
        match self.mode {
            OutputMode::Json => self.write_json(response),
            OutputMode::Human => match response {
                Response::Text { text } => writeln!(self.out, "{text}"),
                Response::Started { .. } => Ok(()),
            },
        }
    }

    fn notify(&mut self, notification: &Notification) -> io::Result<()> {
        match self.mode {
            OutputMode::Json => self.write_json(notification),
            OutputMode::Human => match notification_line(notification) {
                Some(line) => writeln!(self.out, "{line}"),
                None => Ok(()),
            },
        }
    }

    fn render(&mut self, view: PageViewModel) -> io::Result<()> {
        match self.mode {
            OutputMode::Json => self.write_json(&view_json(&view))?,
            OutputMode::Human => {
                for line in render_changes(&self.last_view, &view) {
                    writeln!(self.out, "{line}")?;
                }
            }
        }
        self.out.flush()?;
        self.last_view = view;
        Ok(())
    }

    pub fn write_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn state(&self) -> &PageState {
        &self.state
    }
}
