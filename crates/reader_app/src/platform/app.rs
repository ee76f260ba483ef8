use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use anyhow::Context;
use reader_core::{Msg, PageState};
use reader_logging::{reader_info, reader_warn};
use serde_json::json;

use super::effects::{OutputMode, PageHost, Speech};
use super::input::{load_optional_page_text, load_page_text};
use super::speech::{ScriptedRecognizer, TerminalSynthesizer, UnavailableRecognizer};
use crate::cli::{Command, PageArgs};
use crate::config::{self, AssistConfig};

pub fn run(command: Command, config: &AssistConfig) -> anyhow::Result<()> {
    match command {
        Command::Summarize { page, sentences } => summarize(&page, sentences, config),
        Command::Read { page, rate } => read(&page, rate, config),
        Command::Voice { page } => voice(&page, config),
        Command::Session { page } => session(&page, config),
        Command::Config => {
            let text = config::to_ron(config).context("failed to serialize configuration")?;
            println!("{text}");
            Ok(())
        }
    }
}

fn page_state(config: &AssistConfig) -> PageState {
    PageState::new()
        .with_recognition_lang(config.recognition_lang.clone())
        .with_read_limit_chars(config.read_limit_chars)
}

fn stdout_host(state: PageState, speech: Speech, mode: OutputMode) -> PageHost {
    PageHost::new(state, speech, Box::new(io::stdout()), mode, mpsc::channel())
}

fn summarize(page: &PageArgs, sentences: Option<i64>, config: &AssistConfig) -> anyhow::Result<()> {
    let text = load_page_text(page.file.as_deref(), page.html)?;
    let sentence_count = sentences.or_else(|| i64::try_from(config.sentence_count).ok());

    let speech = Speech {
        synthesizer: Box::new(TerminalSynthesizer::new(Box::new(io::stdout()))),
        recognizer: Box::new(UnavailableRecognizer),
    };
    let mut host = stdout_host(page_state(config), speech, OutputMode::Human);
    host.dispatch(Msg::PageLoaded { text })?;
    host.dispatch(Msg::SummarizePage { sentence_count })?;
    Ok(())
}

fn read(page: &PageArgs, rate: Option<f32>, config: &AssistConfig) -> anyhow::Result<()> {
    let text = load_page_text(page.file.as_deref(), page.html)?;
    if text.trim().is_empty() {
        println!("No readable text found.");
        return Ok(());
    }

    let speech = Speech {
        synthesizer: Box::new(TerminalSynthesizer::new(Box::new(io::stdout()))),
        recognizer: Box::new(UnavailableRecognizer),
    };
    let mut host = stdout_host(page_state(config), speech, OutputMode::Human);
    host.dispatch(Msg::PageLoaded { text })?;
    host.dispatch(Msg::Read {
        rate: Some(rate.unwrap_or(config.speech_rate)),
    })?;
    Ok(())
}

fn voice(page: &PageArgs, config: &AssistConfig) -> anyhow::Result<()> {
    let text = load_optional_page_text(page.file.as_deref(), page.html)?;
    let (transcript_tx, transcript_rx) = mpsc::channel();
    let (msg_tx, msg_rx) = mpsc::channel();

    let speech = Speech {
        synthesizer: Box::new(TerminalSynthesizer::new(Box::new(io::stdout()))),
        recognizer: Box::new(ScriptedRecognizer::new(transcript_rx, msg_tx.clone())),
    };
    let mut host = PageHost::new(
        page_state(config),
        speech,
        Box::new(io::stdout()),
        OutputMode::Human,
        (msg_tx, msg_rx),
    );
    host.dispatch(Msg::PageLoaded { text })?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command from stdin")?;
        let transcript = line.trim();
        if transcript.is_empty() {
            continue;
        }
        transcript_tx
            .send(transcript.to_string())
            .context("recognizer stopped accepting transcripts")?;
        host.dispatch(Msg::StartVoiceRecognition)?;
    }
    reader_info!("Voice input closed");
    Ok(())
}

fn session(page: &PageArgs, config: &AssistConfig) -> anyhow::Result<()> {
    let text = load_optional_page_text(page.file.as_deref(), page.html)?;

    // Stdout carries the JSON protocol, so spoken text goes to stderr.
    let speech = Speech {
        synthesizer: Box::new(TerminalSynthesizer::new(Box::new(io::stderr()))),
        recognizer: Box::new(UnavailableRecognizer),
    };
    let state = page_state(config).with_recognition_available(false);
    let mut host = stdout_host(state, speech, OutputMode::Json);
    host.dispatch(Msg::PageLoaded { text })?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read message from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Msg>(&line) {
            Ok(msg) => host.dispatch(msg)?,
            Err(err) => {
                reader_warn!("Rejected message {:?}: {}", line, err);
                host.write_json(&json!({ "type": "error", "error": err.to_string() }))?;
            }
        }
    }
    io::stdout().flush()?;
    Ok(())
}
