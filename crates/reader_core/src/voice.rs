#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChoice {
    Arial,
    Georgia,
    Verdana,
}

impl FontChoice {
    pub fn family(self) -> &'static str {
        match self {
            FontChoice::Arial => "Arial",
            FontChoice::Georgia => "Georgia",
            FontChoice::Verdana => "Verdana",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    IncreaseFont,
    DecreaseFont,
    ToggleBold,
    ToggleItalic,
    IncreaseSpacing,
    DecreaseSpacing,
    SetFont(FontChoice),
    ReadPage,
    StopReading,
    Unknown,
}

/// Map a spoken phrase to a command. Rules are checked in a fixed order and
/// the first phrase found anywhere in the transcript wins.
pub fn parse_voice_command(transcript: &str) -> VoiceCommand {
    let command = transcript.to_lowercase();
    let has = |phrase: &str| command.contains(phrase);

    if has("increase font") || has("bigger") || has("larger") {
        VoiceCommand::IncreaseFont
    } else if has("decrease font") || has("smaller") {
        VoiceCommand::DecreaseFont
    } else if has("bold") {
        VoiceCommand::ToggleBold
    } else if has("italic") {
        VoiceCommand::ToggleItalic
    } else if has("increase spacing") || has("more spacing") {
        VoiceCommand::IncreaseSpacing
    } else if has("decrease spacing") || has("less spacing") {
        VoiceCommand::DecreaseSpacing
    } else if has("arial") {
        VoiceCommand::SetFont(FontChoice::Arial)
    } else if has("georgia") {
        VoiceCommand::SetFont(FontChoice::Georgia)
    } else if has("verdana") {
        VoiceCommand::SetFont(FontChoice::Verdana)
    } else if has("read") && (has("page") || has("this")) {
        VoiceCommand::ReadPage
    } else if has("stop") {
        VoiceCommand::StopReading
    } else {
        VoiceCommand::Unknown
    }
}
