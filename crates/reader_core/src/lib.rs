//! Reader core: pure per-page state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;
mod voice;

pub use effect::{Effect, Notification, Response};
pub use msg::Msg;
pub use state::{
    PageState, PageStyle, DEFAULT_FONT_SIZE_PX, DEFAULT_LINE_HEIGHT_HUNDREDTHS,
    DEFAULT_RECOGNITION_LANG,
};
pub use update::{update, NO_SUMMARY_MESSAGE, NO_TEXT_MESSAGE, RECOGNITION_UNSUPPORTED};
pub use view_model::PageViewModel;
pub use voice::{parse_voice_command, FontChoice, VoiceCommand};
