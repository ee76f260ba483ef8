use reader_engine::READ_LIMIT_CHARS;

use crate::view_model::PageViewModel;

/// Assumed font size when the page has not been restyled yet.
pub const DEFAULT_FONT_SIZE_PX: u32 = 16;
/// Assumed line height (1.5) when the page has not been restyled yet.
pub const DEFAULT_LINE_HEIGHT_HUNDREDTHS: u32 = 150;
pub const DEFAULT_RECOGNITION_LANG: &str = "en-US";

/// Style overrides applied to the page. `None` leaves the page's own value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageStyle {
    pub font_size_px: Option<u32>,
    /// Line height multiplier in hundredths, so `150` is `1.5`.
    pub line_height_hundredths: Option<u32>,
    pub font_family: Option<String>,
    pub bold: bool,
    pub italic: bool,
}

impl PageStyle {
    pub fn effective_font_size_px(&self) -> u32 {
        self.font_size_px.unwrap_or(DEFAULT_FONT_SIZE_PX)
    }

    pub fn effective_line_height_hundredths(&self) -> u32 {
        self.line_height_hundredths.unwrap_or(DEFAULT_LINE_HEIGHT_HUNDREDTHS)
    }
}

/// Reader state for a single page. Each page owns its own instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    page_text: String,
    selection: String,
    style: PageStyle,
    listening: bool,
    recognition_available: bool,
    recognition_lang: String,
    read_limit_chars: usize,
    summary: Option<String>,
    dirty: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_text: String::new(),
            selection: String::new(),
            style: PageStyle::default(),
            listening: false,
            recognition_available: true,
            recognition_lang: DEFAULT_RECOGNITION_LANG.to_string(),
            read_limit_chars: READ_LIMIT_CHARS,
            summary: None,
            dirty: false,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recognition_available(mut self, available: bool) -> Self {
        self.recognition_available = available;
        self
    }

    pub fn with_recognition_lang(mut self, lang: impl Into<String>) -> Self {
        self.recognition_lang = lang.into();
        self
    }

    /// Upper bound on characters spoken when reading the page aloud.
    pub fn with_read_limit_chars(mut self, limit: usize) -> Self {
        self.read_limit_chars = limit;
        self
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            font_size_px: self.style.font_size_px,
            line_height_hundredths: self.style.line_height_hundredths,
            font_family: self.style.font_family.clone(),
            bold: self.style.bold,
            italic: self.style.italic,
            listening: self.listening,
            summary: self.summary.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn page_text(&self) -> &str {
        &self.page_text
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn style(&self) -> &PageStyle {
        &self.style
    }

    pub fn listening(&self) -> bool {
        self.listening
    }

    pub fn recognition_available(&self) -> bool {
        self.recognition_available
    }

    pub fn recognition_lang(&self) -> &str {
        &self.recognition_lang
    }

    pub fn read_limit_chars(&self) -> usize {
        self.read_limit_chars
    }

    pub(crate) fn load_page(&mut self, text: String) {
        self.page_text = text;
        self.selection.clear();
        if self.summary.take().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn set_selection(&mut self, text: String) {
        self.selection = text;
    }

    pub(crate) fn set_font_size(&mut self, px: u32) {
        self.style.font_size_px = Some(px);
        self.dirty = true;
    }

    pub(crate) fn set_line_height(&mut self, hundredths: u32) {
        self.style.line_height_hundredths = Some(hundredths);
        self.dirty = true;
    }

    pub(crate) fn set_font_family(&mut self, family: Option<String>) {
        self.style.font_family = family;
        self.dirty = true;
    }

    pub(crate) fn toggle_bold(&mut self) -> bool {
        self.style.bold = !self.style.bold;
        self.dirty = true;
        self.style.bold
    }

    pub(crate) fn toggle_italic(&mut self) -> bool {
        self.style.italic = !self.style.italic;
        self.dirty = true;
        self.style.italic
    }

    pub(crate) fn set_listening(&mut self, listening: bool) {
        if self.listening != listening {
            self.listening = listening;
            self.dirty = true;
        }
    }

    pub(crate) fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
        self.dirty = true;
    }
}
