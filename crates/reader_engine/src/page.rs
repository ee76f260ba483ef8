use scraper::{ElementRef, Html, Node, Selector};

/// Read-aloud cap, in characters.
pub const READ_LIMIT_CHARS: usize = 5000;

const SKIPPED_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Visible text of a page, roughly what a browser reports as `innerText`
/// for `<body>`.
///
/// Block elements and `<br>` start new lines, whitespace inside a line is
/// collapsed and blank lines are dropped. Falls back to the whole document
/// when there is no `<body>`.
pub fn extract_page_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let body_sel = Selector::parse("body").ok();
    let root = body_sel
        .as_ref()
        .and_then(|sel| doc.select(sel).next())
        .unwrap_or_else(|| doc.root_element());

    let mut lines = TextLines::default();
    collect_text(root, &mut lines);
    lines.finish()
}

fn collect_text(element: ElementRef<'_>, out: &mut TextLines) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_text(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.break_line();
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.break_line();
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
                if block {
                    out.break_line();
                }
            }
            _ => {}
        }
    }
}

#[derive(Debug, Default)]
struct TextLines {
    lines: Vec<String>,
    current: String,
    pending_space: bool,
}

impl TextLines {
    fn push_text(&mut self, text: &str) {
        if text.starts_with(char::is_whitespace) {
            self.pending_space = true;
        }
        for (position, word) in text.split_whitespace().enumerate() {
            if (position > 0 || self.pending_space) && !self.current.is_empty() {
                self.current.push(' ');
            }
            self.current.push_str(word);
            self.pending_space = false;
        }
        if text.ends_with(char::is_whitespace) {
            self.pending_space = true;
        }
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
        self.pending_space = false;
    }

    fn finish(mut self) -> String {
        self.break_line();
        self.lines.join("\n")
    }
}

/// Cheap sniff for HTML input: a doctype or `<html>` tag at the start.
pub fn looks_like_html(text: &str) -> bool {
    let head: String = text
        .trim_start()
        .chars()
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

/// Prefix of `text` holding at most `limit` characters.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
