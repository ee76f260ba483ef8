/// A trimmed slice of the document together with its position in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    pub text: &'a str,
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Strip surrounding whitespace, counting a stray byte order mark as whitespace.
pub(crate) fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Split text into sentences.
///
/// A sentence is a maximal run of non-terminator characters plus at most one
/// trailing `.`, `!` or `?`. Extra terminators after the first one are dropped,
/// as are runs that are empty after trimming. If nothing survives, the whole
/// trimmed input is returned as the only sentence.
///
/// Abbreviations, decimals and quotations are not recognized.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut run_start: Option<usize> = None;

    for (pos, c) in text.char_indices() {
        if is_terminator(c) {
            if let Some(start) = run_start.take() {
                push_trimmed(&mut sentences, &text[start..pos + c.len_utf8()]);
            }
        } else if run_start.is_none() {
            run_start = Some(pos);
        }
    }
    if let Some(start) = run_start {
        push_trimmed(&mut sentences, &text[start..]);
    }

    if sentences.is_empty() {
        sentences.push(Sentence {
            index: 0,
            text: trim_text(text),
        });
    }
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<Sentence<'a>>, raw: &'a str) {
    let text = trim_text(raw);
    if text.is_empty() {
        return;
    }
    sentences.push(Sentence {
        index: sentences.len(),
        text,
    });
}
