use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use reader_engine::{decode_page, extract_page_text, looks_like_html};
use reader_logging::reader_debug;

/// Read page text from `file`, or from stdin when no file is given.
pub fn load_page_text(file: Option<&Path>, html: bool) -> anyhow::Result<String> {
    let bytes = match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read page from stdin")?;
            buf
        }
    };
    page_text_from_bytes(&bytes, html)
}

/// Like [`load_page_text`] but leaves stdin alone: no file means an empty page.
pub fn load_optional_page_text(file: Option<&Path>, html: bool) -> anyhow::Result<String> {
    match file {
        Some(path) => load_page_text(Some(path), html),
        None => Ok(String::new()),
    }
}

fn page_text_from_bytes(bytes: &[u8], html: bool) -> anyhow::Result<String> {
    let decoded = decode_page(bytes, None).context("page is not readable text")?;
    reader_debug!(
        "Decoded {} bytes as {}",
        bytes.len(),
        decoded.encoding_label
    );
    if html || looks_like_html(&decoded.text) {
        Ok(extract_page_text(&decoded.text))
    } else {
        Ok(decoded.text)
    }
}
