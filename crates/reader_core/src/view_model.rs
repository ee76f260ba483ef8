#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    pub font_size_px: Option<u32>,
    pub line_height_hundredths: Option<u32>,
    pub font_family: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub listening: bool,
    /// Text for the summary panel, fallback messages included.
    pub summary: Option<String>,
    pub dirty: bool,
}

impl PageViewModel {
    /// Inline CSS declarations for the overridden style properties.
    pub fn style_declarations(&self) -> String {
        let mut decls = Vec::new();
        if let Some(px) = self.font_size_px {
            decls.push(format!("font-size: {px}px"));
        }
        if let Some(hundredths) = self.line_height_hundredths {
            decls.push(format!("line-height: {}", format_hundredths(hundredths)));
        }
        if let Some(family) = &self.font_family {
            decls.push(format!("font-family: {family}"));
        }
        if self.bold {
            decls.push("font-weight: bold".to_string());
        }
        if self.italic {
            decls.push("font-style: italic".to_string());
        }
        decls.join("; ")
    }
}

fn format_hundredths(value: u32) -> String {
    let whole = value / 100;
    let frac = value % 100;
    if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{whole}.{}", frac / 10)
    } else {
        format!("{whole}.{frac:02}")
    }
}
